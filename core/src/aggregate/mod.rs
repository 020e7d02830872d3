pub mod classify;
pub mod fetch;
pub mod summary;

pub use classify::{CompletionRule, DASHBOARD_MISSING_STATUS, REPORT_MISSING_STATUS};
pub use fetch::{
    fetch_all, FetchOptions, FetchOutcome, PageRequest, TaskSource, Truncation, MAX_PAGE_SIZE,
};
pub use summary::{summarize, AggregateSummary};
