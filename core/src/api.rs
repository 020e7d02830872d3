//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `taskboard_core::api` instead of reaching into internal modules.

pub use crate::aggregate::{
    fetch_all, summarize, AggregateSummary, CompletionRule, FetchOptions, FetchOutcome,
    PageRequest, TaskSource, Truncation, MAX_PAGE_SIZE,
};
pub use crate::config::{load, load_default, ApiConfig, AppConfig, LoggingConfig};
pub use crate::context::{AppContext, TaskSourceFactory};
pub use crate::error::{CliError, FetchError};
pub use crate::report::{
    build_report, build_report_from_outcome, format_counters, format_text, ReportData, TaskDetail,
};
pub use crate::session::{DashboardSession, Tab, TabView};
pub use crate::tasks::{
    filter_by_search, filter_by_status, normalize_date, DateValue, Task, TaskPage,
};
