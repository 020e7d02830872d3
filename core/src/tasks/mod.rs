pub mod dates;
pub mod filter;
pub mod models;

pub use dates::{normalize_date, DateValue};
pub use filter::{filter_by_search, filter_by_status};
pub use models::{Task, TaskPage, NO_PRIORITY_LABEL, UNASSIGNED_LABEL};
