mod build;
mod labels;
mod render;

pub use build::{build_report, build_report_from_outcome, ReportData, TaskDetail};
pub use labels::{priority_key_label, priority_label, status_label, truncate_text};
pub use render::{format_counters, format_text};
