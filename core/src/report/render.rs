use std::collections::BTreeMap;

use super::build::ReportData;
use super::labels::{priority_key_label, truncate_text};
use crate::aggregate::AggregateSummary;

/// Plain-text rendering of the dashboard counters.
pub fn format_counters(summary: &AggregateSummary, incomplete: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("total: {}\n", summary.total));
    out.push_str(&format!("pending: {}\n", summary.pending));
    out.push_str(&format!("completed: {}\n", summary.completed));
    if let Some(reason) = incomplete {
        out.push_str(&format!("warning: data may be incomplete ({reason})\n"));
    }
    out
}

pub fn format_text(report: &ReportData) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str("Task report\n");
    out.push_str(&format!(
        "generated_at: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(reason) = &report.incomplete {
        out.push_str(&format!("warning: data may be incomplete ({reason})\n"));
    }
    out.push_str(&format!("total: {}\n", s.total));
    out.push_str(&format!(
        "completed: {} ({}%)\n",
        s.completed,
        s.completion_percent()
    ));
    out.push_str(&format!("pending: {}\n", s.pending));

    push_histogram(&mut out, "status", &s.by_status, |k| k.to_string());
    push_histogram(&mut out, "priority", &s.by_priority, |k| {
        format!("{} ({})", k, priority_key_label(k))
    });
    push_histogram(&mut out, "assignee", &s.by_assignee, |k| k.to_string());

    if !report.tasks_details.is_empty() {
        out.push_str("tasks:\n");
        for t in &report.tasks_details {
            out.push_str(&format!(
                "- {} | {} | {} | {} | {} | {} | {} | {}\n",
                truncate_text(Some(&t.name), 30),
                t.status_label,
                t.priority_label,
                truncate_text(Some(&t.assignee), 20),
                t.created_at,
                truncate_text(Some(&t.list_name), 25),
                truncate_text(Some(&t.workspace_name), 25),
                t.id
            ));
        }
    }

    out
}

fn push_histogram<F>(out: &mut String, title: &str, counts: &BTreeMap<String, usize>, label: F)
where
    F: Fn(&str) -> String,
{
    if counts.is_empty() {
        return;
    }
    out.push_str(&format!("{title}:\n"));
    for (key, count) in counts {
        out.push_str(&format!("  {}: {}\n", label(key), count));
    }
}
