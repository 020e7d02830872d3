use std::collections::BTreeMap;

use serde::Serialize;

use super::classify::CompletionRule;
use crate::tasks::Task;

/// Counts derived from one task sequence. Recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
    pub by_assignee: BTreeMap<String, usize>,
}

impl AggregateSummary {
    /// Completed share in whole percent, 0 for an empty summary.
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

pub fn summarize(tasks: &[Task], rule: &CompletionRule) -> AggregateSummary {
    let mut summary = AggregateSummary {
        total: tasks.len(),
        ..AggregateSummary::default()
    };

    for task in tasks {
        let status = task.status_str();
        if rule.is_completed(status) {
            summary.completed += 1;
        }

        *summary
            .by_status
            .entry(rule.status_key(status).to_string())
            .or_insert(0) += 1;
        *summary.by_priority.entry(task.priority_key()).or_insert(0) += 1;
        *summary
            .by_assignee
            .entry(task.assignee_label().to_string())
            .or_insert(0) += 1;
    }

    summary.pending = summary.total - summary.completed;
    summary
}
