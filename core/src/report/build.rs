use chrono::{DateTime, Utc};
use serde::Serialize;

use super::labels::{priority_label, status_label};
use crate::aggregate::{summarize, AggregateSummary, CompletionRule, FetchOutcome};
use crate::tasks::Task;

const NOT_AVAILABLE: &str = "N/A";

/// One row of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
    pub id: String,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub priority: String,
    pub priority_label: String,
    pub assignee: String,
    pub created_at: String,
    pub list_name: String,
    pub workspace_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: AggregateSummary,
    /// Set when the task set behind the report is known to be partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete: Option<String>,
    pub tasks_details: Vec<TaskDetail>,
}

/// Visual report over `tasks`, classified with [`CompletionRule::report`].
pub fn build_report(tasks: &[Task], generated_at: DateTime<Utc>) -> ReportData {
    let rule = CompletionRule::report();
    let summary = summarize(tasks, &rule);

    let tasks_details = tasks
        .iter()
        .map(|t| {
            let status = rule.status_key(t.status_str()).to_string();
            TaskDetail {
                id: t.identifier().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                name: t.name.clone(),
                status_label: status_label(&status).to_string(),
                status,
                priority: t.priority_key(),
                priority_label: priority_label(t.priority_level()).to_string(),
                assignee: t.assignee_label().to_string(),
                created_at: t.created().display(),
                list_name: or_not_available(t.list_name.as_deref()),
                workspace_name: or_not_available(t.workspace_name.as_deref()),
            }
        })
        .collect();

    tracing::debug!(
        target: "taskboard.report",
        stage = "report.build",
        total = summary.total,
        completed = summary.completed,
        pending = summary.pending
    );

    ReportData {
        generated_at,
        summary,
        incomplete: None,
        tasks_details,
    }
}

/// Report over a fetch outcome, carrying its truncation forward.
pub fn build_report_from_outcome(outcome: &FetchOutcome, generated_at: DateTime<Utc>) -> ReportData {
    let mut report = build_report(&outcome.tasks, generated_at);
    report.incomplete = outcome.truncated.as_ref().map(ToString::to_string);
    report
}

fn or_not_available(s: Option<&str>) -> String {
    s.filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Truncation;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_rows() {
        let tasks = vec![
            Task {
                clickup_id: Some("86a".into()),
                name: "Enviar propuesta".into(),
                status: Some("completada".into()),
                priority: Some(1.into()),
                assignee_name: Some("Ana".into()),
                created_at: Some(json!("2025-09-01T08:00:00Z")),
                list_name: Some("Ventas".into()),
                ..Task::default()
            },
            Task {
                name: "Sin datos".into(),
                ..Task::default()
            },
        ];

        let report = build_report(&tasks, fixed_time());
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.completed, 1);
        assert_eq!(report.summary.pending, 1);

        let first = &report.tasks_details[0];
        assert_eq!(first.id, "86a");
        assert_eq!(first.status_label, "Completada");
        assert_eq!(first.priority_label, "Urgente");
        assert_eq!(first.created_at, "1/9/2025");
        assert_eq!(first.workspace_name, "N/A");

        let second = &report.tasks_details[1];
        assert_eq!(second.id, "N/A");
        assert_eq!(second.status, "pendiente");
        assert_eq!(second.status_label, "Pendiente");
        assert_eq!(second.priority, "sin prioridad");
        assert_eq!(second.assignee, "Sin asignar");
        assert_eq!(second.created_at, "Sin fecha");
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&[], fixed_time());
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["total"], 0);
        assert_eq!(v["completed"], 0);
        assert!(v["by_status"].as_object().unwrap().is_empty());
        assert!(v.get("incomplete").is_none());
        assert_eq!(v["generated_at"], "2025-09-04T12:00:00Z");
    }

    #[test]
    fn test_report_from_truncated_outcome() {
        let outcome = FetchOutcome {
            tasks: vec![Task::default()],
            pages: 1,
            truncated: Some(Truncation::PageFailed {
                page: 1,
                reason: "status 500".into(),
            }),
        };
        let report = build_report_from_outcome(&outcome, fixed_time());
        assert_eq!(report.incomplete.as_deref(), Some("page 1 failed: status 500"));
        assert_eq!(report.summary.total, 1);
    }
}
