use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dates::{normalize_date, DateValue};

/// Label used when a task has neither an assignee name nor an assignee id.
pub const UNASSIGNED_LABEL: &str = "Sin asignar";

/// Histogram key for tasks without a priority.
pub const NO_PRIORITY_LABEL: &str = "sin prioridad";

/// A task record as returned by the list endpoint.
///
/// Only the fields read by the aggregation pipeline and the report table are
/// modelled; anything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickup_id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Kept as sent. Rows are usually integers, older ones numeric strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

impl Task {
    /// Backend identifier: `clickup_id` when present, otherwise the numeric `id`.
    pub fn identifier(&self) -> Option<String> {
        if let Some(cid) = self.clickup_id.as_deref().filter(|s| !s.is_empty()) {
            return Some(cid.to_string());
        }
        match self.id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Status with empty strings treated as absent.
    pub fn status_str(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    /// Display name if present, else identifier, else [`UNASSIGNED_LABEL`].
    pub fn assignee_label(&self) -> &str {
        non_empty(self.assignee_name.as_deref())
            .or_else(|| non_empty(self.assignee_id.as_deref()))
            .unwrap_or(UNASSIGNED_LABEL)
    }

    /// Numeric priority level when the raw value is an integer or a numeric string.
    pub fn priority_level(&self) -> Option<i64> {
        match self.priority.as_ref()? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Histogram key for the priority.
    ///
    /// Numeric levels render as `"N"` (`0` stays `"0"`), other strings as-is and
    /// any other present value as its JSON text. Only null and `""` are absent.
    pub fn priority_key(&self) -> String {
        if let Some(level) = self.priority_level() {
            return level.to_string();
        }
        match self.priority.as_ref() {
            None | Some(Value::Null) => NO_PRIORITY_LABEL.to_string(),
            Some(Value::String(s)) if s.is_empty() => NO_PRIORITY_LABEL.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn due(&self) -> DateValue {
        self.due_date
            .as_ref()
            .map(normalize_date)
            .unwrap_or(DateValue::Missing)
    }

    pub fn created(&self) -> DateValue {
        self.created_at
            .as_ref()
            .map(normalize_date)
            .unwrap_or(DateValue::Missing)
    }
}

/// One page of the paginated list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Continuation flag; absent means this was the last page.
    #[serde(default)]
    pub has_more: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TaskPage {
    pub fn new(tasks: Vec<Task>, has_more: bool) -> Self {
        Self {
            tasks,
            has_more,
            ..Self::default()
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}
