use serde::{Deserialize, Serialize};

/// Status histogram key for tasks without a status on the dashboard counters.
pub const DASHBOARD_MISSING_STATUS: &str = "sin estado";

/// Status histogram key for tasks without a status in the visual report.
pub const REPORT_MISSING_STATUS: &str = "pendiente";

/// Decides whether a task status counts as completed.
///
/// The dashboard counters and the visual report have always used different
/// predicates; both are kept as presets and are not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRule {
    synonyms: Vec<String>,
    case_insensitive: bool,
    missing_status: String,
}

impl CompletionRule {
    pub fn custom(
        synonyms: impl IntoIterator<Item = impl Into<String>>,
        case_insensitive: bool,
        missing_status: impl Into<String>,
    ) -> Self {
        let synonyms = synonyms
            .into_iter()
            .map(Into::into)
            .map(|s: String| if case_insensitive { s.to_lowercase() } else { s })
            .collect();
        Self {
            synonyms,
            case_insensitive,
            missing_status: missing_status.into(),
        }
    }

    /// Lower-cased status equal to `"complete"`.
    pub fn dashboard() -> Self {
        Self::custom(["complete"], true, DASHBOARD_MISSING_STATUS)
    }

    /// Status exactly `"complete"` or `"completada"`.
    pub fn report() -> Self {
        Self::custom(["complete", "completada"], false, REPORT_MISSING_STATUS)
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn missing_status(&self) -> &str {
        &self.missing_status
    }

    /// Absent or empty statuses are never completed.
    pub fn is_completed(&self, status: Option<&str>) -> bool {
        let Some(status) = status.filter(|s| !s.is_empty()) else {
            return false;
        };
        if self.case_insensitive {
            let lowered = status.to_lowercase();
            self.synonyms.iter().any(|s| *s == lowered)
        } else {
            self.synonyms.iter().any(|s| s == status)
        }
    }

    /// Histogram key: the raw status, or the sentinel when absent.
    pub fn status_key<'a>(&'a self, status: Option<&'a str>) -> &'a str {
        status
            .filter(|s| !s.is_empty())
            .unwrap_or(self.missing_status.as_str())
    }
}
