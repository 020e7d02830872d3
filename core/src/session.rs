//! Per-session view state for the dashboard front end.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;

use crate::aggregate::{
    fetch_all, summarize, AggregateSummary, CompletionRule, FetchOptions, FetchOutcome,
    TaskSource, Truncation,
};
use crate::error::FetchError;
use crate::report::{build_report_from_outcome, ReportData};
use crate::tasks::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Tasks,
    Workspaces,
    Automation,
    Reports,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Tasks => "tasks",
            Tab::Workspaces => "workspaces",
            Tab::Automation => "automation",
            Tab::Reports => "reports",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Tab::Dashboard),
            "tasks" => Ok(Tab::Tasks),
            "workspaces" => Ok(Tab::Workspaces),
            "automation" => Ok(Tab::Automation),
            "reports" => Ok(Tab::Reports),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// What a tab switch produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    Counters {
        summary: AggregateSummary,
        incomplete: Option<String>,
    },
    Tasks {
        tasks: Vec<Task>,
        incomplete: Option<String>,
    },
    Report(ReportData),
    /// Tabs whose data lives behind endpoints this crate does not call.
    External(Tab),
}

/// State one dashboard session owns: the source, cached tasks and the
/// active tab. Each session is independent; nothing is shared between them.
pub struct DashboardSession {
    source: Arc<dyn TaskSource>,
    options: FetchOptions,
    current_tab: Tab,
    last_fetch: Option<FetchOutcome>,
}

impl DashboardSession {
    pub fn new(source: Arc<dyn TaskSource>, options: FetchOptions) -> Self {
        Self {
            source,
            options,
            current_tab: Tab::default(),
            last_fetch: None,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    /// Tasks from the last successful fetch, empty before the first one.
    pub fn tasks(&self) -> &[Task] {
        self.last_fetch
            .as_ref()
            .map(|o| o.tasks.as_slice())
            .unwrap_or(&[])
    }

    pub fn truncation(&self) -> Option<&Truncation> {
        self.last_fetch.as_ref().and_then(|o| o.truncated.as_ref())
    }

    /// Re-fetch the full task set. A failed refresh keeps the previous cache.
    pub async fn refresh(&mut self) -> Result<&FetchOutcome, FetchError> {
        let outcome = fetch_all(self.source.as_ref(), &self.options).await?;
        Ok(self.last_fetch.insert(outcome))
    }

    /// Dashboard counters over the cached tasks.
    pub fn counters(&self) -> AggregateSummary {
        summarize(self.tasks(), &CompletionRule::dashboard())
    }

    pub async fn switch_tab(&mut self, tab: Tab) -> Result<TabView, FetchError> {
        self.current_tab = tab;
        tracing::debug!(target: "taskboard.session", stage = "session.tab", tab = %tab);

        match tab {
            Tab::Dashboard => {
                self.refresh().await?;
                Ok(TabView::Counters {
                    summary: self.counters(),
                    incomplete: self.incomplete_reason(),
                })
            }
            Tab::Tasks => {
                self.refresh().await?;
                Ok(TabView::Tasks {
                    tasks: self.tasks().to_vec(),
                    incomplete: self.incomplete_reason(),
                })
            }
            Tab::Reports => {
                let outcome = self.refresh().await?;
                Ok(TabView::Report(build_report_from_outcome(outcome, Utc::now())))
            }
            Tab::Workspaces | Tab::Automation => Ok(TabView::External(tab)),
        }
    }

    fn incomplete_reason(&self) -> Option<String> {
        self.truncation().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trip_names() {
        for tab in [
            Tab::Dashboard,
            Tab::Tasks,
            Tab::Workspaces,
            Tab::Automation,
            Tab::Reports,
        ] {
            assert_eq!(tab.as_str().parse::<Tab>(), Ok(tab));
        }
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(" Reports ".parse::<Tab>(), Ok(Tab::Reports));
    }
}
