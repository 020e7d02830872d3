//! Sequential retrieval of the complete task set from a paginated source.

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::tasks::{Task, TaskPage};

/// Largest page size the list endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub include_closed: bool,
}

/// A paginated task list.
#[async_trait]
pub trait TaskSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_page(&self, request: PageRequest) -> anyhow::Result<TaskPage>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub page_size: u32,
    pub include_closed: bool,
    /// Stop after this many pages even if the server reports more.
    pub max_pages: Option<u32>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            include_closed: true,
            max_pages: None,
        }
    }
}

impl FetchOptions {
    pub fn limit(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl From<&ApiConfig> for FetchOptions {
    fn from(cfg: &ApiConfig) -> Self {
        Self {
            page_size: cfg.page_size,
            include_closed: cfg.include_closed,
            max_pages: cfg.max_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Truncation {
    /// A page after the first failed; earlier pages were kept.
    PageFailed { page: u32, reason: String },
    /// `max_pages` was reached while the server still reported more.
    MaxPagesReached { pages: u32 },
}

impl std::fmt::Display for Truncation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Truncation::PageFailed { page, reason } => {
                write!(f, "page {page} failed: {reason}")
            }
            Truncation::MaxPagesReached { pages } => {
                write!(f, "stopped after {pages} pages")
            }
        }
    }
}

/// Everything retrieved by one [`fetch_all`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub tasks: Vec<Task>,
    /// Number of pages successfully retrieved.
    pub pages: u32,
    pub truncated: Option<Truncation>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.truncated.is_none()
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

/// Fetch pages 0, 1, 2, … until the continuation flag is false.
///
/// A failure on page 0 fails the call. A failure on any later page ends the
/// loop and returns what was accumulated, marked as truncated.
pub async fn fetch_all<S>(source: &S, opts: &FetchOptions) -> Result<FetchOutcome, FetchError>
where
    S: TaskSource + ?Sized,
{
    let limit = opts.limit();
    let max_pages = opts.max_pages.map(|m| m.max(1));
    let mut tasks: Vec<Task> = Vec::new();
    let mut page: u32 = 0;

    loop {
        if let Some(max) = max_pages {
            if page >= max {
                tracing::warn!(
                    target: "taskboard.fetch",
                    stage = "fetch.all.max_pages",
                    source = source.name(),
                    pages = page,
                    tasks = tasks.len()
                );
                return Ok(FetchOutcome {
                    tasks,
                    pages: page,
                    truncated: Some(Truncation::MaxPagesReached { pages: page }),
                });
            }
        }

        let request = PageRequest {
            page,
            limit,
            include_closed: opts.include_closed,
        };
        tracing::debug!(
            target: "taskboard.fetch",
            stage = "fetch.page.in",
            source = source.name(),
            page = page,
            limit = limit
        );

        match source.fetch_page(request).await {
            Ok(batch) => {
                let has_more = batch.has_more;
                let received = batch.tasks.len();
                tasks.extend(batch.tasks);
                tracing::debug!(
                    target: "taskboard.fetch",
                    stage = "fetch.page.out",
                    page = page,
                    received = received,
                    has_more = has_more
                );
                if !has_more {
                    tracing::debug!(
                        target: "taskboard.fetch",
                        stage = "fetch.all.done",
                        pages = page + 1,
                        tasks = tasks.len()
                    );
                    return Ok(FetchOutcome {
                        tasks,
                        pages: page + 1,
                        truncated: None,
                    });
                }
                page += 1;
            }
            Err(err) if page == 0 => {
                tracing::warn!(
                    target: "taskboard.fetch",
                    stage = "fetch.all.failed",
                    source = source.name(),
                    error = %err
                );
                return Err(FetchError::FirstPage(err));
            }
            Err(err) => {
                tracing::warn!(
                    target: "taskboard.fetch",
                    stage = "fetch.all.truncated",
                    source = source.name(),
                    page = page,
                    tasks = tasks.len(),
                    error = %err
                );
                return Ok(FetchOutcome {
                    tasks,
                    pages: page,
                    truncated: Some(Truncation::PageFailed {
                        page,
                        reason: format!("{err:#}"),
                    }),
                });
            }
        }
    }
}
