use async_trait::async_trait;
use taskboard_core::api::{PageRequest, TaskPage, TaskSource};
use thiserror::Error;

const BODY_PREVIEW_LIMIT: usize = 512;

/// Failure of a single page request. Carried inside the `anyhow::Error` that
/// `fetch_page` returns, so callers can downcast for the status or URL.
#[derive(Debug, Error)]
pub enum TaskHttpError {
    #[error("task request to {url} failed (timed_out={timed_out}): {source}")]
    Transport {
        url: String,
        timed_out: bool,
        #[source]
        source: reqwest::Error,
    },
    #[error("task endpoint {url} answered {status}: {preview}")]
    Status {
        url: String,
        status: u16,
        preview: String,
    },
    #[error("failed to decode task page from {url}: {source} | body={preview}")]
    Decode {
        url: String,
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TaskHttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }

    fn transport(source: reqwest::Error, url: &str) -> Self {
        Self::Transport {
            url: url.to_string(),
            timed_out: source.is_timeout(),
            source,
        }
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    let mut out: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();
    if trimmed.chars().nth(BODY_PREVIEW_LIMIT).is_some() {
        out.push_str("...");
    }
    out
}

async fn parse_page_response(resp: reqwest::Response) -> Result<TaskPage, TaskHttpError> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp
        .text()
        .await
        .map_err(|err| TaskHttpError::transport(err, &url))?;

    if !status.is_success() {
        return Err(TaskHttpError::Status {
            preview: preview_body(&body),
            status: status.as_u16(),
            url,
        });
    }

    serde_json::from_str::<TaskPage>(&body).map_err(|source| TaskHttpError::Decode {
        preview: preview_body(&body),
        url,
        source,
    })
}

/// Client for the paginated `/api/v1/tasks/` endpoint.
#[derive(Clone)]
pub struct HttpTaskSource {
    api_key: String,
    http: reqwest::Client,
    url_tasks: String,
}

impl HttpTaskSource {
    pub fn new(base_url: String, api_key: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()?;
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            api_key,
            http,
            url_tasks: format!("{}/api/v1/tasks/", normalized),
        })
    }

    pub fn tasks_url(&self) -> &str {
        &self.url_tasks
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.trim().is_empty() {
            req
        } else {
            req.bearer_auth(&self.api_key)
        }
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, request: PageRequest) -> anyhow::Result<TaskPage> {
        let url = &self.url_tasks;
        tracing::debug!(
            target: "taskboard.fetch",
            stage = "tasks.http.page.in",
            url = %url,
            page = request.page,
            limit = request.limit,
            include_closed = request.include_closed
        );
        let req = self.http.get(url).query(&[
            ("include_closed", request.include_closed.to_string()),
            ("page", request.page.to_string()),
            ("limit", request.limit.to_string()),
        ]);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| TaskHttpError::transport(err, url))?;
        let status = resp.status();
        let page = parse_page_response(resp).await?;
        tracing::debug!(
            target: "taskboard.fetch",
            stage = "tasks.http.page.out",
            status = %status,
            tasks = page.tasks.len(),
            has_more = page.has_more
        );
        Ok(page)
    }
}
