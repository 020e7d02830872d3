use std::sync::Arc;

use anyhow::Result;

use taskboard_core::api::{ApiConfig, TaskSource, TaskSourceFactory};

use crate::tasks::HttpTaskSource;

pub fn build_task_source(cfg: &ApiConfig) -> Result<Arc<dyn TaskSource>> {
    let base_url = cfg.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        anyhow::bail!("api.base_url must be an http(s) URL, got {:?}", cfg.base_url);
    }
    Ok(Arc::new(HttpTaskSource::new(
        base_url.to_string(),
        cfg.api_key.clone(),
        cfg.timeout_ms,
    )?))
}

/// [`TaskSourceFactory`] backed by [`HttpTaskSource`].
pub struct HttpSourceFactory;

impl TaskSourceFactory for HttpSourceFactory {
    fn build_source(&self, cfg: &ApiConfig) -> Result<Arc<dyn TaskSource>> {
        build_task_source(cfg)
    }
}
