use crate::aggregate::{FetchOptions, TaskSource};
use crate::config::{ApiConfig, AppConfig};
use crate::error::CliError;
use std::sync::Arc;

/// Builds the task source for a given API configuration.
pub trait TaskSourceFactory: Send + Sync {
    fn build_source(&self, cfg: &ApiConfig) -> anyhow::Result<Arc<dyn TaskSource>>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    source_factory: Option<Arc<dyn TaskSourceFactory>>,
}

impl AppContext {
    pub fn new(cfg: AppConfig, source_factory: Option<Arc<dyn TaskSourceFactory>>) -> Self {
        Self {
            cfg,
            source_factory,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn with_config(&self, cfg: AppConfig) -> Self {
        Self {
            cfg,
            source_factory: self.source_factory.clone(),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::from(&self.cfg.api)
    }

    pub fn build_source(&self) -> Result<Arc<dyn TaskSource>, CliError> {
        let Some(factory) = self.source_factory.as_ref() else {
            return Err(CliError::Config(
                "source_factory missing (cannot build task source)".into(),
            ));
        };
        factory.build_source(&self.cfg.api).map_err(CliError::Anyhow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::PageRequest;
    use crate::tasks::TaskPage;
    use async_trait::async_trait;

    struct EmptySource;

    #[async_trait]
    impl TaskSource for EmptySource {
        fn name(&self) -> &str {
            "empty"
        }

        async fn fetch_page(&self, _request: PageRequest) -> anyhow::Result<TaskPage> {
            Ok(TaskPage::default())
        }
    }

    struct EmptyFactory;

    impl TaskSourceFactory for EmptyFactory {
        fn build_source(&self, _cfg: &ApiConfig) -> anyhow::Result<Arc<dyn TaskSource>> {
            Ok(Arc::new(EmptySource))
        }
    }

    #[test]
    fn test_build_source_requires_factory() {
        let ctx = AppContext::new(AppConfig::default(), None);
        assert!(matches!(ctx.build_source(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_build_source_uses_factory() {
        let ctx = AppContext::new(AppConfig::default(), Some(Arc::new(EmptyFactory)));
        let source = ctx.build_source().unwrap();
        assert_eq!(source.name(), "empty");
    }

    #[test]
    fn test_with_config_changes_fetch_options() {
        let ctx = AppContext::new(AppConfig::default(), None);
        let mut cfg = ctx.cfg().clone();
        cfg.api.page_size = 25;
        cfg.api.max_pages = Some(4);
        let opts = ctx.with_config(cfg).fetch_options();
        assert_eq!(opts.limit(), 25);
        assert_eq!(opts.max_pages, Some(4));
    }
}
