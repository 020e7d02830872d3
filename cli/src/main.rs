use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard_cli::commands::{cli, dashboard, report, tasks};
use taskboard_core::api as core_api;
use taskboard_core::api::CliError;
use taskboard_core::config::LoggingConfig;
use taskboard_plugins::factory::HttpSourceFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = core_api::load(args.config.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(base_url) = args.base_url.as_deref().filter(|s| !s.trim().is_empty()) {
        cfg.api.base_url = base_url.to_string();
    }
    init_tracing(&cfg.logging)?;

    let ctx = core_api::AppContext::new(cfg, Some(Arc::new(HttpSourceFactory)));
    dispatch(args, &ctx).await?;
    Ok(0)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: fetch / IO error (including log dir creation)
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Fetch(_) => 20,
        CliError::Io(_) => 20,
        CliError::Command(_) => 20,
        CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(args: cli::Args, ctx: &core_api::AppContext) -> Result<(), CliError> {
    let format = args.format;
    match args.command {
        cli::Commands::Dashboard(dashboard_args) => {
            dashboard::handle_dashboard(dashboard_args, format, ctx).await
        }
        cli::Commands::Report(report_args) => report::handle_report(report_args, format, ctx).await,
        cli::Commands::Tasks(tasks_args) => tasks::handle_tasks(tasks_args, format, ctx).await,
    }
}

/// Resolves and creates the log directory. Failing to create it is an I/O error.
fn prepare_log_dir(logging: &LoggingConfig) -> Result<PathBuf, CliError> {
    let dir = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("taskboard"));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        return Err(CliError::Config(
            "logging enabled but both console and file sinks are off".to_string(),
        ));
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&logging.level)
            .map_err(|e| CliError::Config(format!("invalid log level {:?}: {e}", logging.level)))?,
    };

    let file_layer = if logging.file {
        let dir = prepare_log_dir(logging)?;
        let appender =
            tracing_appender::rolling::never(dir, format!("taskboard.{}.log", std::process::id()));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        Some(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
    } else {
        None
    };

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_logging(directory: Option<String>) -> LoggingConfig {
        LoggingConfig {
            file: true,
            directory,
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_prepare_log_dir_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("logs").join("taskboard");
        let dir = prepare_log_dir(&file_logging(Some(target.display().to_string()))).unwrap();
        assert_eq!(dir, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_unwritable_log_dir_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let cfg = file_logging(Some(blocker.join("logs").display().to_string()));

        let err = init_tracing(&cfg).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(exit_code_for_error(&err), 20);
    }

    #[test]
    fn test_both_sinks_off_is_config_error() {
        let cfg = LoggingConfig {
            console: false,
            file: false,
            ..LoggingConfig::default()
        };
        let err = init_tracing(&cfg).unwrap_err();
        assert_eq!(exit_code_for_error(&err), 11);
    }
}
