pub mod cli;
pub mod dashboard;
pub mod report;
pub mod tasks;

use serde::Serialize;
use taskboard_core::api as core_api;

/// Session over the configured task source.
pub(crate) fn open_session(
    ctx: &core_api::AppContext,
) -> Result<core_api::DashboardSession, core_api::CliError> {
    let source = ctx.build_source()?;
    Ok(core_api::DashboardSession::new(source, ctx.fetch_options()))
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, core_api::CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| core_api::CliError::Command(format!("failed to encode output: {e}")))
}

/// Error for `--strict` runs over a partial task set.
pub(crate) fn incomplete_error(reason: &str) -> core_api::CliError {
    core_api::CliError::Command(format!("task data is incomplete: {reason}"))
}
