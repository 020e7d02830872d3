//! `taskboard report`: counters, histograms and the task table.
use crate::commands::cli::{OutputFormat, ReportArgs};
use taskboard_core::api as core_api;

pub async fn handle_report(
    args: ReportArgs,
    format: OutputFormat,
    ctx: &core_api::AppContext,
) -> Result<(), core_api::CliError> {
    let mut session = super::open_session(ctx)?;
    let view = session.switch_tab(core_api::Tab::Reports).await?;

    let core_api::TabView::Report(mut report) = view else {
        return Err(core_api::CliError::Command(
            "reports tab produced no report".to_string(),
        ));
    };

    if args.summary_only {
        report.tasks_details.clear();
    }

    match format {
        OutputFormat::Json => println!("{}", super::to_json(&report)?),
        OutputFormat::Text => print!("{}", core_api::format_text(&report)),
    }

    match report.incomplete {
        Some(reason) if args.strict => Err(super::incomplete_error(&reason)),
        _ => Ok(()),
    }
}
