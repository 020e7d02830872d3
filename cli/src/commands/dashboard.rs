//! `taskboard dashboard`: the three dashboard counters.
use crate::commands::cli::{DashboardArgs, OutputFormat};
use serde_json::json;
use taskboard_core::api as core_api;

pub async fn handle_dashboard(
    args: DashboardArgs,
    format: OutputFormat,
    ctx: &core_api::AppContext,
) -> Result<(), core_api::CliError> {
    let mut session = super::open_session(ctx)?;
    let view = session.switch_tab(core_api::Tab::Dashboard).await?;

    let core_api::TabView::Counters {
        summary,
        incomplete,
    } = view
    else {
        return Err(core_api::CliError::Command(
            "dashboard tab produced no counters".to_string(),
        ));
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            super::to_json(&counters_json(&summary, incomplete.as_deref()))?
        ),
        OutputFormat::Text => print!(
            "{}",
            core_api::format_counters(&summary, incomplete.as_deref())
        ),
    }

    match incomplete {
        Some(reason) if args.strict => Err(super::incomplete_error(&reason)),
        _ => Ok(()),
    }
}

fn counters_json(summary: &core_api::AggregateSummary, incomplete: Option<&str>) -> serde_json::Value {
    json!({
        "total": summary.total,
        "pending": summary.pending,
        "completed": summary.completed,
        "complete": incomplete.is_none(),
        "incomplete_reason": incomplete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_json_shape() {
        let summary = core_api::AggregateSummary {
            total: 3,
            completed: 1,
            pending: 2,
            ..Default::default()
        };
        let v = counters_json(&summary, Some("page 1 failed: timeout"));
        assert_eq!(v["total"], 3);
        assert_eq!(v["pending"], 2);
        assert_eq!(v["complete"], false);
        assert_eq!(v["incomplete_reason"], "page 1 failed: timeout");

        let v = counters_json(&summary, None);
        assert_eq!(v["complete"], true);
        assert!(v["incomplete_reason"].is_null());
    }
}
