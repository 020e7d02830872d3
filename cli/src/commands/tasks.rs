//! `taskboard tasks`: the task list with search and status filters.
use crate::commands::cli::{OutputFormat, TasksArgs};
use taskboard_core::api as core_api;
use taskboard_core::report::{priority_label, truncate_text};

pub async fn handle_tasks(
    args: TasksArgs,
    format: OutputFormat,
    ctx: &core_api::AppContext,
) -> Result<(), core_api::CliError> {
    let mut session = super::open_session(ctx)?;
    let view = session.switch_tab(core_api::Tab::Tasks).await?;

    let core_api::TabView::Tasks { tasks, incomplete } = view else {
        return Err(core_api::CliError::Command(
            "tasks tab produced no tasks".to_string(),
        ));
    };

    let selected = apply_filters(&tasks, args.search.as_deref(), args.status.as_deref());
    tracing::debug!(
        target: "taskboard.session",
        stage = "tasks.filter",
        fetched = tasks.len(),
        shown = selected.len()
    );

    match format {
        OutputFormat::Json => println!("{}", super::to_json(&selected)?),
        OutputFormat::Text => {
            if selected.is_empty() {
                println!("No tasks found");
            }
            for task in &selected {
                println!("{}", format_task_line(task));
            }
        }
    }

    if let Some(reason) = incomplete {
        eprintln!("warning: data may be incomplete ({reason})");
    }
    Ok(())
}

fn apply_filters<'a>(
    tasks: &'a [core_api::Task],
    search: Option<&str>,
    status: Option<&str>,
) -> Vec<&'a core_api::Task> {
    let by_search = core_api::filter_by_search(tasks, search.unwrap_or_default());
    core_api::filter_by_status(by_search, status.unwrap_or_default())
}

fn format_task_line(task: &core_api::Task) -> String {
    format!(
        "- [{}] {} | {} | {} | {} | {}",
        task.status_str().unwrap_or("sin estado"),
        truncate_text(Some(&task.name), 40),
        priority_label(task.priority_level()),
        task.assignee_label(),
        task.due().display(),
        task.identifier().unwrap_or_else(|| "N/A".to_string())
    )
}
