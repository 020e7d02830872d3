use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Task counters and reports from the task API")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ~/.taskboard/config.toml, then ./config.toml).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override `api.base_url` from config and environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DashboardArgs {
    /// Exit with an error when later pages failed and counts are partial.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// Exit with an error when later pages failed and the report is partial.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Omit the per-task table.
    #[arg(long, default_value_t = false)]
    pub summary_only: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TasksArgs {
    /// Case-insensitive match on name or description.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact status, e.g. "to do" or "complete".
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total, pending and completed counters.
    Dashboard(DashboardArgs),
    /// Visual report: counters, histograms and task table.
    Report(ReportArgs),
    /// List tasks with optional client-side filters.
    Tasks(TasksArgs),
}
