use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Failure of a whole `fetch_all` call.
///
/// Only the first page can fail the call; later failures truncate the result
/// and are reported through `FetchOutcome::truncated` instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("first page request failed: {0}")]
    FirstPage(#[from] anyhow::Error),
}
