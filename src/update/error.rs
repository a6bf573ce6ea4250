use thiserror::Error;

use super::{fetcher::FetchState, version::VersionParseError};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("malformed remote version: {0}")]
    Parse(#[from] VersionParseError),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not extract update archive: {0}")]
    Extract(#[from] zip::result::ZipError),
    #[error("update task did not finish: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("update fetcher already finished ({0})")]
    AlreadyFinished(FetchState),
    #[error("update fetcher cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: FetchState,
    },
}
