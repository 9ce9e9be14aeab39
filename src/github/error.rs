//! GitHub API error types

use std::time::Duration;
use thiserror::Error;

/// Error types for GitHub API operations and the analyzers built on them
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {}", describe_octocrab(.0))]
    Octocrab(#[from] octocrab::Error),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Content could not be decoded or parsed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// Spawned task ended without reporting a result
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// Operation exceeded its deadline
    #[error("Operation timed out: {operation} after {duration:?}")]
    Timeout {
        operation: String,
        duration: Duration,
    },
}

/// One-line description of an octocrab error.
///
/// API errors carry the HTTP status and GitHub's message. Body decoding
/// errors are reported without the backtrace octocrab appends to them.
fn describe_octocrab(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("HTTP {}: {}", source.status_code.as_u16(), source.message)
        }
        octocrab::Error::Serde { source, .. } => format!("invalid response body: {source}"),
        octocrab::Error::Json { source, .. } => format!("invalid response body: {source}"),
        other => other
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl From<String> for GitHubError {
    fn from(s: String) -> Self {
        GitHubError::Api(s)
    }
}

impl From<&str> for GitHubError {
    fn from(s: &str) -> Self {
        GitHubError::Api(s.to_string())
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for GitHubError {
    fn from(e: tokio::sync::oneshot::error::RecvError) -> Self {
        GitHubError::TaskFailed(e.to_string())
    }
}
