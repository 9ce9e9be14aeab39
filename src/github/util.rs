//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// HTTP status of an error response from the GitHub API.
pub(crate) fn status_code(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// True when octocrab reports an HTTP 404 from the GitHub API.
pub(crate) fn is_not_found(error: &octocrab::Error) -> bool {
    status_code(error) == Some(404)
}

/// True for the 409 GitHub returns when listing commits of an empty repository.
pub(crate) fn is_empty_repository(error: &octocrab::Error) -> bool {
    status_code(error) == Some(409)
}
