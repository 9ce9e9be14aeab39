//! GitHub repository metadata retrieval operation.

use crate::github::{
    error::GitHubError,
    util::{is_not_found, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Get repository metadata (`GET /repos/{owner}/{repo}`).
///
/// A missing or inaccessible repository is [`GitHubError::NotFound`].
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).get().await {
            Ok(repository) => Ok(repository),
            Err(e) if is_not_found(&e) => Err(GitHubError::NotFound(format!("{owner}/{repo}"))),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
