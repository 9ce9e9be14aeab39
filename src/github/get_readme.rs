//! GitHub README retrieval operation.

use crate::github::{
    error::GitHubError,
    util::{is_not_found, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch and decode the repository README.
///
/// Returns `Ok(None)` when GitHub answers 404 or the payload has no content.
pub(crate) fn get_readme(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Option<String>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).get_readme().send().await {
            Ok(content) => Ok(content.decoded_content()),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
