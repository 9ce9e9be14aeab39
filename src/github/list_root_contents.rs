//! GitHub repository root listing operation.

use crate::github::{
    error::GitHubError,
    util::{is_not_found, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::Content};
use std::sync::Arc;

/// List the entries of the repository root directory.
///
/// An empty repository answers 404 here and yields an empty listing.
pub(crate) fn list_root_contents(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<Content>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).get_content().send().await {
            Ok(content_items) => Ok(content_items.items),
            Err(e) if is_not_found(&e) => Ok(Vec::new()),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
