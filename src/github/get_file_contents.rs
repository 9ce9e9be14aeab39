//! GitHub File contents retrieval operation.

use crate::github::{
    error::GitHubError,
    util::{is_not_found, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::Content};
use std::sync::Arc;

/// Retrieve file or directory contents.
///
/// A missing path yields `Ok(None)` rather than an error.
pub(crate) fn get_file_contents(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    reference: Option<String>,
) -> AsyncTask<Result<Option<Vec<Content>>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let handler = inner.repos(&owner, &repo);
        let mut req = handler.get_content().path(&path);

        if let Some(r) = reference {
            req = req.r#ref(r);
        }

        match req.send().await {
            Ok(content_items) => Ok(Some(content_items.items)),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
