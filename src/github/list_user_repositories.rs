//! Authenticated user's repositories listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// List repositories owned by the authenticated user, all pages.
pub(crate) fn list_user_repositories(
    inner: Arc<Octocrab>,
) -> AsyncTask<Result<Vec<Repository>, GitHubError>> {
    spawn_task(async move {
        let first = inner
            .current()
            .list_repos_for_authenticated_user()
            .type_("owner")
            .per_page(100)
            .send()
            .await
            .map_err(GitHubError::from)?;
        let repositories = inner.all_pages(first).await.map_err(GitHubError::from)?;
        Ok(repositories)
    })
}
