//! GitHub repository commits listing operation.

use crate::github::{
    error::GitHubError,
    util::{is_empty_repository, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::RepoCommit};
use std::sync::Arc;

/// Options for listing commits in a repository.
#[derive(Debug, Clone, Default)]
pub struct ListCommitsOptions {
    /// Page number of results to return (starts at 1).
    pub page: Option<u32>,
    /// Number of results per page (max 100).
    pub per_page: Option<u8>,
}

/// List a single page of commits in a repository.
///
/// GitHub answers 409 for a repository without any commits; that is an
/// empty page, not an error.
pub(crate) fn list_commits(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    options: ListCommitsOptions,
) -> AsyncTask<Result<Vec<RepoCommit>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let repos_handler = inner.repos(&owner, &repo);
        let mut request = repos_handler.list_commits();

        if let Some(p) = options.page {
            request = request.page(p);
        }

        if let Some(pp) = options.per_page {
            if pp == 0 || pp > 100 {
                return Err(GitHubError::InvalidInput(format!(
                    "per_page must be between 1 and 100, got {pp}"
                )));
            }
            request = request.per_page(pp);
        }

        match request.send().await {
            Ok(page) => Ok(page.items),
            Err(e) if is_empty_repository(&e) => Ok(Vec::new()),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
