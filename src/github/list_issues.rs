//! GitHub Issues listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::models::issues::Issue;
use octocrab::{Octocrab, Page, params};
use std::sync::Arc;

/// Request parameters for listing issues
#[derive(Debug, Clone)]
pub struct ListIssuesRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Results per page (max 100)
    pub per_page: Option<u8>,
}

impl ListIssuesRequest {
    /// Every issue in the repository regardless of state.
    pub fn all(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            per_page: Some(100),
        }
    }
}

/// List issues, following pagination to the end.
///
/// GitHub's issues endpoint also returns pull requests; those carry a
/// `pull_request` link and are left for the caller to filter.
pub(crate) fn list_issues(
    inner: Arc<Octocrab>,
    request: ListIssuesRequest,
) -> AsyncTask<Result<Vec<Issue>, GitHubError>> {
    spawn_task(async move {
        let mut issues = Vec::new();
        let issues_handler = inner.issues(&request.owner, &request.repo);

        let mut req = issues_handler.list().state(params::State::All);
        if let Some(per_page) = request.per_page {
            req = req.per_page(per_page);
        }

        let mut page_res: Page<Issue> = req.send().await.map_err(GitHubError::from)?;
        issues.extend(page_res.items);

        while let Some(next_page) = inner.get_page::<Issue>(&page_res.next).await? {
            page_res = next_page;
            issues.extend(page_res.items);
        }
        Ok(issues)
    })
}
