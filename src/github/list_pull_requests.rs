//! GitHub Pull Requests listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::models::pulls::PullRequest;
use octocrab::{Octocrab, Page, params};
use std::sync::Arc;

/// Request parameters for listing pull requests
#[derive(Debug, Clone)]
pub struct ListPullRequestsRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Results per page (max 100)
    pub per_page: Option<u8>,
}

impl ListPullRequestsRequest {
    /// Every pull request in the repository regardless of state.
    pub fn all(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            per_page: Some(100),
        }
    }
}

/// List pull requests, following pagination to the end.
pub(crate) fn list_pull_requests(
    inner: Arc<Octocrab>,
    request: ListPullRequestsRequest,
) -> AsyncTask<Result<Vec<PullRequest>, GitHubError>> {
    spawn_task(async move {
        let mut pull_requests = Vec::new();
        let pulls_handler = inner.pulls(&request.owner, &request.repo);

        let mut req = pulls_handler.list().state(params::State::All);
        if let Some(per_page) = request.per_page {
            req = req.per_page(per_page);
        }

        let mut page_res: Page<PullRequest> = req.send().await.map_err(GitHubError::from)?;
        pull_requests.extend(page_res.items);

        while let Some(next_page) = inner.get_page::<PullRequest>(&page_res.next).await? {
            page_res = next_page;
            pull_requests.extend(page_res.items);
        }
        Ok(pull_requests)
    })
}
