//! Pull Requests API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List pull requests
    #[must_use]
    pub fn list_pull_requests(
        &self,
        request: crate::github::ListPullRequestsRequest,
    ) -> AsyncTask<Result<Vec<octocrab::models::pulls::PullRequest>, GitHubError>> {
        crate::github::list_pull_requests::list_pull_requests(self.inner.clone(), request)
    }
}
