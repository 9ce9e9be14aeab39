//! Issues API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List issues (pull requests included, as GitHub returns them)
    #[must_use]
    pub fn list_issues(
        &self,
        request: crate::github::ListIssuesRequest,
    ) -> AsyncTask<Result<Vec<octocrab::models::issues::Issue>, GitHubError>> {
        crate::github::list_issues::list_issues(self.inner.clone(), request)
    }
}
