//! Users API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get the authenticated user
    #[must_use]
    pub fn get_me(&self) -> AsyncTask<Result<octocrab::models::Author, GitHubError>> {
        crate::github::get_me::get_me(self.inner.clone())
    }

    /// List repositories owned by the authenticated user
    #[must_use]
    pub fn list_user_repositories(
        &self,
    ) -> AsyncTask<Result<Vec<octocrab::models::Repository>, GitHubError>> {
        crate::github::list_user_repositories::list_user_repositories(self.inner.clone())
    }
}
