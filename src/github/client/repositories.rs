//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use octocrab::models::{Contributor, Repository, repos::Content, repos::RepoCommit};

impl GitHubClient {
    /// Get repository metadata
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Repository, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// Get the decoded README, `None` when the repository has none
    pub fn get_readme(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Option<String>, GitHubError>> {
        crate::github::get_readme::get_readme(self.inner.clone(), owner, repo)
    }

    /// Get file contents, `None` when the path does not exist
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        ref_name: Option<String>,
    ) -> AsyncTask<Result<Option<Vec<Content>>, GitHubError>> {
        crate::github::get_file_contents::get_file_contents(
            self.inner.clone(),
            owner,
            repo,
            path,
            ref_name,
        )
    }

    /// List the repository root directory
    pub fn list_root_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<Content>, GitHubError>> {
        crate::github::list_root_contents::list_root_contents(self.inner.clone(), owner, repo)
    }

    /// List one page of commits
    pub fn list_commits(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        options: crate::github::ListCommitsOptions,
    ) -> AsyncTask<Result<Vec<RepoCommit>, GitHubError>> {
        crate::github::list_commits::list_commits(self.inner.clone(), owner, repo, options)
    }

    /// List every contributor
    pub fn list_contributors(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<Contributor>, GitHubError>> {
        crate::github::list_contributors::list_contributors(self.inner.clone(), owner, repo)
    }
}
