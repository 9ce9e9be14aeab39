//! Data source seam between the analyzers and the GitHub REST API

use async_trait::async_trait;

use crate::github::error::GitHubResult;
use crate::github::repo_metrics::types::{
    CommitRecord, ContentEntry, IssueRecord, PullRecord, RepoInfo, RepoRef,
};

/// Name of the dependency manifest inspected for code quality and tech stack.
pub const MANIFEST_FILE: &str = "package.json";

/// Read access to the repository data the analyzers consume.
///
/// Not-found conditions for the README and the manifest are reported as
/// `Ok(None)` / `Ok(false)`; every other failure is an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync + 'static {
    /// Repository metadata lookup.
    async fn repository(&self, repo: &RepoRef) -> GitHubResult<RepoInfo>;

    /// Decoded README text, `None` when the repository has no README.
    async fn readme(&self, repo: &RepoRef) -> GitHubResult<Option<String>>;

    /// One page of the commit listing (pages start at 1).
    async fn commits_page(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u8,
    ) -> GitHubResult<Vec<CommitRecord>>;

    /// Contributor logins.
    async fn contributors(&self, repo: &RepoRef) -> GitHubResult<Vec<String>>;

    /// Issues listing with `state=all`.
    async fn issues(&self, repo: &RepoRef) -> GitHubResult<Vec<IssueRecord>>;

    /// Pull request listing with `state=all`.
    async fn pull_requests(&self, repo: &RepoRef) -> GitHubResult<Vec<PullRecord>>;

    /// Entries of the repository root directory.
    async fn root_listing(&self, repo: &RepoRef) -> GitHubResult<Vec<ContentEntry>>;

    /// Whether [`MANIFEST_FILE`] exists at the repository root.
    async fn manifest_exists(&self, repo: &RepoRef) -> GitHubResult<bool>;

    /// Decoded [`MANIFEST_FILE`] text, `None` when absent.
    async fn manifest(&self, repo: &RepoRef) -> GitHubResult<Option<String>>;

    /// Login of the authenticated user.
    async fn current_login(&self) -> GitHubResult<String>;

    /// Repositories owned by the authenticated user.
    async fn owned_repositories(&self) -> GitHubResult<Vec<RepoRef>>;
}
