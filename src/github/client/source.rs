//! `RepoSource` backed by the GitHub REST API

use async_trait::async_trait;
use log::debug;
use octocrab::models::{IssueState, Repository, issues::Issue, pulls::PullRequest, repos::RepoCommit};

use super::GitHubClient;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::repo_metrics::{
    CommitRecord, ContentEntry, EntryKind, IssueRecord, ItemState, MANIFEST_FILE, PullRecord,
    RepoInfo, RepoRef, RepoSource,
};
use crate::github::{ListCommitsOptions, ListIssuesRequest, ListPullRequestsRequest};

fn item_state(state: &IssueState) -> ItemState {
    match state {
        IssueState::Closed => ItemState::Closed,
        _ => ItemState::Open,
    }
}

pub(crate) fn repo_info(repo: Repository) -> RepoInfo {
    RepoInfo {
        full_name: repo.full_name.unwrap_or_default(),
        name: repo.name,
        description: repo.description,
        language: repo
            .language
            .as_ref()
            .and_then(|v| v.as_str())
            .map(str::to_string),
        topics: repo.topics.unwrap_or_default(),
        created_at: repo.created_at,
        updated_at: repo.updated_at,
        size_kb: repo.size.unwrap_or(0),
        stars: repo.stargazers_count.unwrap_or(0),
        forks: repo.forks_count.unwrap_or(0),
        open_issues: repo.open_issues_count.unwrap_or(0),
        is_fork: repo.fork.unwrap_or(false),
    }
}

/// Owner and name for a listed repository, `None` if neither
/// `full_name` nor `owner` identifies it.
pub(crate) fn repo_ref(repo: &Repository) -> Option<RepoRef> {
    if let Some(parsed) = repo.full_name.as_deref().and_then(|f| f.parse().ok()) {
        return Some(parsed);
    }
    repo.owner
        .as_ref()
        .map(|owner| RepoRef::new(owner.login.clone(), repo.name.clone()))
}

fn commit_record(commit: RepoCommit) -> CommitRecord {
    CommitRecord {
        authored_at: commit
            .commit
            .author
            .and_then(|author| author.date)
            .map(|date| date.fixed_offset()),
        sha: commit.sha,
    }
}

fn issue_record(issue: &Issue) -> IssueRecord {
    IssueRecord {
        state: item_state(&issue.state),
        is_pull_request: issue.pull_request.is_some(),
    }
}

fn pull_record(pull: &PullRequest) -> PullRecord {
    PullRecord {
        state: pull.state.as_ref().map_or(ItemState::Open, item_state),
        merged_at: pull.merged_at,
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn repository(&self, repo: &RepoRef) -> GitHubResult<RepoInfo> {
        let repository = self.get_repository(&repo.owner, &repo.name).await??;
        Ok(repo_info(repository))
    }

    async fn readme(&self, repo: &RepoRef) -> GitHubResult<Option<String>> {
        self.get_readme(&repo.owner, &repo.name).await?
    }

    async fn commits_page(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u8,
    ) -> GitHubResult<Vec<CommitRecord>> {
        let options = ListCommitsOptions {
            page: Some(page),
            per_page: Some(per_page),
        };
        let commits = self.list_commits(&repo.owner, &repo.name, options).await??;
        debug!("{repo}: commit page {page} returned {}", commits.len());
        Ok(commits.into_iter().map(commit_record).collect())
    }

    async fn contributors(&self, repo: &RepoRef) -> GitHubResult<Vec<String>> {
        let contributors = self.list_contributors(&repo.owner, &repo.name).await??;
        Ok(contributors.into_iter().map(|c| c.author.login).collect())
    }

    async fn issues(&self, repo: &RepoRef) -> GitHubResult<Vec<IssueRecord>> {
        let issues = self
            .list_issues(ListIssuesRequest::all(&repo.owner, &repo.name))
            .await??;
        Ok(issues.iter().map(issue_record).collect())
    }

    async fn pull_requests(&self, repo: &RepoRef) -> GitHubResult<Vec<PullRecord>> {
        let pulls = self
            .list_pull_requests(ListPullRequestsRequest::all(&repo.owner, &repo.name))
            .await??;
        Ok(pulls.iter().map(pull_record).collect())
    }

    async fn root_listing(&self, repo: &RepoRef) -> GitHubResult<Vec<ContentEntry>> {
        let items = self.list_root_contents(&repo.owner, &repo.name).await??;
        Ok(items
            .into_iter()
            .map(|item| ContentEntry {
                kind: EntryKind::from_api(&item.r#type),
                name: item.name,
            })
            .collect())
    }

    async fn manifest_exists(&self, repo: &RepoRef) -> GitHubResult<bool> {
        let items = self
            .get_file_contents(&repo.owner, &repo.name, MANIFEST_FILE, None)
            .await??;
        Ok(items.is_some_and(|items| !items.is_empty()))
    }

    async fn manifest(&self, repo: &RepoRef) -> GitHubResult<Option<String>> {
        let Some(items) = self
            .get_file_contents(&repo.owner, &repo.name, MANIFEST_FILE, None)
            .await??
        else {
            return Ok(None);
        };
        let Some(file) = items.first() else {
            return Ok(None);
        };
        file.decoded_content()
            .map(Some)
            .ok_or_else(|| GitHubError::Decode(format!("{repo}/{MANIFEST_FILE}: undecodable content")))
    }

    async fn current_login(&self) -> GitHubResult<String> {
        Ok(self.get_me().await??.login)
    }

    async fn owned_repositories(&self) -> GitHubResult<Vec<RepoRef>> {
        let repositories = self.list_user_repositories().await??;
        Ok(repositories.iter().filter_map(repo_ref).collect())
    }
}
