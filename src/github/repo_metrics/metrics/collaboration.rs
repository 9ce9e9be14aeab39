//! Contributor, issue and pull request counts

use log::warn;

use crate::github::repo_metrics::source::RepoSource;
use crate::github::repo_metrics::types::{
    CollaborationMetrics, IssueRecord, ItemState, PullRecord, RepoRef,
};

/// Folds the three listings into counts.
///
/// Entries of the issues listing that are pull requests are not counted as
/// issues. A pull request is merged when it has a merge timestamp; its state
/// alone cannot tell merged from closed-unmerged.
pub fn compute_collaboration_metrics(
    contributors: usize,
    issues: &[IssueRecord],
    pulls: &[PullRecord],
    is_fork: bool,
) -> CollaborationMetrics {
    let issues: Vec<_> = issues.iter().filter(|i| !i.is_pull_request).collect();
    let closed_issues = issues
        .iter()
        .filter(|i| i.state == ItemState::Closed)
        .count() as u32;

    CollaborationMetrics {
        contributors_count: contributors as u32,
        total_issues: issues.len() as u32,
        open_issues: issues.len() as u32 - closed_issues,
        closed_issues,
        total_pull_requests: pulls.len() as u32,
        merged_pull_requests: pulls.iter().filter(|p| p.merged_at.is_some()).count() as u32,
        is_fork,
    }
}

/// Fetches the three listings concurrently; a failed listing counts as empty
/// and is reported in the returned notes.
pub(crate) async fn collect_collaboration_metrics<S>(
    source: &S,
    repo: &RepoRef,
    is_fork: bool,
) -> (CollaborationMetrics, Vec<String>)
where
    S: RepoSource + ?Sized,
{
    let mut errors = Vec::new();
    let (contributors, issues, pulls) = tokio::join!(
        source.contributors(repo),
        source.issues(repo),
        source.pull_requests(repo),
    );

    let contributors = contributors.map(|c| c.len()).unwrap_or_else(|e| {
        warn!("Failed to fetch contributors for {repo}: {e}");
        errors.push(format!("contributors: {e}"));
        0
    });
    let issues = issues.unwrap_or_else(|e| {
        warn!("Failed to fetch issues for {repo}: {e}");
        errors.push(format!("issues: {e}"));
        Vec::new()
    });
    let pulls = pulls.unwrap_or_else(|e| {
        warn!("Failed to fetch pull requests for {repo}: {e}");
        errors.push(format!("pull requests: {e}"));
        Vec::new()
    });

    (
        compute_collaboration_metrics(contributors, &issues, &pulls, is_fork),
        errors,
    )
}
