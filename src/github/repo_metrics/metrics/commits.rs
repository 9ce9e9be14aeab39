//! Commit history metrics: totals, monthly histogram and longest daily streak

use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

use crate::github::error::GitHubError;
use crate::github::repo_metrics::source::RepoSource;
use crate::github::repo_metrics::types::{CommitMetrics, CommitRecord, RepoRef};

/// Commits gathered by a paginated walk, plus the error that cut it short.
pub struct CommitCollection {
    pub commits: Vec<CommitRecord>,
    pub error: Option<GitHubError>,
}

/// Walks the commit listing until an empty or short page.
///
/// An error keeps every commit gathered before it.
pub(crate) async fn collect_commits<S>(source: &S, repo: &RepoRef, per_page: u8) -> CommitCollection
where
    S: RepoSource + ?Sized,
{
    let per_page = per_page.max(1);
    let mut commits = Vec::new();
    let mut page = 1u32;

    loop {
        match source.commits_page(repo, page, per_page).await {
            Ok(batch) => {
                let fetched = batch.len();
                commits.extend(batch);
                if fetched < usize::from(per_page) {
                    break;
                }
                page += 1;
            }
            Err(e) => {
                warn!(
                    "Commit listing for {repo} stopped at page {page} with {} commits: {e}",
                    commits.len()
                );
                return CommitCollection {
                    commits,
                    error: Some(e),
                };
            }
        }
    }

    debug!("Fetched {} commits for {repo} in {page} page(s)", commits.len());
    CommitCollection {
        commits,
        error: None,
    }
}

/// Longest run of consecutive calendar days, counting each day once.
pub fn longest_streak<I>(dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = dates.into_iter().collect();
    if days.is_empty() {
        return 0;
    }

    let mut longest = 1u32;
    let mut current = 1u32;
    let days: Vec<_> = days.into_iter().collect();
    for pair in days.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap == 1 {
            current += 1;
            longest = longest.max(current);
        } else if gap > 1 {
            current = 1;
        }
    }
    longest
}

/// Computes totals, the `YYYY-MM` histogram and the streak from a commit list.
///
/// Commits without an author date count toward the total only. Dates are
/// bucketed in the offset each timestamp carries.
pub fn compute_commit_metrics(commits: &[CommitRecord]) -> CommitMetrics {
    let mut dated: Vec<_> = commits.iter().filter_map(|c| c.authored_at).collect();
    dated.sort();

    let mut commit_frequency: BTreeMap<String, u32> = BTreeMap::new();
    for date in &dated {
        *commit_frequency
            .entry(date.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }

    CommitMetrics {
        total_commits: commits.len() as u32,
        first_commit_date: dated.first().copied(),
        last_commit_date: dated.last().copied(),
        longest_streak_days: longest_streak(dated.iter().map(|d| d.date_naive())),
        commit_frequency,
    }
}
