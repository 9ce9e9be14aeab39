//! Language usage per creation year

use chrono::Datelike;

use crate::github::repo_metrics::types::{RepoMetrics, YearlyLanguages};

/// Counts repositories per language, grouped by the year each was created.
///
/// Repositories without a language or a creation date are skipped.
pub fn aggregate_languages_by_year(repos: &[RepoMetrics]) -> YearlyLanguages {
    let mut by_year = YearlyLanguages::new();

    for repo in repos {
        let (Some(language), Some(created_at)) = (&repo.language, repo.created_at) else {
            continue;
        };
        *by_year
            .entry(created_at.year())
            .or_default()
            .entry(language.clone())
            .or_insert(0) += 1;
    }

    by_year
}
