//! Language aggregation across repositories.

use chrono::{DateTime, Utc};
use gitproof_metrics::{RepoMetrics, RepoRef, aggregate_languages_by_year};

fn repo(name: &str, language: Option<&str>, created_at: &str) -> RepoMetrics {
    let mut metrics = RepoMetrics::minimal(&RepoRef::new("octo", name), "unused");
    metrics.errors.clear();
    metrics.language = language.map(str::to_string);
    metrics.created_at = created_at.parse::<DateTime<Utc>>().ok();
    metrics
}

#[test]
fn test_same_year_same_language_counts_twice() {
    let repos = vec![
        repo("a", Some("TypeScript"), "2023-02-01T00:00:00Z"),
        repo("b", Some("TypeScript"), "2023-09-15T00:00:00Z"),
        repo("c", None, "2023-10-01T00:00:00Z"),
    ];

    let by_year = aggregate_languages_by_year(&repos);
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[&2023].len(), 1);
    assert_eq!(by_year[&2023]["TypeScript"], 2);
}

#[test]
fn test_years_are_kept_apart() {
    let repos = vec![
        repo("a", Some("Rust"), "2021-06-01T00:00:00Z"),
        repo("b", Some("Go"), "2022-06-01T00:00:00Z"),
        repo("c", Some("Rust"), "2022-07-01T00:00:00Z"),
    ];

    let by_year = aggregate_languages_by_year(&repos);
    assert_eq!(by_year[&2021]["Rust"], 1);
    assert_eq!(by_year[&2022]["Go"], 1);
    assert_eq!(by_year[&2022]["Rust"], 1);
}

#[test]
fn test_missing_creation_date_is_skipped() {
    let mut undated = repo("a", Some("Python"), "");
    undated.created_at = None;
    assert!(aggregate_languages_by_year(&[undated]).is_empty());
}
