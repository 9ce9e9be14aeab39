//! Commit statistics through the public API.

use chrono::{DateTime, NaiveDate};
use gitproof_metrics::{CommitRecord, compute_commit_metrics, longest_streak};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn commit(sha: &str, authored_at: &str) -> CommitRecord {
    CommitRecord {
        sha: sha.to_string(),
        authored_at: DateTime::parse_from_rfc3339(authored_at).ok(),
    }
}

#[test]
fn test_streak_edge_cases() {
    assert_eq!(longest_streak(Vec::<NaiveDate>::new()), 0);
    assert_eq!(longest_streak([day("2024-03-01")]), 1);
    assert_eq!(
        longest_streak([day("2024-03-01"), day("2024-03-02"), day("2024-03-03")]),
        3
    );
    assert_eq!(longest_streak([day("2024-03-01"), day("2024-03-06")]), 1);
}

#[test]
fn test_streak_ignores_duplicates_and_order() {
    let days = [
        day("2024-03-03"),
        day("2024-03-01"),
        day("2024-03-02"),
        day("2024-03-02"),
        day("2024-03-10"),
    ];
    assert_eq!(longest_streak(days), 3);
}

#[test]
fn test_streak_crosses_month_boundary() {
    assert_eq!(
        longest_streak([day("2024-02-28"), day("2024-02-29"), day("2024-03-01")]),
        3
    );
}

#[test]
fn test_commit_metrics_summary() {
    let commits = vec![
        commit("c", "2024-02-01T08:00:00Z"),
        commit("b", "2024-01-31T23:00:00Z"),
        commit("a", "2024-01-30T12:00:00Z"),
        commit("a2", "2024-01-30T18:00:00Z"),
    ];

    let metrics = compute_commit_metrics(&commits);
    assert_eq!(metrics.total_commits, 4);
    assert_eq!(metrics.longest_streak_days, 3);
    assert_eq!(metrics.commit_frequency["2024-01"], 3);
    assert_eq!(metrics.commit_frequency["2024-02"], 1);
    assert_eq!(
        metrics.first_commit_date,
        DateTime::parse_from_rfc3339("2024-01-30T12:00:00Z").ok()
    );
    assert_eq!(
        metrics.last_commit_date,
        DateTime::parse_from_rfc3339("2024-02-01T08:00:00Z").ok()
    );
}

#[test]
fn test_dates_use_their_own_offset() {
    // 23:30 at -05:00 is the next day in UTC but stays on the 1st locally
    let commits = vec![
        commit("a", "2024-05-01T23:30:00-05:00"),
        commit("b", "2024-05-03T10:00:00-05:00"),
    ];
    assert_eq!(compute_commit_metrics(&commits).longest_streak_days, 1);
}

#[test]
fn test_no_commits() {
    let metrics = compute_commit_metrics(&[]);
    assert_eq!(metrics.total_commits, 0);
    assert_eq!(metrics.longest_streak_days, 0);
    assert!(metrics.first_commit_date.is_none());
    assert!(metrics.commit_frequency.is_empty());
}
