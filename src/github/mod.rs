//! GitHub API operations module
//!
//! Provides the GitHub API operations the repository metrics need, using the
//! octocrab library.

pub mod client;
pub mod error;
pub mod repo_metrics;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export options types
pub use list_commits::ListCommitsOptions;
pub use list_issues::ListIssuesRequest;
pub use list_pull_requests::ListPullRequestsRequest;

// GitHub API operations - Issues (internal)
pub(crate) mod list_issues;

// GitHub API operations - Pull Requests (internal)
pub(crate) mod list_pull_requests;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_file_contents;
pub(crate) mod get_readme;
pub(crate) mod get_repository;
pub(crate) mod list_commits;
pub(crate) mod list_contributors;
pub(crate) mod list_root_contents;

// GitHub API operations - Users (internal)
pub(crate) mod get_me;
pub(crate) mod list_user_repositories;

// Re-export repository metrics
pub use repo_metrics::{
    CodeQualityMetrics, CollaborationMetrics, CommitMetrics, CommitRecord, ContentEntry,
    CriticalSections, EntryKind, FormattingFeatures, InMemoryManifestCache, IssueRecord,
    ItemState, ManifestCache, MetricsConfig, MetricsEngine, MetricsSession, ProfileReport,
    PullRecord, QualitySignals, ReadmeMetrics, ReadmeSection, RepoInfo, RepoMetrics, RepoRef,
    RepoSource, TechStack, YearlyLanguages, aggregate_languages_by_year, analyze_profile,
    analyze_profile_with_config, analyze_readme_content, analyze_repositories,
    analyze_repository, compute_commit_metrics, longest_streak, score_readme,
};
