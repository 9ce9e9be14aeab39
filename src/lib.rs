//! `gitproof_metrics` - repository metrics for GitHub proof-of-work profiles
//!
//! This library scores README quality and gathers commit, collaboration,
//! code quality and tech stack metrics for GitHub repositories using the
//! octocrab crate. Every GitHub operation lives in its own module and every
//! analyzer degrades to a default value instead of failing the repository.

// Module declarations
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export GitHub operation options
pub use github::{ListCommitsOptions, ListIssuesRequest, ListPullRequestsRequest};

// Re-export repository metrics types and entry points
pub use github::{
    CodeQualityMetrics,
    CollaborationMetrics,
    CommitMetrics,
    CommitRecord,
    ContentEntry,
    CriticalSections,
    EntryKind,
    FormattingFeatures,
    InMemoryManifestCache,
    IssueRecord,
    ItemState,
    ManifestCache,
    MetricsConfig,
    MetricsEngine,
    MetricsSession,
    ProfileReport,
    PullRecord,
    QualitySignals,
    ReadmeMetrics,
    ReadmeSection,
    RepoInfo,
    RepoMetrics,
    RepoRef,
    RepoSource,
    TechStack,
    YearlyLanguages,
    // Pure analyzers
    aggregate_languages_by_year,
    analyze_readme_content,
    compute_commit_metrics,
    longest_streak,
    score_readme,
    // Orchestration
    analyze_profile,
    analyze_profile_with_config,
    analyze_repositories,
    analyze_repository,
};
