//! One-call entry points for token holders

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;

use super::{MetricsConfig, MetricsEngine, ProfileReport, RepoMetrics, RepoRef};

/// Analyze a list of repositories with the default configuration.
///
/// Results come back in the order the repositories were given. A repository
/// whose analysis fails still gets a minimal record with its `errors` set.
///
/// # Example
///
/// ```rust,no_run
/// use gitproof_metrics::{RepoRef, analyze_repositories};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("GITHUB_TOKEN")?;
///     let repos = vec!["rust-lang/rustlings".parse::<RepoRef>()?];
///
///     for metrics in analyze_repositories(&token, repos).await? {
///         println!(
///             "{}: readme {} / 100, {} commits",
///             metrics.full_name,
///             metrics.readme_or_default().overall_score,
///             metrics.commit_metrics.total_commits
///         );
///     }
///     Ok(())
/// }
/// ```
pub async fn analyze_repositories(
    token: &str,
    repos: Vec<RepoRef>,
) -> GitHubResult<Vec<RepoMetrics>> {
    let client = GitHubClient::with_token(token)?;
    let engine = MetricsEngine::new(client, MetricsConfig::default());
    Ok(engine.analyze_all(repos).await)
}

/// Build the profile report for the token's owner.
pub async fn analyze_profile(token: &str) -> GitHubResult<ProfileReport> {
    analyze_profile_with_config(token, MetricsConfig::default()).await
}

/// Like [`analyze_profile`] with custom concurrency, paging and timeouts.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use gitproof_metrics::{MetricsConfig, analyze_profile_with_config};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("GITHUB_TOKEN")?;
///     let config = MetricsConfig {
///         concurrency_limit: 4,
///         repo_timeout: Some(Duration::from_secs(120)),
///         ..Default::default()
///     };
///
///     let report = analyze_profile_with_config(&token, config).await?;
///     for (year, languages) in &report.languages_by_year {
///         println!("{year}: {languages:?}");
///     }
///     Ok(())
/// }
/// ```
pub async fn analyze_profile_with_config(
    token: &str,
    config: MetricsConfig,
) -> GitHubResult<ProfileReport> {
    let client = GitHubClient::with_token(token)?;
    MetricsEngine::new(client, config).profile().await
}
