//! Repository analysis: runs every analyzer and assembles one record

mod languages;

pub use languages::aggregate_languages_by_year;

use log::{info, warn};

use crate::github::error::GitHubResult;
use crate::github::repo_metrics::cache::ManifestCache;
use crate::github::repo_metrics::config::MetricsConfig;
use crate::github::repo_metrics::metrics::commits::compute_commit_metrics;
use crate::github::repo_metrics::metrics::{
    collect_code_quality_metrics, collect_collaboration_metrics, collect_commits,
    collect_readme_metrics, collect_tech_stack,
};
use crate::github::repo_metrics::source::RepoSource;
use crate::github::repo_metrics::types::{RepoMetrics, RepoRef};

/// Analyzes a single repository.
///
/// Only the metadata lookup is fatal. Every other analyzer falls back to its
/// default and leaves a note in `errors`. Code quality and tech stack run one
/// after the other so the second reuses the first's manifest existence check.
pub async fn analyze_repository<S>(
    source: &S,
    cache: &dyn ManifestCache,
    repo: &RepoRef,
    config: &MetricsConfig,
) -> GitHubResult<RepoMetrics>
where
    S: RepoSource + ?Sized,
{
    let info = source.repository(repo).await?;

    let manifest_analyses = async {
        let (code_quality, mut errors) = collect_code_quality_metrics(source, cache, repo).await;
        let (tech_stack, stack_errors) = collect_tech_stack(source, cache, repo).await;
        errors.extend(stack_errors);
        (code_quality, tech_stack, errors)
    };

    let (readme, commits, (collaboration_metrics, collaboration_errors), manifest) = tokio::join!(
        collect_readme_metrics(source, repo),
        collect_commits(source, repo, config.commit_page_size),
        collect_collaboration_metrics(source, repo, info.is_fork),
        manifest_analyses,
    );
    let (code_quality, tech_stack, manifest_errors) = manifest;

    let mut errors = Vec::new();

    let readme_metrics = match readme {
        Ok(found) => found,
        Err(e) => {
            warn!("README unavailable for {repo}: {e}");
            errors.push(format!("readme: {e}"));
            None
        }
    };

    if let Some(e) = &commits.error {
        errors.push(format!("commits (partial, {} fetched): {e}", commits.commits.len()));
    }
    let commit_metrics = compute_commit_metrics(&commits.commits);

    errors.extend(collaboration_errors);
    errors.extend(manifest_errors);

    info!(
        "Analyzed {repo}: {} commits, readme score {}",
        commit_metrics.total_commits,
        readme_metrics.as_ref().map_or(0, |r| r.overall_score)
    );

    Ok(RepoMetrics {
        name: info.name,
        full_name: if info.full_name.is_empty() {
            repo.full_name()
        } else {
            info.full_name
        },
        description: info.description,
        language: info.language,
        topics: info.topics,
        created_at: info.created_at,
        updated_at: info.updated_at,
        size_kb: info.size_kb,
        stars: info.stars,
        forks: info.forks,
        open_issues: info.open_issues,
        is_fork: info.is_fork,
        readme_metrics,
        commit_metrics,
        collaboration_metrics,
        code_quality,
        tech_stack,
        errors,
    })
}
