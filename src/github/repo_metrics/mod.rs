//! Repository metrics for proof-of-work profiles
//!
//! This module turns GitHub repository data into README quality scores,
//! commit statistics, collaboration counts, code quality signals and a tech
//! stack, one [`RepoMetrics`] record per repository.

pub mod analysis;
mod cache;
mod config;
mod convenience;
pub mod metrics;
mod source;
mod types;

pub use analysis::{aggregate_languages_by_year, analyze_repository};
pub use cache::{InMemoryManifestCache, ManifestCache, manifest_exists};
pub use config::MetricsConfig;
pub use convenience::{analyze_profile, analyze_profile_with_config, analyze_repositories};
pub use metrics::commits::{CommitCollection, compute_commit_metrics, longest_streak};
pub use metrics::readme::analyze_readme_content;
pub use metrics::readme::scorer::score_readme;
pub use source::{MANIFEST_FILE, RepoSource};
pub use types::{
    CodeQualityMetrics, CollaborationMetrics, CommitMetrics, CommitRecord, ContentEntry,
    CriticalSections, EntryKind, FormattingFeatures, IssueRecord, ItemState, ProfileReport,
    PullRecord, QualitySignals, ReadmeMetrics, ReadmeSection, RepoInfo, RepoMetrics, RepoRef,
    TechStack, YearlyLanguages,
};

#[cfg(test)]
pub(crate) use source::MockRepoSource;

use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use chrono::Utc;
use futures::Stream;
use futures::stream::{self, StreamExt};
use log::{info, warn};
use tokio::sync::mpsc::Receiver;
use tokio_stream::wrappers::ReceiverStream;

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::spawn_task;

/// Stream of per-repository results in completion order
pub struct MetricsSession {
    inner: ReceiverStream<RepoMetrics>,
}

impl MetricsSession {
    fn new(rx: Receiver<RepoMetrics>) -> Self {
        Self {
            inner: ReceiverStream::new(rx),
        }
    }
}

impl Stream for MetricsSession {
    type Item = RepoMetrics;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// Runs repository analyses with bounded concurrency.
///
/// Each repository is analyzed on its own task. An error, a timeout or a
/// panic in one task yields [`RepoMetrics::minimal`] for that repository and
/// never affects the others.
pub struct MetricsEngine<S: RepoSource> {
    source: Arc<S>,
    cache: Arc<dyn ManifestCache>,
    config: MetricsConfig,
}

impl<S: RepoSource> Clone for MetricsEngine<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cache: self.cache.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: RepoSource> MetricsEngine<S> {
    /// Engine with its own empty manifest cache.
    pub fn new(source: S, config: MetricsConfig) -> Self {
        Self::with_cache(Arc::new(source), Arc::new(InMemoryManifestCache::new()), config)
    }

    /// Engine sharing an existing source and manifest cache.
    pub fn with_cache(source: Arc<S>, cache: Arc<dyn ManifestCache>, config: MetricsConfig) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Analyzes one repository in isolation.
    pub async fn analyze(&self, repo: RepoRef) -> RepoMetrics {
        let source = self.source.clone();
        let cache = self.cache.clone();
        let config = self.config.clone();
        let task_repo = repo.clone();

        let task = spawn_task(async move {
            let work = analyze_repository(source.as_ref(), cache.as_ref(), &task_repo, &config);
            match config.repo_timeout {
                Some(limit) => match tokio::time::timeout(limit, work).await {
                    Ok(result) => result,
                    Err(_) => Err(GitHubError::Timeout {
                        operation: format!("analyze {task_repo}"),
                        duration: limit,
                    }),
                },
                None => work.await,
            }
        });

        match task.await.map_err(GitHubError::from) {
            Ok(Ok(metrics)) => metrics,
            Ok(Err(e)) | Err(e) => {
                warn!("Analysis of {repo} failed: {e}");
                RepoMetrics::minimal(&repo, e.to_string())
            }
        }
    }

    /// Analyzes every repository, returning results in input order.
    pub async fn analyze_all(&self, repos: Vec<RepoRef>) -> Vec<RepoMetrics> {
        let start_time = std::time::Instant::now();
        let count = repos.len();

        let results = stream::iter(repos)
            .map(|repo| self.analyze(repo))
            .buffered(self.config.concurrency_limit.max(1))
            .collect::<Vec<_>>()
            .await;

        let degraded = results.iter().filter(|r| !r.errors.is_empty()).count();
        info!(
            "Analyzed {count} repositories in {}ms ({degraded} with fallbacks)",
            start_time.elapsed().as_millis()
        );
        results
    }

    /// Streams results as each repository finishes.
    pub fn stream(&self, repos: Vec<RepoRef>) -> MetricsSession {
        let (tx, rx) = tokio::sync::mpsc::channel(self.config.concurrency_limit.max(1));
        let engine = self.clone();

        tokio::spawn(async move {
            let limit = engine.config.concurrency_limit.max(1);
            let mut results = stream::iter(repos)
                .map(|repo| engine.analyze(repo))
                .buffer_unordered(limit);

            while let Some(metrics) = results.next().await {
                // Receiver dropped: stop scheduling further work
                if tx.send(metrics).await.is_err() {
                    break;
                }
            }
        });

        MetricsSession::new(rx)
    }

    /// Metrics for every repository the authenticated user owns.
    pub async fn profile(&self) -> GitHubResult<ProfileReport> {
        let login = self.source.current_login().await?;
        let repos = self.source.owned_repositories().await?;
        info!("Building profile for {login} over {} repositories", repos.len());

        let repositories = self.analyze_all(repos).await;
        let languages_by_year = aggregate_languages_by_year(&repositories);

        Ok(ProfileReport {
            login,
            generated_at: Utc::now(),
            repositories,
            languages_by_year,
        })
    }
}
