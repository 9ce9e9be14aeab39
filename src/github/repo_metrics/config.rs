//! Configuration for metrics collection

use log::warn;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for metrics collection
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Repositories analyzed at the same time.
    pub concurrency_limit: usize,
    /// Commit listing page size (GitHub caps it at 100).
    pub commit_page_size: u8,
    /// Deadline for one repository's whole analysis.
    pub repo_timeout: Option<Duration>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 10,
            commit_page_size: 100,
            repo_timeout: None,
        }
    }
}

impl MetricsConfig {
    /// Defaults overridden by `GITPROOF_CONCURRENCY`, `GITPROOF_COMMIT_PAGE_SIZE`
    /// and `GITPROOF_REPO_TIMEOUT_SECS`. Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = env_value::<usize>("GITPROOF_CONCURRENCY") {
            config.concurrency_limit = limit.max(1);
        }
        if let Some(size) = env_value::<u8>("GITPROOF_COMMIT_PAGE_SIZE") {
            config.commit_page_size = size.clamp(1, 100);
        }
        if let Some(secs) = env_value::<u64>("GITPROOF_REPO_TIMEOUT_SECS") {
            config.repo_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        config
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let value = parse_value(&raw);
    if value.is_none() {
        warn!("Ignoring {key}={raw}: not a valid value");
    }
    value
}

fn parse_value<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}
