//! Manifest existence cache
//!
//! Entries are written once per `owner/repo` key and never expire or get
//! evicted. Two tasks racing on the same key both store the same boolean.

use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::github::repo_metrics::source::RepoSource;
use crate::github::repo_metrics::types::RepoRef;

/// Key-value store remembering whether a repository has a manifest.
#[async_trait]
pub trait ManifestCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<bool>;
    async fn set(&self, key: &str, exists: bool);
}

/// Process-local [`ManifestCache`] backed by a map.
#[derive(Default)]
pub struct InMemoryManifestCache {
    entries: RwLock<HashMap<String, bool>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemoryManifestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(hits, misses)` since creation.
    pub fn cache_stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ManifestCache for InMemoryManifestCache {
    async fn get(&self, key: &str) -> Option<bool> {
        let found = self.entries.read().await.get(key).copied();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    async fn set(&self, key: &str, exists: bool) {
        self.entries
            .write()
            .await
            .entry(key.to_string())
            .or_insert(exists);
    }
}

/// Whether the repository has a manifest, asking the source at most once per
/// key. A failed check answers `false` and leaves the key unset.
pub async fn manifest_exists<S>(source: &S, cache: &dyn ManifestCache, repo: &RepoRef) -> bool
where
    S: RepoSource + ?Sized,
{
    let key = repo.full_name();
    if let Some(exists) = cache.get(&key).await {
        return exists;
    }

    match source.manifest_exists(repo).await {
        Ok(exists) => {
            debug!("Manifest existence for {key}: {exists}");
            cache.set(&key, exists).await;
            exists
        }
        Err(e) => {
            warn!("Failed to check manifest for {key}: {e}");
            false
        }
    }
}
