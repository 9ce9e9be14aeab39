//! Code quality and tech stack detection from the root listing and manifest

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::repo_metrics::cache::{ManifestCache, manifest_exists};
use crate::github::repo_metrics::source::{MANIFEST_FILE, RepoSource};
use crate::github::repo_metrics::types::{
    CodeQualityMetrics, ContentEntry, EntryKind, RepoRef, TechStack,
};

const TEST_DIRS: &[&str] = &["test", "tests", "__tests__"];

/// Dependency key → framework name.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
    ("express", "Express"),
];

/// Dependency names declared in a `package.json`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

#[derive(Deserialize)]
struct RawPackageJson {
    #[serde(default)]
    dependencies: Option<serde_json::Map<String, JsonValue>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<serde_json::Map<String, JsonValue>>,
}

impl PackageManifest {
    pub fn parse(text: &str) -> GitHubResult<Self> {
        let raw: RawPackageJson = serde_json::from_str(text)
            .map_err(|e| GitHubError::Decode(format!("{MANIFEST_FILE}: {e}")))?;

        Ok(Self {
            dependencies: sorted_keys(raw.dependencies),
            dev_dependencies: sorted_keys(raw.dev_dependencies),
        })
    }

    /// Recognized frameworks, in the fixed detection order.
    pub fn frameworks(&self) -> Vec<String> {
        FRAMEWORKS
            .iter()
            .filter(|(key, _)| self.dependencies.iter().any(|d| d.as_str() == *key))
            .map(|(_, name)| (*name).to_string())
            .collect()
    }
}

fn sorted_keys(table: Option<serde_json::Map<String, JsonValue>>) -> Vec<String> {
    let mut keys: Vec<String> = table
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

/// A root directory named `test`, `tests` or `__tests__`.
pub fn has_tests(root: &[ContentEntry]) -> bool {
    root.iter()
        .any(|e| e.kind == EntryKind::Dir && TEST_DIRS.contains(&e.name.as_str()))
}

/// A root `.github` directory, or any root file whose name contains `.yml`.
pub fn has_ci(root: &[ContentEntry]) -> bool {
    root.iter().any(|e| match e.kind {
        EntryKind::Dir => e.name == ".github",
        EntryKind::File => e.name.contains(".yml"),
        EntryKind::Other => false,
    })
}

/// Code quality from the root listing plus manifest counts.
///
/// Lint and format tooling is approximated by having any dev dependency.
pub fn compute_code_quality(root: &[ContentEntry], manifest: &PackageManifest) -> CodeQualityMetrics {
    let dev_count = manifest.dev_dependencies.len() as u32;
    CodeQualityMetrics {
        has_tests: has_tests(root),
        has_ci: has_ci(root),
        has_linter: dev_count > 0,
        has_prettier: dev_count > 0,
        dependencies_count: manifest.dependencies.len() as u32,
        dev_dependencies_count: dev_count,
    }
}

pub fn compute_tech_stack(manifest: &PackageManifest) -> TechStack {
    TechStack {
        frameworks: manifest.frameworks(),
        major_libraries: manifest.dependencies.clone(),
        dev_tools: manifest.dev_dependencies.clone(),
    }
}

/// Loads the manifest if the (cached) existence check says there is one.
///
/// Fetch and parse failures degrade to an empty manifest plus a note.
async fn load_manifest<S>(
    source: &S,
    cache: &dyn ManifestCache,
    repo: &RepoRef,
) -> (PackageManifest, Option<String>)
where
    S: RepoSource + ?Sized,
{
    if !manifest_exists(source, cache, repo).await {
        return (PackageManifest::default(), None);
    }

    let parsed = match source.manifest(repo).await {
        Ok(Some(text)) => PackageManifest::parse(&text),
        Ok(None) => return (PackageManifest::default(), None),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(manifest) => {
            debug!(
                "{repo}: {} dependencies, {} dev dependencies",
                manifest.dependencies.len(),
                manifest.dev_dependencies.len()
            );
            (manifest, None)
        }
        Err(e) => {
            warn!("Ignoring {MANIFEST_FILE} for {repo}: {e}");
            (PackageManifest::default(), Some(format!("{MANIFEST_FILE}: {e}")))
        }
    }
}

/// Collects code quality metrics
pub(crate) async fn collect_code_quality_metrics<S>(
    source: &S,
    cache: &dyn ManifestCache,
    repo: &RepoRef,
) -> (CodeQualityMetrics, Vec<String>)
where
    S: RepoSource + ?Sized,
{
    let mut errors = Vec::new();

    let root = source.root_listing(repo).await.unwrap_or_else(|e| {
        warn!("Failed to list root of {repo}: {e}");
        errors.push(format!("root listing: {e}"));
        Vec::new()
    });

    let (manifest, manifest_error) = load_manifest(source, cache, repo).await;
    errors.extend(manifest_error);

    (compute_code_quality(&root, &manifest), errors)
}

/// Collects tech stack
pub(crate) async fn collect_tech_stack<S>(
    source: &S,
    cache: &dyn ManifestCache,
    repo: &RepoRef,
) -> (TechStack, Vec<String>)
where
    S: RepoSource + ?Sized,
{
    let (manifest, manifest_error) = load_manifest(source, cache, repo).await;
    (compute_tech_stack(&manifest), manifest_error.into_iter().collect())
}
