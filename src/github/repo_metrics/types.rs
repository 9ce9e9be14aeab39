//! Type definitions for repository metrics

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::github::error::GitHubError;

/// Calendar year → language name → number of repositories created that year.
pub type YearlyLanguages = BTreeMap<i32, BTreeMap<String, u32>>;

/// `owner/name` identifier of a repository
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Key used for per-repository caches and log lines.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self::new(*owner, *name)),
            _ => Err(GitHubError::InvalidInput(format!(
                "expected 'owner/repo', got '{s}'"
            ))),
        }
    }
}

// ============================================================================
// Source-side records
// ============================================================================

/// Repository metadata as consumed by the aggregator
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub size_kb: u32,
    pub stars: u32,
    pub forks: u32,
    pub open_issues: u32,
    pub is_fork: bool,
}

/// One commit from the repository history
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    /// Author date in the offset the API reported it in.
    pub authored_at: Option<DateTime<FixedOffset>>,
}

/// Open/closed state shared by issues and pull requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

/// One entry of the issues listing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssueRecord {
    pub state: ItemState,
    /// The issues endpoint also returns pull requests.
    pub is_pull_request: bool,
}

/// One entry of the pull request listing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PullRecord {
    pub state: ItemState,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Kind of a directory listing entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

impl EntryKind {
    pub(crate) fn from_api(kind: &str) -> Self {
        match kind {
            "file" => EntryKind::File,
            "dir" => EntryKind::Dir,
            _ => EntryKind::Other,
        }
    }
}

/// One entry of the repository root listing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ContentEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }
}

// ============================================================================
// Output records
// ============================================================================

/// Consolidated metrics for one repository
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepoMetrics {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub size_kb: u32,
    pub stars: u32,
    pub forks: u32,
    pub open_issues: u32,
    pub is_fork: bool,
    pub readme_metrics: Option<ReadmeMetrics>,
    pub commit_metrics: CommitMetrics,
    pub collaboration_metrics: CollaborationMetrics,
    pub code_quality: CodeQualityMetrics,
    pub tech_stack: TechStack,
    /// Sub-analyses that fell back to defaults.
    pub errors: Vec<String>,
}

impl RepoMetrics {
    /// Record for a repository whose analysis failed as a whole.
    #[must_use]
    pub fn minimal(repo: &RepoRef, reason: impl Into<String>) -> Self {
        Self {
            name: repo.name.clone(),
            full_name: repo.full_name(),
            description: None,
            language: None,
            topics: Vec::new(),
            created_at: None,
            updated_at: None,
            size_kb: 0,
            stars: 0,
            forks: 0,
            open_issues: 0,
            is_fork: false,
            readme_metrics: None,
            commit_metrics: CommitMetrics::default(),
            collaboration_metrics: CollaborationMetrics::default(),
            code_quality: CodeQualityMetrics::default(),
            tech_stack: TechStack::default(),
            errors: vec![reason.into()],
        }
    }

    /// README metrics, or the all-false record scored 0 when none were found.
    #[must_use]
    pub fn readme_or_default(&self) -> ReadmeMetrics {
        self.readme_metrics.clone().unwrap_or_default()
    }
}

/// README file quality analysis
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadmeMetrics {
    pub word_count: u32,
    pub content: String,
    pub sections: Vec<ReadmeSection>,
    pub critical_sections: CriticalSections,
    pub formatting: FormattingFeatures,
    pub quality_signals: QualitySignals,
    pub overall_score: u32,
}

/// Text between one level 1-3 header and the next
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeSection {
    pub name: String,
    pub content_length: u32,
    pub has_code_examples: bool,
}

/// Presence of the scored README topics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalSections {
    pub installation: bool,
    pub usage: bool,
    pub contribution: bool,
    pub license: bool,
    pub architecture: bool,
}

impl CriticalSections {
    pub(crate) fn count(&self) -> u32 {
        [
            self.installation,
            self.usage,
            self.contribution,
            self.license,
            self.architecture,
        ]
        .into_iter()
        .filter(|present| *present)
        .count() as u32
    }
}

/// Markdown formatting features
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingFeatures {
    pub has_headers: bool,
    pub has_code_blocks: bool,
    pub has_lists: bool,
    pub has_tables: bool,
    pub has_images: bool,
    pub has_badges: bool,
}

impl FormattingFeatures {
    pub(crate) fn count(&self) -> u32 {
        [
            self.has_headers,
            self.has_code_blocks,
            self.has_lists,
            self.has_tables,
            self.has_images,
            self.has_badges,
        ]
        .into_iter()
        .filter(|present| *present)
        .count() as u32
    }
}

/// Depth signals, plus the boilerplate penalty flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySignals {
    pub is_boilerplate: bool,
    pub has_api_docs: bool,
    pub has_env_setup: bool,
    pub has_examples: bool,
    pub has_troubleshooting: bool,
}

/// Commit history statistics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitMetrics {
    pub total_commits: u32,
    pub first_commit_date: Option<DateTime<FixedOffset>>,
    pub last_commit_date: Option<DateTime<FixedOffset>>,
    pub longest_streak_days: u32,
    /// `YYYY-MM` → commits authored that month.
    pub commit_frequency: BTreeMap<String, u32>,
}

/// Contributor, issue and pull request counts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationMetrics {
    pub contributors_count: u32,
    pub total_issues: u32,
    pub open_issues: u32,
    pub closed_issues: u32,
    pub total_pull_requests: u32,
    pub merged_pull_requests: u32,
    pub is_fork: bool,
}

/// Coarse code quality signals from the root listing and manifest
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeQualityMetrics {
    pub has_tests: bool,
    pub has_ci: bool,
    pub has_linter: bool,
    pub has_prettier: bool,
    pub dependencies_count: u32,
    pub dev_dependencies_count: u32,
}

/// Technologies declared in the manifest
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub frameworks: Vec<String>,
    pub major_libraries: Vec<String>,
    pub dev_tools: Vec<String>,
}

/// Metrics for every repository owned by the authenticated user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileReport {
    pub login: String,
    pub generated_at: DateTime<Utc>,
    pub repositories: Vec<RepoMetrics>,
    pub languages_by_year: YearlyLanguages,
}
