//! Per-repository analyzers

pub mod code_quality;
pub mod collaboration;
pub mod commits;
pub mod readme;

pub(crate) use code_quality::{collect_code_quality_metrics, collect_tech_stack};
pub(crate) use collaboration::collect_collaboration_metrics;
pub(crate) use commits::collect_commits;
pub(crate) use readme::collect_readme_metrics;
