//! README quality metrics collection

pub mod detectors;
pub mod scorer;

use crate::github::error::GitHubResult;
use crate::github::repo_metrics::source::RepoSource;
use crate::github::repo_metrics::types::{ReadmeMetrics, RepoRef};

use detectors::{
    count_words, detect_critical_sections, detect_formatting, detect_quality_signals,
    parse_sections,
};
use scorer::score_readme;

/// Analyzes README text that has already been fetched and decoded.
pub fn analyze_readme_content(content: &str) -> ReadmeMetrics {
    let lower = content.to_lowercase();

    let word_count = count_words(content);
    let sections = parse_sections(content);
    let critical_sections = detect_critical_sections(&lower);
    let formatting = detect_formatting(content);
    let quality_signals = detect_quality_signals(content, &lower);
    let overall_score = score_readme(
        &critical_sections,
        &formatting,
        &quality_signals,
        word_count,
    );

    ReadmeMetrics {
        word_count,
        content: content.to_string(),
        sections,
        critical_sections,
        formatting,
        quality_signals,
        overall_score,
    }
}

/// Fetches and analyzes the README. `Ok(None)` means the repository has none.
pub(crate) async fn collect_readme_metrics<S>(
    source: &S,
    repo: &RepoRef,
) -> GitHubResult<Option<ReadmeMetrics>>
where
    S: RepoSource + ?Sized,
{
    let content = source.readme(repo).await?;
    Ok(content.as_deref().map(analyze_readme_content))
}
