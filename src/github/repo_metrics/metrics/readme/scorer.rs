//! README quality score

use crate::github::repo_metrics::types::{CriticalSections, FormattingFeatures, QualitySignals};

const MAX_SCORE: i32 = 100;
const BOILERPLATE_PENALTY: i32 = 20;

/// Points for length: 10 per tier reached at 100, 300 and 500 words.
pub fn word_count_points(word_count: u32) -> i32 {
    [100, 300, 500]
        .into_iter()
        .filter(|tier| word_count >= *tier)
        .count() as i32
        * 10
}

/// Combines the detector outputs into a score in `[0, 100]`.
///
/// Critical sections are worth 10 each, formatting features 5 each, and depth
/// signals 5 each. A boilerplate README loses 20 instead of gaining points.
pub fn score_readme(
    critical: &CriticalSections,
    formatting: &FormattingFeatures,
    signals: &QualitySignals,
    word_count: u32,
) -> u32 {
    let mut score = word_count_points(word_count);
    score += critical.count() as i32 * 10;
    score += formatting.count() as i32 * 5;

    score += [
        signals.has_api_docs,
        signals.has_env_setup,
        signals.has_examples,
        signals.has_troubleshooting,
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as i32
        * 5;

    if signals.is_boilerplate {
        score -= BOILERPLATE_PENALTY;
    }

    score.clamp(0, MAX_SCORE) as u32
}
