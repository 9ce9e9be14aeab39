//! README analysis through the public API.

use gitproof_metrics::{
    CriticalSections, FormattingFeatures, QualitySignals, analyze_readme_content, score_readme,
};

#[test]
fn test_installation_and_usage_readme() {
    let metrics = analyze_readme_content("# Installation\nnpm install\n# Usage\nrun it\n");

    assert_eq!(
        metrics.critical_sections,
        CriticalSections {
            installation: true,
            usage: true,
            contribution: false,
            license: false,
            architecture: false,
        }
    );
    assert!(metrics.formatting.has_headers);
    assert!(!metrics.formatting.has_code_blocks);
    assert_eq!(metrics.word_count, 6);
    assert_eq!(metrics.overall_score, 25);
    assert_eq!(metrics.sections.len(), 2);
    assert_eq!(metrics.sections[0].name, "Installation");
}

#[test]
fn test_level_four_heading_is_not_a_section() {
    let metrics = analyze_readme_content("#### Installation\nnpm i\n");
    assert!(!metrics.critical_sections.installation);
    assert!(metrics.sections.is_empty());
}

#[test]
fn test_headings_match_case_insensitively() {
    let metrics = analyze_readme_content("## LICENSE\nMIT\n### Contributing\nPRs welcome\n");
    assert!(metrics.critical_sections.license);
    assert!(metrics.critical_sections.contribution);
}

#[test]
fn test_word_count_tiers() {
    let words = |n: usize| vec!["word"; n].join(" ");
    let score = |n: usize| analyze_readme_content(&words(n)).overall_score;

    assert_eq!(score(99), 0);
    assert_eq!(score(100), 10);
    assert_eq!(score(300), 20);
    assert_eq!(score(500), 30);
    assert_eq!(score(5000), 30);
}

#[test]
fn test_boilerplate_penalty() {
    let readme = "\
This project was bootstrapped with Create React App.
## Available Scripts
In the project directory, you can run:
npm start
You can learn more in the Create React App documentation.
";
    let metrics = analyze_readme_content(readme);
    assert!(metrics.quality_signals.is_boilerplate);
    assert_eq!(metrics.overall_score, 0);
}

#[test]
fn test_score_is_clamped() {
    let critical = CriticalSections {
        installation: true,
        usage: true,
        contribution: true,
        license: true,
        architecture: true,
    };
    let formatting = FormattingFeatures {
        has_headers: true,
        has_code_blocks: true,
        has_lists: true,
        has_tables: true,
        has_images: true,
        has_badges: true,
    };
    let signals = QualitySignals {
        is_boilerplate: false,
        has_api_docs: true,
        has_env_setup: true,
        has_examples: true,
        has_troubleshooting: true,
    };
    assert_eq!(score_readme(&critical, &formatting, &signals, 10_000), 100);

    let boilerplate_only = QualitySignals {
        is_boilerplate: true,
        ..Default::default()
    };
    assert_eq!(
        score_readme(
            &CriticalSections::default(),
            &FormattingFeatures::default(),
            &boilerplate_only,
            0
        ),
        0
    );
}

#[test]
fn test_empty_readme_scores_zero() {
    let metrics = analyze_readme_content("");
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.overall_score, 0);
    assert_eq!(metrics.formatting, FormattingFeatures::default());
}
