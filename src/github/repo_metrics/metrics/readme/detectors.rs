//! README section, signal and formatting detectors
//!
//! Keyword checks expect lower-cased text; formatting checks run on the raw
//! README. All matches are plain substring or regex tests, not a Markdown
//! parse, so a keyword after a `#` inside a code block also counts.

use lazy_static::lazy_static;
use regex::Regex;

use crate::github::repo_metrics::types::{
    CriticalSections, FormattingFeatures, QualitySignals, ReadmeSection,
};

lazy_static! {
    static ref HEADER_RE: Result<Regex, regex::Error> = Regex::new(r"(?m)^#{1,6}\s+\S");
    static ref SECTION_HEADER_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?m)^#{1,3}[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$");
    static ref CODE_BLOCK_RE: Result<Regex, regex::Error> = Regex::new(r"```[\s\S]*?```");
    static ref INDENTED_CODE_RE: Result<Regex, regex::Error> = Regex::new(r"(?m)^    \S");
    static ref LIST_RE: Result<Regex, regex::Error> = Regex::new(r"(?m)^\s*[-*+]\s+\S");
    static ref TABLE_RE: Result<Regex, regex::Error> = Regex::new(r"(?m)^[^\n]*\|[^\n]*\|");
    static ref IMAGE_RE: Result<Regex, regex::Error> = Regex::new(r"!\[[^\]]*\]\([^)]+\)");
    static ref BADGE_RE: Result<Regex, regex::Error> = Regex::new(
        r"\[!\[[^\]]*\]\([^)]+\)\]\([^)]+\)|!\[[^\]]*\]\(https://img\.shields\.io/[^)]+\)"
    );
}

/// A pattern that failed to compile never matches.
fn matches(re: &Result<Regex, regex::Error>, text: &str) -> bool {
    re.as_ref().is_ok_and(|re| re.is_match(text))
}

const INSTALLATION_KEYWORDS: &[&str] = &["installation", "install", "getting started", "setup"];
const USAGE_KEYWORDS: &[&str] = &["usage", "how to use"];
const CONTRIBUTION_KEYWORDS: &[&str] = &["contributing", "contribution", "contribute"];
const LICENSE_KEYWORDS: &[&str] = &["license", "licence"];
const ARCHITECTURE_KEYWORDS: &[&str] = &["architecture", "design", "project structure"];

/// Phrases left behind by Create React App and create-next-app.
const BOILERPLATE_PHRASES: &[&str] = &[
    "this project was bootstrapped with",
    "in the project directory, you can run",
    "this is a one-way operation",
    "you can learn more in the create react app documentation",
    "this is a next.js project bootstrapped with",
];

const API_DOC_KEYWORDS: &[&str] = &[
    "api reference",
    "api documentation",
    "## api",
    "endpoint",
    "swagger",
    "openapi",
];

const ENV_SETUP_KEYWORDS: &[&str] = &[
    ".env",
    "environment variable",
    "env var",
    "process.env",
];

const EXAMPLE_KEYWORDS: &[&str] = &["example", "demo"];

const TROUBLESHOOTING_KEYWORDS: &[&str] = &[
    "troubleshoot",
    "faq",
    "common issues",
    "known issues",
    "common problems",
];

/// True when `"# k"`, `"## k"` or `"### k"` occurs for any keyword.
///
/// A match preceded by another `#` is a level 4+ heading and is skipped.
pub fn has_section(content: &str, keywords: &[&str]) -> bool {
    let content = content.to_lowercase();
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        ["#", "##", "###"].iter().any(|hashes| {
            let needle = format!("{hashes} {keyword}");
            content
                .match_indices(&needle)
                .any(|(idx, _)| !content[..idx].ends_with('#'))
        })
    })
}

pub fn detect_critical_sections(lower: &str) -> CriticalSections {
    CriticalSections {
        installation: has_section(lower, INSTALLATION_KEYWORDS),
        usage: has_section(lower, USAGE_KEYWORDS),
        contribution: has_section(lower, CONTRIBUTION_KEYWORDS),
        license: has_section(lower, LICENSE_KEYWORDS),
        architecture: has_section(lower, ARCHITECTURE_KEYWORDS),
    }
}

fn contains_any(lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lower.contains(phrase))
}

/// At least three of the five scaffolding phrases.
pub fn is_boilerplate(lower: &str) -> bool {
    BOILERPLATE_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .count()
        >= 3
}

pub fn has_api_documentation(lower: &str) -> bool {
    contains_any(lower, API_DOC_KEYWORDS)
}

pub fn has_env_setup(lower: &str) -> bool {
    contains_any(lower, ENV_SETUP_KEYWORDS)
}

/// Example keywords, a fenced code block, or a 4-space-indented line.
pub fn has_code_examples(content: &str) -> bool {
    contains_any(&content.to_lowercase(), EXAMPLE_KEYWORDS)
        || content.contains("```")
        || matches(&INDENTED_CODE_RE, content)
}

pub fn has_troubleshooting(lower: &str) -> bool {
    contains_any(lower, TROUBLESHOOTING_KEYWORDS)
}

pub fn detect_quality_signals(raw: &str, lower: &str) -> QualitySignals {
    QualitySignals {
        is_boilerplate: is_boilerplate(lower),
        has_api_docs: has_api_documentation(lower),
        has_env_setup: has_env_setup(lower),
        has_examples: has_code_examples(raw),
        has_troubleshooting: has_troubleshooting(lower),
    }
}

pub fn detect_formatting(raw: &str) -> FormattingFeatures {
    FormattingFeatures {
        has_headers: matches(&HEADER_RE, raw),
        has_code_blocks: matches(&CODE_BLOCK_RE, raw),
        has_lists: matches(&LIST_RE, raw),
        has_tables: matches(&TABLE_RE, raw),
        has_images: matches(&IMAGE_RE, raw) || raw.contains("<img"),
        has_badges: matches(&BADGE_RE, raw),
    }
}

/// Whitespace-separated tokens carrying at least one letter or digit.
pub fn count_words(raw: &str) -> u32 {
    raw.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count() as u32
}

/// Splits the README at level 1-3 headers.
///
/// Each section runs from the end of its header line to the next header, or
/// to the end of the document for the last one. Text before the first header
/// belongs to no section.
pub fn parse_sections(raw: &str) -> Vec<ReadmeSection> {
    let Ok(section_re) = SECTION_HEADER_RE.as_ref() else {
        return Vec::new();
    };

    let headers: Vec<_> = section_re
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().trim().to_string();
            Some((name, whole.start(), whole.end()))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, (name, _, body_start))| {
            let body_end = headers.get(i + 1).map_or(raw.len(), |next| next.1);
            let body = &raw[*body_start..body_end];
            ReadmeSection {
                name: name.clone(),
                content_length: body.trim().chars().count() as u32,
                has_code_examples: body.contains("```"),
            }
        })
        .collect()
}
