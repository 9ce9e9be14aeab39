// GitProof metrics CLI
//
// Prints repository metrics as JSON. With `owner/repo` arguments only those
// repositories are analyzed; with none, the full profile report for the
// token's owner is built.

use anyhow::{Context, Result};
use gitproof_metrics::{GitHubClient, MetricsConfig, MetricsEngine, RepoRef};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let token = std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?;
    let repos = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<RepoRef>())
        .collect::<Result<Vec<_>, _>>()
        .context("arguments must be owner/repo")?;

    let config = MetricsConfig::from_env();
    info!(
        "Concurrency {}, commit page size {}",
        config.concurrency_limit, config.commit_page_size
    );

    let client = GitHubClient::with_token(token)?;
    let engine = MetricsEngine::new(client, config);

    let json = if repos.is_empty() {
        let report = engine.profile().await?;
        serde_json::to_string_pretty(&report)?
    } else {
        let metrics = engine.analyze_all(repos).await;
        serde_json::to_string_pretty(&metrics)?
    };
    println!("{json}");

    Ok(())
}
