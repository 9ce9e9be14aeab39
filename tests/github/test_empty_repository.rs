//! A freshly created repository with no commits, README or files.

use httpmock::Method::GET;
use httpmock::MockServer;
use regex::Regex;
use serde_json::json;

use gitproof_metrics::{GitHubClient, MetricsConfig, MetricsEngine, RepoRef, RepoSource};

async fn empty_repository_server() -> MockServer {
    let server = MockServer::start_async().await;
    let respond = |then: httpmock::Then, status: u16, body: serde_json::Value| {
        then.status(status)
            .header("content-type", "application/json")
            .json_body(body);
    };

    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty");
            respond(
                then,
                200,
                json!({
                    "id": 42,
                    "name": "empty",
                    "full_name": "octo/empty",
                    "url": "https://api.github.com/repos/octo/empty",
                    "language": null,
                    "created_at": "2024-06-01T12:00:00Z"
                }),
            );
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/readme");
            respond(then, 404, json!({ "message": "Not Found" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/commits");
            respond(then, 409, json!({ "message": "Git Repository is empty." }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/contributors");
            then.status(204);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/issues");
            respond(then, 200, json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/pulls");
            respond(then, 200, json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path_matches(Regex::new(r"^/repos/octo/empty/contents/?$").unwrap());
            respond(then, 404, json!({ "message": "This repository is empty." }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/empty/contents/package.json");
            respond(then, 404, json!({ "message": "This repository is empty." }));
        })
        .await;

    server
}

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::builder()
        .personal_token("test-token")
        .base_uri(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_empty_repository_listings_are_empty() {
    let server = empty_repository_server().await;
    let gh = client(&server);
    let repo = RepoRef::new("octo", "empty");

    assert!(gh.commits_page(&repo, 1, 100).await.unwrap().is_empty());
    assert!(gh.contributors(&repo).await.unwrap().is_empty());
    assert!(gh.root_listing(&repo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_repository_analyzes_without_errors() {
    let server = empty_repository_server().await;
    let engine = MetricsEngine::new(client(&server), MetricsConfig::default());

    let metrics = engine.analyze(RepoRef::new("octo", "empty")).await;

    assert!(metrics.errors.is_empty(), "{:?}", metrics.errors);
    assert_eq!(metrics.full_name, "octo/empty");
    assert!(metrics.readme_metrics.is_none());
    assert_eq!(metrics.commit_metrics.total_commits, 0);
    assert_eq!(metrics.commit_metrics.longest_streak_days, 0);
    assert_eq!(metrics.collaboration_metrics.contributors_count, 0);
    assert_eq!(metrics.collaboration_metrics.total_issues, 0);
    assert!(!metrics.code_quality.has_tests);
    assert!(metrics.tech_stack.frameworks.is_empty());
}
