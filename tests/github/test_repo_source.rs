//! `RepoSource` for `GitHubClient` over HTTP.

use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::{Value, json};

use gitproof_metrics::{GitHubClient, GitHubError, ItemState, RepoRef, RepoSource};

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::builder()
        .personal_token("test-token")
        .base_uri(server.base_url())
        .build()
        .unwrap()
}

fn user(login: &str, id: u64) -> Value {
    let api = "https://api.github.com/users";
    json!({
        "login": login,
        "id": id,
        "node_id": format!("U_{id}"),
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
        "gravatar_id": "",
        "url": format!("{api}/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("{api}/{login}/followers"),
        "following_url": format!("{api}/{login}/following"),
        "gists_url": format!("{api}/{login}/gists"),
        "starred_url": format!("{api}/{login}/starred"),
        "subscriptions_url": format!("{api}/{login}/subscriptions"),
        "organizations_url": format!("{api}/{login}/orgs"),
        "repos_url": format!("{api}/{login}/repos"),
        "events_url": format!("{api}/{login}/events"),
        "received_events_url": format!("{api}/{login}/received_events"),
        "type": "User",
        "site_admin": false
    })
}

fn issue(number: u64, state: &str, is_pull_request: bool) -> Value {
    let base = format!("https://api.github.com/repos/octo/app/issues/{number}");
    let mut issue = json!({
        "id": 1000 + number,
        "node_id": format!("I_{number}"),
        "url": base,
        "repository_url": "https://api.github.com/repos/octo/app",
        "labels_url": format!("{base}/labels{{/name}}"),
        "comments_url": format!("{base}/comments"),
        "events_url": format!("{base}/events"),
        "html_url": format!("https://github.com/octo/app/issues/{number}"),
        "number": number,
        "state": state,
        "title": format!("Issue {number}"),
        "body": null,
        "user": user("octo", 1),
        "labels": [],
        "assignee": null,
        "assignees": [],
        "author_association": "OWNER",
        "milestone": null,
        "locked": false,
        "active_lock_reason": null,
        "comments": 0,
        "closed_at": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    });
    if is_pull_request {
        let pull = format!("https://github.com/octo/app/pull/{number}");
        issue["pull_request"] = json!({
            "url": format!("https://api.github.com/repos/octo/app/pulls/{number}"),
            "html_url": pull,
            "diff_url": format!("{pull}.diff"),
            "patch_url": format!("{pull}.patch")
        });
    }
    issue
}

fn pull(number: u64, state: &str, merged_at: Option<&str>) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/octo/app/pulls/{number}"),
        "id": 2000 + number,
        "number": number,
        "state": state,
        "locked": false,
        "title": format!("Pull request {number}"),
        "body": null,
        "draft": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "merged_at": merged_at,
        "head": { "label": "octo:feature", "ref": "feature", "sha": "aaaaaaa" },
        "base": { "label": "octo:main", "ref": "main", "sha": "bbbbbbb" }
    })
}

fn not_found() -> Value {
    json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })
}

#[tokio::test]
async fn test_missing_readme_is_none() {
    let server = MockServer::start_async().await;
    let readme = server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/app/readme");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(not_found());
        })
        .await;

    let result = client(&server).readme(&RepoRef::new("octo", "app")).await;

    readme.assert_async().await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_missing_manifest_is_absent() {
    let server = MockServer::start_async().await;
    let manifest = server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/app/contents/package.json");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(not_found());
        })
        .await;

    let gh = client(&server);
    let repo = RepoRef::new("octo", "app");
    assert!(!gh.manifest_exists(&repo).await.unwrap());
    assert!(gh.manifest(&repo).await.unwrap().is_none());
    manifest.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_issue_listing_flags_pull_requests() {
    let server = MockServer::start_async().await;
    let issues = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/octo/app/issues")
                .query_param("state", "all");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    issue(1, "open", false),
                    issue(2, "closed", false),
                    issue(3, "closed", true),
                ]));
        })
        .await;

    let records = client(&server)
        .issues(&RepoRef::new("octo", "app"))
        .await
        .unwrap();

    issues.assert_async().await;
    let flags: Vec<_> = records.iter().map(|r| (r.state, r.is_pull_request)).collect();
    assert_eq!(
        flags,
        vec![
            (ItemState::Open, false),
            (ItemState::Closed, false),
            (ItemState::Closed, true),
        ]
    );
}

#[tokio::test]
async fn test_pull_requests_carry_merge_timestamp() {
    let server = MockServer::start_async().await;
    let pulls = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/octo/app/pulls")
                .query_param("state", "all");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    pull(4, "closed", Some("2024-02-03T04:05:06Z")),
                    pull(5, "closed", None),
                    pull(6, "open", None),
                ]));
        })
        .await;

    let records = client(&server)
        .pull_requests(&RepoRef::new("octo", "app"))
        .await
        .unwrap();

    pulls.assert_async().await;
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].merged_at.map(|t| t.to_rfc3339()),
        Some("2024-02-03T04:05:06+00:00".to_string())
    );
    assert_eq!(records[0].state, ItemState::Closed);
    assert!(records[1].merged_at.is_none());
    assert_eq!(records[2].state, ItemState::Open);
}

#[tokio::test]
async fn test_commit_page_query() {
    let server = MockServer::start_async().await;
    let commits = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/octo/app/commits")
                .query_param("page", "2")
                .query_param("per_page", "50");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        })
        .await;

    let page = client(&server)
        .commits_page(&RepoRef::new("octo", "app"), 2, 50)
        .await
        .unwrap();

    commits.assert_async().await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_contributor_logins() {
    let server = MockServer::start_async().await;
    let contributors = server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/app/contributors");
            let mut first = user("octo", 1);
            first["contributions"] = json!(40);
            let mut second = user("hubot", 2);
            second["contributions"] = json!(3);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([first, second]));
        })
        .await;

    let logins = client(&server)
        .contributors(&RepoRef::new("octo", "app"))
        .await
        .unwrap();

    contributors.assert_async().await;
    assert_eq!(logins, vec!["octo", "hubot"]);
}

#[tokio::test]
async fn test_unknown_repository_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/gone");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(not_found());
        })
        .await;

    let result = client(&server).repository(&RepoRef::new("octo", "gone")).await;
    assert!(matches!(result, Err(GitHubError::NotFound(ref name)) if name == "octo/gone"));
}

#[tokio::test]
async fn test_api_error_message_names_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/app");
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!({
                    "message": "API rate limit exceeded for user ID 1.",
                    "documentation_url": "https://docs.github.com/rest/rate-limit"
                }));
        })
        .await;

    let err = client(&server)
        .repository(&RepoRef::new("octo", "app"))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("API rate limit exceeded"), "{message}");
    assert!(!message.contains('\n'), "{message}");
}
