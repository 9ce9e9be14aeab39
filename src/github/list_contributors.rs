//! GitHub repository contributors listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{FromResponse, Octocrab, Page, models::Contributor};
use std::sync::Arc;

/// List every contributor, following pagination to the end.
///
/// GitHub answers an empty repository with `204 No Content`, which has no
/// page to parse, so the status is checked before the body.
pub(crate) fn list_contributors(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<Contributor>, GitHubError>> {
    let route = format!("/repos/{}/{}/contributors?per_page=100", owner.into(), repo.into());
    spawn_task(async move {
        let response = inner._get(route.as_str()).await?;
        if response.status().as_u16() == 204 {
            return Ok(Vec::new());
        }

        let response = octocrab::map_github_error(response).await?;
        let first = Page::<Contributor>::from_response(response).await?;
        let contributors = inner.all_pages(first).await?;
        Ok(contributors)
    })
}
