//! GitHub authenticated user retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Author};
use std::sync::Arc;

/// Get details of the authenticated GitHub user.
///
/// Calls the `/user` endpoint; the login it returns is the profile owner.
pub(crate) fn get_me(inner: Arc<Octocrab>) -> AsyncTask<Result<Author, GitHubError>> {
    spawn_task(async move {
        let user = inner.current().user().await.map_err(GitHubError::from)?;
        Ok(user)
    })
}
