//! GitHub repository metadata retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// The subset of repository metadata the uploader needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub full_name: Option<String>,
    pub default_branch: Option<String>,
}

/// Fetch repository metadata.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<RepositoryInfo, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        inner
            .get(format!("/repos/{owner}/{repo}"), None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
