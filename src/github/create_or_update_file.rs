//! GitHub File creation/update operation.

use crate::github::util::{encode_repo_path, spawn_task};
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request parameters for creating or updating a file
#[derive(Debug, Clone)]
pub struct CreateOrUpdateFileRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path to the file in the repository
    pub path: String,
    /// Commit message
    pub message: String,
    /// File content, already base64 encoded
    pub content: String,
    /// Branch to commit to (defaults to repository default branch)
    pub branch: Option<String>,
    /// SHA of the file being replaced; omitted for a create
    pub sha: Option<String>,
}

#[derive(Serialize)]
struct ContentsBody<'a> {
    message: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Commit produced by a contents write.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileCommit {
    #[serde(default)]
    pub content: Option<WrittenContent>,
    #[serde(default)]
    pub commit: Option<CommitRef>,
}

/// The blob written by a contents call.
#[derive(Debug, Clone, Deserialize)]
pub struct WrittenContent {
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// Create **or** update a single file.
///
/// The service treats the call as an update when `sha` is present and
/// rejects it with 409/422 when `sha` is absent but the path exists.
pub(crate) fn create_or_update_file(
    inner: Arc<Octocrab>,
    request: CreateOrUpdateFileRequest,
) -> AsyncTask<Result<FileCommit, GitHubError>> {
    spawn_task(async move {
        let route = format!(
            "/repos/{}/{}/contents/{}",
            request.owner,
            request.repo,
            encode_repo_path(&request.path)
        );
        let body = ContentsBody {
            message: &request.message,
            content: &request.content,
            branch: request.branch.as_deref(),
            sha: request.sha.as_deref(),
        };

        inner
            .put(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
