//! GitHub file revision lookup operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::util::{encode_repo_path, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ContentQuery {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
}

/// Fetch the blob SHA of the file at `path`.
///
/// Returns `Ok(None)` when the path does not exist at `reference`.
/// A directory listing is rejected since it carries no single SHA.
pub(crate) fn get_file_sha(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    reference: Option<String>,
) -> AsyncTask<Result<Option<String>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/contents/{}", encode_repo_path(&path));
        let query = ContentQuery { reference };

        let descriptor: serde_json::Value = match inner.get(route, Some(&query)).await {
            Ok(value) => value,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(GitHubError::from(e)),
        };

        if descriptor.is_array() {
            return Err(GitHubError::InvalidInput(format!(
                "{path} is a directory, not a file"
            )));
        }

        descriptor["sha"]
            .as_str()
            .map(|sha| Some(sha.to_string()))
            .ok_or_else(|| GitHubError::Api(format!("content descriptor for {path} has no sha")))
    })
}
