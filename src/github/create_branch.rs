//! GitHub Branch creation operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::{Octocrab, params::repos::Reference};
use std::sync::Arc;

/// Point a new `refs/heads/<branch>` at `sha`.
///
/// `branch` may be given bare or with its `refs/heads/` prefix. The API
/// answers 422 when the ref already exists.
pub(crate) fn create_branch(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<(), GitHubError>> {
    let (owner, repo, sha) = (owner.into(), repo.into(), sha.into());
    let branch = branch.into();
    let name = branch.strip_prefix("refs/heads/").unwrap_or(&branch).to_string();

    spawn_task(async move {
        if name.is_empty() || sha.is_empty() {
            return Err(GitHubError::InvalidInput(
                "branch name and base sha are required".into(),
            ));
        }

        inner
            .repos(&owner, &repo)
            .create_ref(&Reference::Branch(name.clone()), sha.as_str())
            .await
            .map_err(GitHubError::from)?;

        debug!("created refs/heads/{name} at {sha} in {owner}/{repo}");
        Ok(())
    })
}
