//! GitHub branch lookup operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::util::{encode_repo_path, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Outcome of looking a branch up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchLookup {
    /// The branch exists; `sha` is its head commit.
    Found { sha: String },
    /// The API answered 404 for this branch.
    NotFound,
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    sha: String,
}

/// Look up a branch, mapping a 404 to [`BranchLookup::NotFound`].
///
/// Any other failure (auth, rate limit, transport) stays an error.
pub(crate) fn get_branch(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<BranchLookup, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/branches/{}", encode_repo_path(&branch));
        match inner.get::<BranchResponse, _, _>(route, None::<&()>).await {
            Ok(found) => Ok(BranchLookup::Found {
                sha: found.commit.sha,
            }),
            Err(e) if is_not_found(&e) => Ok(BranchLookup::NotFound),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}
