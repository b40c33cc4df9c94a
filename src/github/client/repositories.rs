//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::{BranchLookup, CreateOrUpdateFileRequest, FileCommit, RepositoryInfo};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Look up a branch by name
    pub fn get_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<BranchLookup, GitHubError>> {
        crate::github::get_branch::get_branch(self.inner.clone(), owner, repo, branch)
    }

    /// Get repository metadata
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RepositoryInfo, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// Create a branch at `sha`
    pub fn create_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch_name: impl Into<String>,
        sha: impl Into<String>,
    ) -> AsyncTask<Result<(), GitHubError>> {
        crate::github::create_branch::create_branch(
            self.inner.clone(),
            owner,
            repo,
            branch_name,
            sha,
        )
    }

    /// Get the blob SHA of a file, `None` if it does not exist
    pub fn get_file_sha(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        ref_name: Option<String>,
    ) -> AsyncTask<Result<Option<String>, GitHubError>> {
        crate::github::get_file_sha::get_file_sha(self.inner.clone(), owner, repo, path, ref_name)
    }

    /// Create or update a file
    #[must_use]
    pub fn create_or_update_file(
        &self,
        request: CreateOrUpdateFileRequest,
    ) -> AsyncTask<Result<FileCommit, GitHubError>> {
        crate::github::create_or_update_file::create_or_update_file(self.inner.clone(), request)
    }
}
