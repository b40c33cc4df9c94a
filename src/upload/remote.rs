//! The repository operations the uploader drives.

use crate::github::{
    BranchLookup, CreateOrUpdateFileRequest, FileCommit, GitHubClient, GitHubError, GitHubResult,
};
use crate::upload::config::RepoRef;
use async_trait::async_trait;

/// Remote repository seam, implemented by [`GitHubClient`].
#[async_trait]
pub trait RepoApi: Send + Sync {
    /// Look a branch up, reporting absence as [`BranchLookup::NotFound`].
    async fn lookup_branch(&self, repo: &RepoRef, branch: &str) -> GitHubResult<BranchLookup>;

    /// Name of the repository's default branch.
    async fn default_branch(&self, repo: &RepoRef) -> GitHubResult<String>;

    /// Create `refs/heads/<branch>` at `sha`.
    async fn create_branch_ref(&self, repo: &RepoRef, branch: &str, sha: &str)
    -> GitHubResult<()>;

    /// Blob SHA of `path` at `reference`, `None` when the path is absent.
    async fn lookup_file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        reference: Option<&str>,
    ) -> GitHubResult<Option<String>>;

    /// Create or update a file with already base64-encoded content.
    async fn put_file(&self, request: CreateOrUpdateFileRequest) -> GitHubResult<FileCommit>;
}

#[async_trait]
impl RepoApi for GitHubClient {
    async fn lookup_branch(&self, repo: &RepoRef, branch: &str) -> GitHubResult<BranchLookup> {
        self.get_branch(&repo.owner, &repo.repo, branch).await?
    }

    async fn default_branch(&self, repo: &RepoRef) -> GitHubResult<String> {
        let info = self.get_repository(&repo.owner, &repo.repo).await??;
        info.default_branch
            .filter(|name| !name.is_empty())
            .ok_or_else(|| GitHubError::NotFound(format!("default branch of {repo}")))
    }

    async fn create_branch_ref(
        &self,
        repo: &RepoRef,
        branch: &str,
        sha: &str,
    ) -> GitHubResult<()> {
        self.create_branch(&repo.owner, &repo.repo, branch, sha).await?
    }

    async fn lookup_file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        reference: Option<&str>,
    ) -> GitHubResult<Option<String>> {
        self.get_file_sha(
            &repo.owner,
            &repo.repo,
            path,
            reference.map(str::to_string),
        )
        .await?
    }

    async fn put_file(&self, request: CreateOrUpdateFileRequest) -> GitHubResult<FileCommit> {
        self.create_or_update_file(request).await?
    }
}
