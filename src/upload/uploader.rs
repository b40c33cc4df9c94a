//! Sequential upload orchestration.

use crate::github::{BranchLookup, CreateOrUpdateFileRequest, FileCommit};
use crate::upload::config::UploadConfig;
use crate::upload::error::{UploadError, UploadResult};
use crate::upload::remote::RepoApi;
use crate::upload::source::{FilePayload, LocalSource, locate};
use log::{debug, info, warn};

/// What happened to the target branch during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStatus {
    /// No branch was requested; the service picks its default.
    Default,
    /// The requested branch already existed.
    Existing,
    /// The branch was created from `base` at commit `sha`.
    Created { base: String, sha: String },
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub branch: BranchStatus,
    /// Revision SHA sent with the write, if any
    pub replaced_sha: Option<String>,
    pub commit: FileCommit,
}

impl UploadOutcome {
    /// SHA of the commit that wrote the file.
    #[must_use]
    pub fn commit_sha(&self) -> Option<&str> {
        self.commit.commit.as_ref().map(|c| c.sha.as_str())
    }

    /// Blob SHA of the written content.
    #[must_use]
    pub fn content_sha(&self) -> Option<&str> {
        self.commit.content.as_ref().map(|c| c.sha.as_str())
    }
}

/// Uploads one local file to one repository path.
///
/// Each lookup-then-act pair (branch check then create, revision lookup
/// then write) is best-effort: a concurrent writer can still race it, and
/// the service's revision check is the only guard.
pub struct Uploader<A, S> {
    api: A,
    source: S,
}

impl<A, S> Uploader<A, S>
where
    A: RepoApi,
    S: LocalSource,
{
    pub fn new(api: A, source: S) -> Self {
        Self { api, source }
    }

    /// Run the upload described by `config`.
    ///
    /// Nothing is rolled back on failure: a branch created before a failed
    /// write stays in place.
    pub async fn run(&self, config: &UploadConfig) -> UploadResult<UploadOutcome> {
        debug!("{}", config.file.display());
        let kind = locate(&self.source, &config.file).await?;

        let branch = match config.branch.as_deref() {
            Some(name) => self.ensure_branch(config, name).await?,
            None => BranchStatus::Default,
        };

        let payload = FilePayload::read(&self.source, &config.file, kind).await?;
        debug!(
            "read {} bytes from {} ({:?})",
            payload.len(),
            config.file.display(),
            payload.kind()
        );

        let replaced_sha = self.revision_for(config).await;

        let request = CreateOrUpdateFileRequest {
            owner: config.repository.owner.clone(),
            repo: config.repository.repo.clone(),
            path: config.path.clone(),
            message: config.message.clone(),
            content: payload.encode(),
            branch: config.branch.clone(),
            sha: replaced_sha.clone(),
        };

        let commit = self
            .api
            .put_file(request)
            .await
            .map_err(|source| UploadError::ExistingFile {
                name: config.destination_name().to_string(),
                url: config.destination_dir_url(),
                source,
            })?;

        if let Some(sha) = commit.commit.as_ref().map(|c| c.sha.as_str()) {
            info!("Committed {} to {} ({sha})", config.path, config.repository);
        }

        Ok(UploadOutcome {
            branch,
            replaced_sha,
            commit,
        })
    }

    async fn ensure_branch(&self, config: &UploadConfig, name: &str) -> UploadResult<BranchStatus> {
        let repo = &config.repository;
        let branch_err = |source| UploadError::Branch {
            branch: name.to_string(),
            source,
        };

        match self.api.lookup_branch(repo, name).await.map_err(branch_err)? {
            BranchLookup::Found { .. } => return Ok(BranchStatus::Existing),
            BranchLookup::NotFound => {
                info!("Not found {name} branch. Creating new branch [{name}]");
            }
        }

        let base = self.api.default_branch(repo).await.map_err(branch_err)?;
        let sha = match self.api.lookup_branch(repo, &base).await.map_err(branch_err)? {
            BranchLookup::Found { sha } => sha,
            BranchLookup::NotFound => {
                return Err(UploadError::Branch {
                    branch: name.to_string(),
                    source: format!("default branch {base} of {repo} not found").into(),
                });
            }
        };

        debug!("creating refs/heads/{name} at {sha} in {repo}");
        self.api
            .create_branch_ref(repo, name, &sha)
            .await
            .map_err(branch_err)?;
        info!("Create branch {name} from {base} {sha} successful.");

        Ok(BranchStatus::Created { base, sha })
    }

    /// Revision SHA of the update-file path; every failure here is soft.
    async fn revision_for(&self, config: &UploadConfig) -> Option<String> {
        let probe = config.update_file.as_deref()?;
        match self
            .api
            .lookup_file_sha(&config.repository, probe, config.branch.as_deref())
            .await
        {
            Ok(Some(sha)) => {
                debug!("{probe} is at revision {sha}");
                Some(sha)
            }
            Ok(None) => {
                warn!("{probe} not found in {}; uploading as a new file", config.repository);
                None
            }
            Err(e) => {
                warn!("Could not read revision of {probe}: {e}; uploading as a new file");
                None
            }
        }
    }
}
