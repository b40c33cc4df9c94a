//! Upload inputs and their resolution against the execution context.

use crate::actions::ActionContext;
use crate::upload::error::{UploadError, UploadResult};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse an `owner/repo` slug such as `GITHUB_REPOSITORY`.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, repo) = slug.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Raw step inputs, exactly as the invoking environment supplied them.
#[derive(Debug, Clone, Default)]
pub struct UploadInputs {
    pub file: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub token: Option<String>,
    pub message: Option<String>,
    pub path: Option<String>,
    pub branch: Option<String>,
    pub update_file: Option<String>,
}

impl UploadInputs {
    /// Fill every absent value from `fallback`.
    #[must_use]
    pub fn or(self, fallback: UploadInputs) -> Self {
        Self {
            file: self.file.or(fallback.file),
            owner: self.owner.or(fallback.owner),
            repo: self.repo.or(fallback.repo),
            token: self.token.or(fallback.token),
            message: self.message.or(fallback.message),
            path: self.path.or(fallback.path),
            branch: self.branch.or(fallback.branch),
            update_file: self.update_file.or(fallback.update_file),
        }
    }
}

/// Fully resolved configuration for one upload run.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Absolute path of the local source
    pub file: PathBuf,
    pub repository: RepoRef,
    pub token: String,
    pub message: String,
    /// Destination path inside the repository
    pub path: String,
    /// Target branch; `None` lets the service pick the default branch
    pub branch: Option<String>,
    /// Repository path probed for an existing revision SHA
    pub update_file: Option<String>,
    /// Web base used to build browse URLs in failure messages
    pub server_url: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Join `input` under `cwd` even when `input` is absolute.
fn under_cwd(cwd: &Path, input: &str) -> PathBuf {
    Path::new(input)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::CurDir | Component::Prefix(_)))
        .fold(cwd.to_path_buf(), |acc, c| acc.join(c))
}

fn required(value: Option<String>, name: &'static str) -> UploadResult<String> {
    non_empty(value).ok_or(UploadError::MissingInput(name))
}

impl UploadConfig {
    /// Resolve inputs, falling back to the ambient repository for
    /// `owner`/`repo` and joining `file` onto `cwd`.
    pub fn resolve(inputs: UploadInputs, ctx: &ActionContext, cwd: &Path) -> UploadResult<Self> {
        let file = required(inputs.file, "file")?;
        let token = required(inputs.token, "token")?;
        let message = required(inputs.message, "message")?;
        let path = required(inputs.path, "path")?;

        let ambient = ctx.repository.as_ref();
        let owner = non_empty(inputs.owner)
            .or_else(|| ambient.map(|r| r.owner.clone()))
            .ok_or(UploadError::MissingInput("owner"))?;
        let repo = non_empty(inputs.repo)
            .or_else(|| ambient.map(|r| r.repo.clone()))
            .ok_or(UploadError::MissingInput("repo"))?;

        let branch = non_empty(inputs.branch);
        if let Some(name) = branch.as_deref().filter(|b| b.starts_with("refs/")) {
            return Err(UploadError::InvalidInput {
                name: "branch",
                reason: format!("expected a bare branch name, got {name}"),
            });
        }

        Ok(Self {
            file: under_cwd(cwd, &file),
            repository: RepoRef::new(owner, repo),
            token,
            message,
            path: path.trim_start_matches('/').to_string(),
            branch,
            update_file: non_empty(inputs.update_file),
            server_url: ctx.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Browse URL of the destination's directory on the target branch.
    ///
    /// Without an explicit branch the URL points at `HEAD`, which GitHub
    /// resolves to the default branch.
    #[must_use]
    pub fn destination_dir_url(&self) -> String {
        let branch = self.branch.as_deref().unwrap_or("HEAD");
        let base = format!(
            "{}/{}/{}/tree/{branch}",
            self.server_url, self.repository.owner, self.repository.repo
        );
        match self.destination_dir() {
            "" => base,
            dir => format!("{base}/{dir}"),
        }
    }

    /// Directory part of the destination path, empty at the root.
    #[must_use]
    pub fn destination_dir(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Final component of the destination path.
    #[must_use]
    pub fn destination_name(&self) -> &str {
        self.path.rsplit_once('/').map_or(self.path.as_str(), |(_, name)| name)
    }
}
