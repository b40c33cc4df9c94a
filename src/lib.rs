//! `gh_upload_file` - commit a local file to a GitHub repository
//!
//! A CI step that reads one local file (or symbolic link), makes sure the
//! target branch exists, and creates or updates the file at a repository
//! path through the contents API. GitHub access goes through octocrab.

pub mod actions;
pub mod github;
pub mod runtime;
pub mod upload;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{BranchLookup, GitHubClient, GitHubClientBuilder, GitHubError, GitHubResult};

// Re-export uploader types
pub use actions::ActionContext;
pub use upload::{
    BranchStatus, FilePayload, FsSource, LocalSource, RepoApi, RepoRef, SourceKind, UploadConfig,
    UploadError, UploadInputs, UploadOutcome, UploadResult, Uploader,
};
