//! Upload a local file to a repository path, creating the branch first
//! when it does not exist.

pub mod config;
pub mod error;
pub mod remote;
pub mod source;
pub mod uploader;

pub use config::{RepoRef, UploadConfig, UploadInputs};
pub use error::{UploadError, UploadResult};
pub use remote::RepoApi;
pub use source::{FilePayload, FsSource, LocalSource, SourceKind, locate};
pub use uploader::{BranchStatus, UploadOutcome, Uploader};
