//! Uploader error types

use crate::github::GitHubError;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of an upload run.
///
/// The `Display` text of each variant is what the run reports as its
/// failure reason.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Source path is neither present on disk nor a symbolic link
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A required input was empty or absent
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    /// An input had an unusable shape
    #[error("Invalid input {name}: {reason}")]
    InvalidInput { name: &'static str, reason: String },

    /// Reading the local source failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Branch lookup or creation failed
    #[error("Failed to prepare branch {branch}: {source}")]
    Branch {
        branch: String,
        #[source]
        source: GitHubError,
    },

    /// The contents write was rejected, usually because the destination
    /// already exists and no matching revision was supplied
    #[error("Create existed file [{name}]. {url}")]
    ExistingFile {
        name: String,
        url: String,
        #[source]
        source: GitHubError,
    },

    /// Any other GitHub failure
    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// Convenience result alias for upload runs
pub type UploadResult<T> = Result<T, UploadError>;
