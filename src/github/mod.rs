//! GitHub API operations module
//!
//! Provides the repository operations the uploader needs, using octocrab.

pub mod client;
pub mod error;
pub mod util;

pub use client::{GitHubClient, GitHubClientBuilder};
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

pub use create_or_update_file::{CommitRef, CreateOrUpdateFileRequest, FileCommit, WrittenContent};
pub use get_branch::BranchLookup;
pub use get_repository::RepositoryInfo;

pub(crate) mod create_branch;
pub(crate) mod create_or_update_file;
pub(crate) mod get_branch;
pub(crate) mod get_file_sha;
pub(crate) mod get_repository;
