//! Runtime module
//!
//! Async task primitive shared by the GitHub operations.

pub mod async_task;

pub use async_task::AsyncTask;
