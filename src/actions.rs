//! GitHub Actions execution context and workflow-command reporting.

use crate::upload::config::{RepoRef, UploadInputs};
use std::io::{self, Write};
use std::path::PathBuf;

/// Web host used when `GITHUB_SERVER_URL` is unset.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Ambient values the runner exposes to every step.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// From `GITHUB_REPOSITORY`
    pub repository: Option<RepoRef>,
    /// From `GITHUB_API_URL`; `None` keeps octocrab's default
    pub api_url: Option<String>,
    /// From `GITHUB_SERVER_URL`
    pub server_url: String,
    /// From `GITHUB_OUTPUT`
    pub output_file: Option<PathBuf>,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            repository: None,
            api_url: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            output_file: None,
        }
    }
}

impl ActionContext {
    /// Read the context from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            repository: get("GITHUB_REPOSITORY").as_deref().and_then(RepoRef::parse),
            api_url: get("GITHUB_API_URL"),
            server_url: get("GITHUB_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            output_file: get("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Append `name=value` lines to the step output file, if the runner
    /// provided one.
    pub fn set_outputs(&self, outputs: &[(&str, &str)]) -> io::Result<()> {
        let Some(path) = &self.output_file else {
            return Ok(());
        };
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        for (name, value) in outputs {
            writeln!(file, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Environment variable the runner uses for a step input:
/// `update-file` becomes `INPUT_UPDATE-FILE`.
#[must_use]
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Collect step inputs from `INPUT_*` variables. Empty values are absent.
pub fn inputs_from_lookup<F>(lookup: F) -> UploadInputs
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(&input_variable(name)).filter(|v| !v.trim().is_empty());
    UploadInputs {
        file: get("file"),
        owner: get("owner"),
        repo: get("repo"),
        token: get("token"),
        message: get("message"),
        path: get("path"),
        branch: get("branch"),
        update_file: get("update-file"),
    }
}

/// [`inputs_from_lookup`] over the process environment.
#[must_use]
pub fn inputs_from_env() -> UploadInputs {
    inputs_from_lookup(|key| std::env::var(key).ok())
}

/// Escape a message for use as workflow-command data.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` command that marks the step as failed.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Mark the step failed: write the `::error::` command to `out`.
pub fn report_failure<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", error_command(message))?;
    out.flush()
}
