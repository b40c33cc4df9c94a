// Upload step binary
//
// Runs as a GitHub Actions step: inputs arrive as INPUT_* variables, and
// flags given by hand take precedence. Failures are reported with an
// ::error:: command and a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use gh_upload_file::actions::{self, ActionContext};
use gh_upload_file::{FsSource, GitHubClient, UploadConfig, UploadInputs, Uploader};
use log::error;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gh-upload-file",
    about = "Commit a local file to a GitHub repository branch"
)]
struct Cli {
    /// Local file to upload, relative to the working directory
    #[arg(long)]
    file: Option<String>,

    /// Repository owner (defaults to the owner in GITHUB_REPOSITORY)
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (defaults to the name in GITHUB_REPOSITORY)
    #[arg(long)]
    repo: Option<String>,

    /// Token used to authenticate against the API
    #[arg(long)]
    token: Option<String>,

    /// Commit message
    #[arg(long)]
    message: Option<String>,

    /// Destination path inside the repository
    #[arg(long)]
    path: Option<String>,

    /// Target branch, created from the default branch when missing
    #[arg(long)]
    branch: Option<String>,

    /// Repository path whose current SHA is sent with the write
    #[arg(long = "update-file")]
    update_file: Option<String>,
}

impl From<Cli> for UploadInputs {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.file,
            owner: cli.owner,
            repo: cli.repo,
            token: cli.token,
            message: cli.message,
            path: cli.path,
            branch: cli.branch,
            update_file: cli.update_file,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let ctx = ActionContext::from_env();

    match run(cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            if let Err(io) = actions::report_failure(&mut std::io::stdout(), &e.to_string()) {
                error!("Could not report failure: {io}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, ctx: &ActionContext) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let inputs = UploadInputs::from(cli).or(actions::inputs_from_env());
    let config = UploadConfig::resolve(inputs, ctx, &cwd)?;

    let mut builder = GitHubClient::builder().personal_token(config.token.clone());
    if let Some(api_url) = &ctx.api_url {
        builder = builder.base_uri(api_url.clone());
    }
    let client = builder.build()?;

    let outcome = Uploader::new(client, FsSource).run(&config).await?;

    let mut outputs = Vec::new();
    if let Some(sha) = outcome.commit_sha() {
        outputs.push(("commit-sha", sha));
    }
    if let Some(sha) = outcome.content_sha() {
        outputs.push(("content-sha", sha));
    }
    if let Err(e) = ctx.set_outputs(&outputs) {
        log::warn!("Could not write step outputs: {e}");
    }

    Ok(())
}
