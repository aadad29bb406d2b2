//! merge-gate CLI entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use merge_gate::config::{RunConfig, load_config};
use merge_gate::platform::GitHubService;
use merge_gate::run::run;
use merge_gate::tracker::BugzillaClient;

/// Evaluate merge-gating release policy for open pull requests
#[derive(Debug, Parser)]
#[command(name = "merge-gate", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Repository to evaluate, overriding the config file
    #[arg(long, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// Report intended changes without performing milestone mutations
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };

    if let Some(repo) = &cli.repo {
        let (owner, name) = repo
            .split_once('/')
            .context("--repo must be in OWNER/REPO form")?;
        config.owner = owner.to_string();
        config.repo = name.to_string();
    }
    if cli.dry_run {
        config.dry_run = true;
    }
    config.validate()?;

    let token =
        std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN environment variable is not set")?;
    let bugzilla_key = std::env::var("BUGZILLA_API_KEY").ok();

    let host = GitHubService::new(
        &token,
        config.owner.clone(),
        config.repo.clone(),
        config.github_host.as_deref(),
    )?;
    let tracker = BugzillaClient::new(config.bugzilla_url(), bugzilla_key)?;

    run(&host, &tracker, &config).await?;
    Ok(())
}
