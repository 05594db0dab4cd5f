mod api;
mod auth;
mod config;
mod error;
mod git;
mod runner;
mod trigger;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::api::HttpCircleCiClient;
use crate::runner::ProcessRunner;

/// Trigger a CircleCI build using the local .circleci/config.yml, without
/// committing or pushing it.
///
/// Requires a git checkout with a remote tracking branch on github.com and
/// a `circleci` CLI set up with a valid auth token.
#[derive(Parser)]
#[command(name = "cci-trigger", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cci_trigger=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")?;

    let home = dirs::home_dir().context("could not determine home directory")?;

    let runner = ProcessRunner;
    let api = HttpCircleCiClient::new(http_client);

    let build_url = trigger::run(&runner, &api, &home).await?;
    println!("Build triggered as {build_url}");
    Ok(())
}
