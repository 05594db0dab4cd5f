//! The local CircleCI configuration file and its validation.

use std::path::Path;

use crate::error::Result;
use crate::runner::CommandRunner;

pub const CONFIG_PATH: &str = ".circleci/config.yml";

/// Raw bytes of `.circleci/config.yml`, passed verbatim to the API.
pub async fn read_config(root: &Path) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(root.join(CONFIG_PATH)).await?;
    Ok(bytes)
}

/// Runs `circleci config validate` in the repository root. A non-zero exit
/// aborts the pipeline before any HTTP request is made.
pub async fn validate_config(runner: &dyn CommandRunner, root: &Path) -> Result<()> {
    runner
        .run("circleci", &["config", "validate"], Some(root))
        .await?;
    Ok(())
}
