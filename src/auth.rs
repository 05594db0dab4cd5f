//! Auth token from the CircleCI CLI credentials file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TriggerError};

const CLI_CONFIG_PATH: &str = ".circleci/cli.yml";

// Typed deserialization only; arbitrary YAML tags are rejected.
#[derive(Debug, Deserialize)]
struct CliConfig {
    #[serde(default)]
    token: Option<String>,
}

/// Reads the `token` field from `<home>/.circleci/cli.yml`.
pub async fn load_auth_token(home: &Path) -> Result<String> {
    let path = home.join(CLI_CONFIG_PATH);
    let raw = tokio::fs::read_to_string(&path).await?;
    let config: CliConfig = serde_yaml::from_str(&raw)
        .map_err(|e| TriggerError::Parse(format!("invalid CLI config {}: {e}", path.display())))?;
    match config.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(TriggerError::Parse(format!(
            "no token in {}",
            path.display()
        ))),
    }
}
