//! CircleCI v1.1 API client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Result, TriggerError};
use crate::git::RemoteInfo;

const CIRCLECI_API: &str = "https://circleci.com/api/v1.1";

/// Fields consumed from a successful trigger response.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggeredBuild {
    pub build_url: String,
}

#[async_trait]
pub trait CircleCiApi: Send + Sync {
    /// POSTs a build trigger for `branch` at `revision`, substituting the
    /// supplied config for the committed one. Basic auth with the token as
    /// username and an empty password.
    async fn trigger_build(
        &self,
        remote: &RemoteInfo,
        branch: &str,
        revision: &str,
        token: &str,
        config: &[u8],
    ) -> Result<TriggeredBuild>;
}

fn project_url(remote: &RemoteInfo, branch: &str) -> String {
    format!(
        "{CIRCLECI_API}/project/{}/{}/{}/tree/{}",
        remote.service, remote.organization, remote.repo_name, branch
    )
}

pub struct HttpCircleCiClient {
    client: reqwest::Client,
}

impl HttpCircleCiClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CircleCiApi for HttpCircleCiClient {
    async fn trigger_build(
        &self,
        remote: &RemoteInfo,
        branch: &str,
        revision: &str,
        token: &str,
        config: &[u8],
    ) -> Result<TriggeredBuild> {
        let url = project_url(remote, branch);
        let config = std::str::from_utf8(config)
            .map_err(|_| TriggerError::Parse("config.yml is not valid UTF-8".into()))?;

        tracing::debug!(%url, revision, "triggering build");
        let resp = self
            .client
            .post(&url)
            .basic_auth(token, Some(""))
            .form(&[
                ("revision", revision),
                ("notify", "false"),
                ("config", config),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TriggerError::Api { status, body });
        }

        Ok(resp.json().await?)
    }
}
