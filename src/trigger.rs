//! The trigger pipeline: gather inputs from git and the local filesystem,
//! validate the config, and fire the build request.

use std::path::Path;

use crate::api::CircleCiApi;
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::{auth, config, git};

/// Runs the full pipeline and returns the URL of the triggered build.
///
/// Everything ambient is injected: subprocesses go through `runner`, the
/// HTTP call through `api`, and the credentials file is looked up under
/// `home`.
pub async fn run(
    runner: &dyn CommandRunner,
    api: &dyn CircleCiApi,
    home: &Path,
) -> Result<String> {
    let root = git::toplevel(runner).await?;
    tracing::debug!(root = %root.display(), "resolved repository root");

    config::validate_config(runner, &root).await?;
    let config_yml = config::read_config(&root).await?;

    let tracking = git::tracking_branch(runner).await?;
    tracing::debug!(remote = %tracking.remote, branch = %tracking.branch, "resolved tracking branch");

    let remote_url = git::remote_push_url(runner, &tracking.remote).await?;
    let remote = git::parse_remote_url(&remote_url)?;
    let revision = git::head_commit(runner).await?;
    let token = auth::load_auth_token(home).await?;

    let build = api
        .trigger_build(&remote, &tracking.branch, &revision, &token, &config_yml)
        .await?;
    tracing::info!(build_url = %build.build_url, "build triggered");
    Ok(build.build_url)
}
