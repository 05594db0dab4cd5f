//! Git queries used to locate the repository, the tracking branch, and the
//! hosting-service coordinates of its remote.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TriggerError};
use crate::runner::CommandRunner;

const EXPECTED_HOST: &str = "github.com";
const SERVICE: &str = "github";

/// Hosting-service coordinates parsed from a remote push URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub service: &'static str,
    pub organization: String,
    pub repo_name: String,
}

/// `remote/branch` pair from `@{upstream}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingBranch {
    pub remote: String,
    pub branch: String,
}

// SSH-style remote: (user@)?host:org/repo(.git)?
static REMOTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<user>[^@]+)@)?(?P<host>[^:]+):(?P<org>[^/]+)/(?P<repo>.+?)(?:\.git)?$")
        .expect("remote URL pattern is valid")
});

static TRACKING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<remote>[^/]+)/(?P<branch>[^/]+)$").expect("tracking branch pattern is valid")
});

/// Parses an SSH-style push URL into [`RemoteInfo`]. Only `github.com`
/// remotes are accepted.
pub fn parse_remote_url(url: &str) -> Result<RemoteInfo> {
    let caps = REMOTE_URL
        .captures(url)
        .filter(|caps| &caps["host"] == EXPECTED_HOST)
        .ok_or_else(|| TriggerError::Parse(format!("could not parse remote URL {url}")))?;
    Ok(RemoteInfo {
        service: SERVICE,
        organization: caps["org"].to_string(),
        repo_name: caps["repo"].to_string(),
    })
}

pub fn parse_tracking_branch(raw: &str) -> Result<TrackingBranch> {
    let caps = TRACKING.captures(raw).ok_or_else(|| {
        TriggerError::Parse(format!("cannot parse remote tracking branch {raw}"))
    })?;
    Ok(TrackingBranch {
        remote: caps["remote"].to_string(),
        branch: caps["branch"].to_string(),
    })
}

/// Repository root from `git rev-parse --show-toplevel`.
pub async fn toplevel(runner: &dyn CommandRunner) -> Result<PathBuf> {
    let out = runner
        .run("git", &["rev-parse", "--show-toplevel"], None)
        .await?;
    Ok(PathBuf::from(out))
}

/// The upstream branch the current branch tracks, as `remote/branch`.
pub async fn tracking_branch(runner: &dyn CommandRunner) -> Result<TrackingBranch> {
    let out = runner
        .run(
            "git",
            &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{upstream}"],
            None,
        )
        .await?;
    parse_tracking_branch(&out)
}

pub async fn remote_push_url(runner: &dyn CommandRunner, remote: &str) -> Result<String> {
    runner
        .run("git", &["remote", "get-url", "--push", remote], None)
        .await
}

/// Full hash of the current commit.
pub async fn head_commit(runner: &dyn CommandRunner) -> Result<String> {
    runner.run("git", &["rev-parse", "HEAD"], None).await
}
