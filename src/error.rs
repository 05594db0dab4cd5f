use std::io;

/// Errors from the trigger pipeline.
///
/// Nothing is recovered locally; every variant aborts the run and surfaces
/// to the shell through a non-zero exit.
#[derive(thiserror::Error, Debug)]
pub enum TriggerError {
    #[error("{program} exited with code {code:?}: {stderr}")]
    Process {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("CircleCI API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, TriggerError>;
