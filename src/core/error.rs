//! Centralised error types used across the crate.

use std::{io, process::ExitStatus};

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("period must be a finite, non-negative number of seconds, got {0}")]
    InvalidPeriod(f64),
    #[error("frame limit must be at least 1")]
    ZeroFrameLimit,
    #[error("invalid number of seconds `{0}`")]
    BadSeconds(String),
}

/// Top-level error type bubbled up by public APIs.
///
/// Failures of the watched function never show up here; they are drawn
/// into the frame instead.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("command `{cmd}` exited with {status}")]
    Command { cmd: String, status: ExitStatus },
}
