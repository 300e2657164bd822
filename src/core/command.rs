//! Shell commands as samplers, plus a fail-on-nonzero `shell` helper.

use std::process::{Command, ExitStatus, Output};

use anyhow::anyhow;
use tracing::{debug, info};

use crate::core::{error::WatchError, sample::Sampler};

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(cmd);
    c
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(cmd);
    c
}

/// Run `cmd` through the platform shell with inherited stdio.
///
/// A non-zero exit is an error.
pub fn shell(cmd: &str) -> Result<ExitStatus, WatchError> {
    info!(cmd, "shell");
    let status = shell_command(cmd).status()?;
    if status.success() {
        Ok(status)
    } else {
        Err(WatchError::Command {
            cmd: cmd.to_owned(),
            status,
        })
    }
}

/// Samples the combined output of a shell command.
#[derive(Debug, Clone)]
pub struct CommandSampler {
    cmd: String,
}

impl CommandSampler {
    #[must_use]
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }

    /// Join argv-style words into one shell line, like `watch(1)` does.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let line = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(line)
    }

    #[inline]
    #[must_use]
    pub fn command(&self) -> &str {
        &self.cmd
    }
}

fn combined(out: &Output) -> String {
    let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
    if !out.stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(&out.stderr));
    }
    text
}

impl Sampler for CommandSampler {
    fn sample(&mut self) -> anyhow::Result<String> {
        let out = shell_command(&self.cmd).output()?;
        debug!(cmd = %self.cmd, status = %out.status, bytes = out.stdout.len(), "command sampled");
        let text = combined(&out);
        if out.status.success() {
            Ok(text)
        } else {
            Err(anyhow!("command `{}` exited with {}\n\n{text}", self.cmd, out.status))
        }
    }
}
