use crate::error::{Result, ReviewError};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::Command;
use tracing::debug;

pub const SVN_COMMAND: &str = "svn";

/// Anything that can produce `svn log -v --xml` text for a location.
pub trait LogSource {
    fn fetch(&self, location: &str, revisions: Option<&str>) -> Result<String>;
}

/// Runs the svn command line client.
#[derive(Debug, Clone)]
pub struct SvnLog {
    program: String,
    progress: bool,
}

impl Default for SvnLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SvnLog {
    pub fn new() -> Self {
        Self::with_program(SVN_COMMAND)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            progress: false,
        }
    }

    /// Show a spinner on stderr while svn runs.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args<'a>(location: &'a str, revisions: Option<&'a str>) -> Vec<&'a str> {
        let mut args = vec!["log", "-v", "--xml"];
        if let Some(rev) = revisions {
            args.push("-r");
            args.push(rev);
        }
        // Everything after `--` is a target, even if it starts with a dash.
        args.push("--");
        args.push(location);
        args
    }

    fn spinner(&self, location: &str) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading svn log of {location}..."));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }
}

impl LogSource for SvnLog {
    fn fetch(&self, location: &str, revisions: Option<&str>) -> Result<String> {
        let args = Self::args(location, revisions);
        debug!(program = %self.program, ?args, "running log source");

        let pb = self.spinner(location);
        let output = Command::new(&self.program).args(&args).output();
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let output = output.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReviewError::LogSourceNotFound {
                    program: self.program.clone(),
                }
            } else {
                ReviewError::LogSourceSpawn {
                    program: self.program.clone(),
                    source: e,
                }
            }
        })?;

        if !output.status.success() {
            return Err(ReviewError::LogSourceFailed {
                exit_code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(ReviewError::LogSourceEmpty {
                location: location.to_string(),
            });
        }

        debug!(bytes = text.len(), "log source finished");
        Ok(text)
    }
}
