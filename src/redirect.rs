use crate::parser::Command;
use nix::fcntl::{open, OFlag};
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::sys::stat::Mode;
use nix::unistd::{close, dup2};
use std::os::unix::io::RawFd;
use thiserror::Error;

/// Where background jobs read from and write to unless redirected.
pub const NULL_DEVICE: &str = "/dev/null";

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("cannot open {path} for input: {source}")]
    OpenInput { path: String, source: nix::Error },
    #[error("cannot open {path} for output: {source}")]
    OpenOutput { path: String, source: nix::Error },
    #[error("{path}: {source}")]
    Rebind { path: String, source: nix::Error },
}

impl RedirectError {
    /// Exit status used by the child when redirection fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            RedirectError::OpenInput { .. } | RedirectError::OpenOutput { .. } => 1,
            RedirectError::Rebind { .. } => 2,
        }
    }
}

/// The files a child's stdin/stdout should be bound to. `None` leaves the
/// inherited stream alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirections<'a> {
    pub input: Option<&'a str>,
    pub output: Option<&'a str>,
}

impl<'a> Redirections<'a> {
    /// Only the redirections the user asked for.
    pub fn foreground(cmd: &'a Command) -> Self {
        Redirections {
            input: cmd.infile.as_deref(),
            output: cmd.outfile.as_deref(),
        }
    }

    /// Background jobs never touch the terminal: missing paths become the
    /// null device.
    pub fn background(cmd: &'a Command) -> Self {
        Redirections {
            input: Some(cmd.infile.as_deref().unwrap_or(NULL_DEVICE)),
            output: Some(cmd.outfile.as_deref().unwrap_or(NULL_DEVICE)),
        }
    }

    /// Rebinds stdin/stdout of the calling process. Only meant to run in a
    /// freshly forked child.
    pub fn apply(&self) -> Result<(), RedirectError> {
        if let Some(path) = self.input {
            let fd = open(path, OFlag::O_RDONLY, Mode::empty()).map_err(|source| {
                RedirectError::OpenInput {
                    path: path.to_string(),
                    source,
                }
            })?;
            rebind(fd, STDIN_FILENO, path)?;
        }
        if let Some(path) = self.output {
            let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC;
            let mode = Mode::from_bits_truncate(0o644);
            let fd = open(path, flags, mode).map_err(|source| RedirectError::OpenOutput {
                path: path.to_string(),
                source,
            })?;
            rebind(fd, STDOUT_FILENO, path)?;
        }
        Ok(())
    }
}

fn rebind(fd: RawFd, target: RawFd, path: &str) -> Result<(), RedirectError> {
    if fd == target {
        return Ok(());
    }
    dup2(fd, target).map_err(|source| RedirectError::Rebind {
        path: path.to_string(),
        source,
    })?;
    let _ = close(fd);
    Ok(())
}
