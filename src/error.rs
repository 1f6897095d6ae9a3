use std::io;
use thiserror::Error;

/// Failures that end the interpreter itself. Everything that goes wrong
/// inside a child stays in the child.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] io::Error),
    #[error("fork: {0}")]
    Fork(#[source] nix::Error),
    #[error("error reading input: {0}")]
    Input(#[source] io::Error),
}
