use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;
use nix::unistd::Pid;
use std::fmt;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited(i32),
    Signaled(Signal),
}

impl Outcome {
    /// Classifies a wait result. Returns `None` for anything that is not a
    /// termination (still running, stopped, continued).
    pub fn from_wait_status(status: WaitStatus) -> Option<(Pid, Outcome)> {
        match status {
            WaitStatus::Exited(pid, code) => Some((pid, Outcome::Exited(code))),
            WaitStatus::Signaled(pid, sig, _) => Some((pid, Outcome::Signaled(sig))),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exited(code) => write!(f, "exit value {}", code),
            Outcome::Signaled(sig) => write!(f, "terminated by signal {}", *sig as i32),
        }
    }
}

/// Outcome of the most recent foreground command, as reported by `status`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundStatus {
    last: Option<Outcome>,
}

impl ForegroundStatus {
    pub fn new() -> Self {
        ForegroundStatus::default()
    }

    /// Records the result of a reaped foreground child.
    pub fn record(&mut self, outcome: Outcome) {
        self.last = Some(outcome);
    }
}

impl fmt::Display for ForegroundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(outcome) => write!(f, "{}", outcome),
            None => f.write_str("exit status 0"),
        }
    }
}
