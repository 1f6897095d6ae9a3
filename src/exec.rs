use crate::error::ShellError;
use crate::jobs::JobList;
use crate::parser::Command;
use crate::redirect::Redirections;
use crate::signals::reset_child_signals;
use crate::status::{ForegroundStatus, Outcome};
use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{execvp, fork, ForkResult, Pid};
use std::convert::Infallible;
use std::ffi::{CString, NulError};
use thiserror::Error;

/// Exit status of a child whose program could not be started.
const EXEC_FAILED: i32 = 2;

#[derive(Debug, Error)]
enum ExecError {
    #[error("argument contains a NUL byte")]
    Nul(#[from] NulError),
    #[error("{}", .0.desc())]
    Exec(#[from] Errno),
}

/// Executes an external command, in the background when `background` is
/// set and in the foreground otherwise.
///
/// - Foreground: blocks until the child terminates and records the result
///   in `status`. A child killed by a signal is announced right away.
/// - Background: registers the child in `job_list` and returns at once.
///
/// Only a failed fork is reported as an error.
pub fn execute_command(
    cmd: &Command,
    background: bool,
    status: &mut ForegroundStatus,
    job_list: &mut JobList,
) -> Result<(), ShellError> {
    if background {
        run_background(cmd, job_list)
    } else {
        run_foreground(cmd, status)
    }
}

fn run_foreground(cmd: &Command, status: &mut ForegroundStatus) -> Result<(), ShellError> {
    let child = spawn(cmd, false, Redirections::foreground(cmd))?;
    log::debug!("started foreground pid {}: {:?}", child, cmd.argv);

    if let Some(outcome) = wait_fg(child) {
        log::debug!("foreground pid {} finished: {}", child, outcome);
        status.record(outcome);
        if let Outcome::Signaled(_) = outcome {
            println!("{}", outcome);
        }
    }
    Ok(())
}

fn run_background(cmd: &Command, job_list: &mut JobList) -> Result<(), ShellError> {
    let child = spawn(cmd, true, Redirections::background(cmd))?;
    log::debug!("started background pid {}: {:?}", child, cmd.argv);

    if !job_list.add_job(child) {
        log::warn!("job table is full, pid {} will not be tracked", child);
    }
    println!("background pid is {}", child);
    Ok(())
}

/// Forks; the child sets up signals and redirections and execs `cmd`.
fn spawn(cmd: &Command, background: bool, redir: Redirections<'_>) -> Result<Pid, ShellError> {
    // SAFETY: the interpreter is single-threaded.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => run_child(&cmd.argv, background, redir),
        Ok(ForkResult::Parent { child }) => Ok(child),
        Err(e) => Err(ShellError::Fork(e)),
    }
}

fn run_child(argv: &[String], background: bool, redir: Redirections<'_>) -> ! {
    if let Err(e) = reset_child_signals(background) {
        eprintln!("sigaction: {}", e.desc());
    }
    if let Err(e) = redir.apply() {
        eprintln!("{}", e);
        exit_child(e.exit_code());
    }
    let e = match exec_program(argv) {
        Ok(never) => match never {},
        Err(e) => e,
    };
    let name = argv.first().map(String::as_str).unwrap_or_default();
    eprintln!("{}: {}", name, e);
    exit_child(EXEC_FAILED)
}

/// Replaces the process image. Only returns on failure.
fn exec_program(argv: &[String]) -> Result<Infallible, ExecError> {
    let args = argv
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;
    let program = args.first().ok_or(Errno::ENOENT)?;
    execvp(program, &args).map_err(ExecError::from)
}

/// Leaves a forked child without running the parent's exit handlers.
fn exit_child(code: i32) -> ! {
    // SAFETY: _exit(2) is async-signal-safe and skips atexit handlers and
    // stdio flushing inherited from the parent.
    unsafe { nix::libc::_exit(code) }
}

/// Blocks until `pid` terminates.
fn wait_fg(pid: Pid) -> Option<Outcome> {
    loop {
        match waitpid(pid, None) {
            Ok(status) => {
                if let Some((_, outcome)) = Outcome::from_wait_status(status) {
                    return Some(outcome);
                }
            }
            Err(Errno::EINTR) => continue,
            Err(e) => {
                eprintln!("wait: {}", e.desc());
                return None;
            }
        }
    }
}
