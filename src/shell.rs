use crate::builtins::{handle_builtin, Builtin};
use crate::error::ShellError;
use crate::exec::execute_command;
use crate::jobs::{report_finished_jobs, JobList};
use crate::parser::{parse_command_line, Command};
use crate::signals::foreground_only;
use crate::status::ForegroundStatus;
use std::io::{self, BufRead, ErrorKind, Write};

/// Global prompt string.
pub static PROMPT: &str = ": ";

/// Longest input line, in characters. Anything past it is dropped.
pub const MAXLINE: usize = 2048;

/// Runs the main shell loop: reports finished background jobs, prints the
/// prompt (if enabled), reads input, parses it, and evaluates commands.
///
/// Returns on `exit` or end of input.
pub fn run_shell(emit_prompt: bool) -> Result<(), ShellError> {
    let mut status = ForegroundStatus::new();
    let mut job_list = JobList::new();
    let stdin = io::stdin();

    loop {
        report_finished_jobs(&mut job_list);

        if emit_prompt {
            print!("{}", PROMPT);
            let _ = io::stdout().flush();
        }

        let mut cmdline = String::new();
        match stdin.lock().read_line(&mut cmdline) {
            Ok(0) => break, // End-of-file (Ctrl-D)
            Ok(_) => {}
            // the line is consumed and dropped; arguments are always UTF-8
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                eprintln!("smallsh: input is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(ShellError::Input(e)),
        }
        truncate_line(&mut cmdline, MAXLINE);
        log::trace!("received command: {}", cmdline.trim_end());

        let cmd = match parse_command_line(&cmdline) {
            Ok(cmd) => cmd,
            Err(e) => {
                log::debug!("rejected {:?}: {:?}", cmdline.trim_end(), e);
                eprintln!("smallsh: {}", e);
                continue;
            }
        };
        if eval(&cmd, &mut status, &mut job_list)? == Builtin::Exit {
            break;
        }
    }

    if !job_list.is_empty() {
        log::info!(
            "leaving {} background job(s) running: {:?}",
            job_list.len(),
            job_list.pids().map(|pid| pid.as_raw()).collect::<Vec<_>>()
        );
    }
    Ok(())
}

/// Dispatches one parsed command. Comments and blank lines do nothing,
/// built-ins run in the shell, everything else is forked. A trailing `&`
/// is honoured unless foreground-only mode is on.
fn eval(
    cmd: &Command,
    status: &mut ForegroundStatus,
    job_list: &mut JobList,
) -> Result<Builtin, ShellError> {
    if cmd.is_noop() {
        return Ok(Builtin::Handled);
    }
    match handle_builtin(cmd, status) {
        Builtin::External => {}
        handled => return Ok(handled),
    }

    let background = cmd.background && !foreground_only();
    if cmd.background && !background {
        log::debug!("foreground-only mode, running {:?} in the foreground", cmd.argv);
    }
    execute_command(cmd, background, status, job_list)?;
    Ok(Builtin::External)
}

/// Keeps at most `max` characters of `line`.
fn truncate_line(line: &mut String, max: usize) {
    if let Some((idx, _)) = line.char_indices().nth(max) {
        line.truncate(idx);
    }
}
