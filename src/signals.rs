use nix::libc::STDOUT_FILENO;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use signal_hook::consts::signal::{SIGINT, SIGTSTP};
use signal_hook::low_level;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

const ENTER_FG_ONLY: &str = "\nEntering foreground-only mode (& is now ignored)\n";
const EXIT_FG_ONLY: &str = "\nExiting foreground-only mode\n";

/// Foreground-only mode. Written only by the SIGTSTP handler, read by the
/// dispatcher.
static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

/// True while `&` is being ignored.
pub fn foreground_only() -> bool {
    FOREGROUND_ONLY.load(Ordering::SeqCst)
}

/// Flips the mode and returns the notice for the new state.
fn flip_mode() -> &'static str {
    if FOREGROUND_ONLY.fetch_xor(true, Ordering::SeqCst) {
        EXIT_FG_ONLY
    } else {
        ENTER_FG_ONLY
    }
}

/// Runs in signal context: no allocation, no locks, a single write(2).
fn handle_sigtstp() {
    let _ = nix::unistd::write(STDOUT_FILENO, flip_mode().as_bytes());
}

/// Installs the interpreter's handlers:
/// - SIGINT: caught and ignored, so Ctrl-C never kills the shell.
/// - SIGTSTP: (Ctrl-Z) toggles foreground-only mode.
///
/// Both are caught rather than ignored so that exec restores the default
/// disposition in children.
pub fn install_signal_handlers() -> io::Result<()> {
    // SAFETY: neither action allocates or locks; SIGTSTP only touches an
    // atomic and calls write(2).
    unsafe {
        low_level::register(SIGINT, || {})?;
        low_level::register(SIGTSTP, handle_sigtstp)?;
    }
    log::debug!("installed SIGINT and SIGTSTP handlers");
    Ok(())
}

/// Sets the dispositions a child should exec with. Called between fork and
/// exec.
///
/// Foreground children get the default SIGINT so Ctrl-C stops them.
/// Background children share the terminal's process group, so they ignore
/// it. Both ignore SIGTSTP, which belongs to the shell.
pub fn reset_child_signals(background: bool) -> nix::Result<()> {
    let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
    let on_int = if background { &ignore } else { &default };
    unsafe {
        sigaction(Signal::SIGINT, on_int)?;
        sigaction(Signal::SIGTSTP, &ignore)?;
    }
    Ok(())
}
