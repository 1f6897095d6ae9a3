/*
 * mystop.rs - Test helper for smallsh
 *
 * usage: mystop <n>
 * Sleeps for <n> seconds and sends SIGTSTP to its parent, the way the
 * terminal would on Ctrl-Z.
 */

use nix::sys::signal::{self, Signal};
use nix::unistd::getppid;
use std::env;
use std::process;
use std::thread;
use std::time::Duration;

fn main() {
    let secs = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        _ => {
            eprintln!("Usage: mystop <n>");
            process::exit(1);
        }
    };
    thread::sleep(Duration::from_secs(secs));

    if let Err(err) = signal::kill(getppid(), Signal::SIGTSTP) {
        eprintln!("kill (tstp) error: {}", err);
        process::exit(1);
    }
}
