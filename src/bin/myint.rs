/*
 * myint.rs - Test helper for smallsh
 *
 * usage: myint <n>
 * Sleeps for <n> seconds and sends SIGINT to itself. Dies with signal 2
 * unless SIGINT was left caught or ignored across exec.
 */

use nix::sys::signal::{self, Signal};
use nix::unistd::getpid;
use std::env;
use std::process;
use std::thread;
use std::time::Duration;

fn main() {
    let secs = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        _ => {
            eprintln!("Usage: myint <n>");
            process::exit(1);
        }
    };
    thread::sleep(Duration::from_secs(secs));

    if let Err(err) = signal::kill(getpid(), Signal::SIGINT) {
        eprintln!("kill (int) error: {}", err);
        process::exit(1);
    }
    // still alive: SIGINT was not at its default disposition
    thread::sleep(Duration::from_millis(100));
    process::exit(0);
}
