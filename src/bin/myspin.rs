/*
 * myspin.rs - Test helper for smallsh
 *
 * usage: myspin <n>
 * Sleeps for <n> seconds, then exits with status 0.
 */

use std::env;
use std::process;
use std::thread;
use std::time::Duration;

fn main() {
    let secs = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        _ => {
            eprintln!("Usage: myspin <n>");
            process::exit(1);
        }
    };
    thread::sleep(Duration::from_secs(secs));
}
