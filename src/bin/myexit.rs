/*
 * myexit.rs - Test helper for smallsh
 *
 * usage: myexit <code>
 * Exits immediately with status <code>.
 */

use std::env;
use std::process;

fn main() {
    match env::args().nth(1).map(|arg| arg.parse::<i32>()) {
        Some(Ok(code)) => process::exit(code),
        _ => {
            eprintln!("Usage: myexit <code>");
            process::exit(1);
        }
    }
}
