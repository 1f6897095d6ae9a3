use std::fmt::Display;
use std::process;

pub fn print_usage() -> ! {
    println!("Usage: smallsh [-hvp]");
    println!("   -h   Print this help message");
    println!("   -v   Enable verbose (debug) logging");
    println!("   -p   Do not print a command prompt");
    process::exit(1);
}

pub fn fatal(err: impl Display) -> ! {
    log::error!("{}", err);
    eprintln!("smallsh: {}", err);
    process::exit(1);
}
