mod builtins;
mod error;
mod exec;
mod jobs;
mod parser;
mod redirect;
mod shell;
mod signals;
mod status;
mod utils;

use error::ShellError;
use std::env;

fn main() {
    // Parse command-line arguments.
    let mut emit_prompt = true;
    let mut verbose = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" => utils::print_usage(),
            "-v" => verbose = true,
            "-p" => emit_prompt = false,
            _ => {}
        }
    }

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Install signal handlers.
    if let Err(e) = signals::install_signal_handlers() {
        utils::fatal(ShellError::Signal(e));
    }

    // Run the main shell loop with the options.
    if let Err(e) = shell::run_shell(emit_prompt) {
        utils::fatal(e);
    }
}
