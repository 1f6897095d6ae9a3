use crate::parser::Command;
use crate::status::ForegroundStatus;
use std::env;
use std::path::PathBuf;

/// What the main loop should do after a built-in check.
#[derive(Debug, PartialEq, Eq)]
pub enum Builtin {
    /// Not a built-in; run it as an external program.
    External,
    /// Handled here.
    Handled,
    /// `exit`: leave the main loop.
    Exit,
}

/// Checks if the command is a built-in command and, if so, executes it.
/// Supported built-ins are "exit", "cd" and "status".
pub fn handle_builtin(cmd: &Command, status: &ForegroundStatus) -> Builtin {
    let Some(name) = cmd.argv.first() else {
        return Builtin::External;
    };
    match name.as_str() {
        "exit" => Builtin::Exit,
        "cd" => {
            change_directory(cmd.argv.get(1).map(String::as_str));
            Builtin::Handled
        }
        "status" => {
            println!("{}", status);
            Builtin::Handled
        }
        _ => Builtin::External,
    }
}

/// Changes the working directory to `dir`, or to the home directory when
/// no argument is given. Failures leave the directory unchanged and are
/// not reported to the user.
fn change_directory(dir: Option<&str>) {
    let Some(target) = cd_target(dir) else {
        log::debug!("cd: no home directory");
        return;
    };
    if let Err(e) = env::set_current_dir(&target) {
        log::debug!("cd {}: {}", target.display(), e);
    }
}

fn cd_target(dir: Option<&str>) -> Option<PathBuf> {
    match dir {
        Some(dir) => Some(PathBuf::from(dir)),
        None => env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs_next::home_dir),
    }
}
