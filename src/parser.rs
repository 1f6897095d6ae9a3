use thiserror::Error;

/// Maximum number of arguments accepted for a single command.
pub const MAXARGS: usize = 512;

/// Represents a parsed command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// Command and its arguments.
    pub argv: Vec<String>,
    /// Input redirection file, if any.
    pub infile: Option<String>,
    /// Output redirection file, if any.
    pub outfile: Option<String>,
    /// Set when an `&` token was present.
    pub background: bool,
}

impl Command {
    /// Creates a new, empty command.
    pub fn new() -> Self {
        Command::default()
    }

    /// Blank lines and comments (first word starting with `#`) do nothing.
    pub fn is_noop(&self) -> bool {
        match self.argv.first() {
            None => true,
            Some(first) => first.starts_with('#'),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing file name after '{0}'")]
    MissingRedirectTarget(&'static str),
    #[error("too many arguments (max {})", MAXARGS)]
    TooManyArguments,
}

/// Parses one input line into a `Command`.
///
/// Tokens are separated by spaces and newlines only; there is no quoting or
/// expansion. `<` and `>` consume the following token as a file name,
/// `&` marks the command for background execution, and every other token
/// is appended to `argv`. A line whose first token begins with `#` is kept
/// verbatim as a comment.
pub fn parse_command_line(cmdline: &str) -> Result<Command, ParseError> {
    let mut cmd = Command::new();
    let mut iter = tokenize(cmdline).peekable();

    if iter.peek().is_some_and(|first| first.starts_with('#')) {
        cmd.argv = iter.map(str::to_string).collect();
        return Ok(cmd);
    }

    while let Some(token) = iter.next() {
        match token {
            "<" => {
                let file = iter.next().ok_or(ParseError::MissingRedirectTarget("<"))?;
                cmd.infile = Some(file.to_string());
            }
            ">" => {
                let file = iter.next().ok_or(ParseError::MissingRedirectTarget(">"))?;
                cmd.outfile = Some(file.to_string());
            }
            "&" => cmd.background = true,
            _ => {
                if cmd.argv.len() >= MAXARGS {
                    return Err(ParseError::TooManyArguments);
                }
                cmd.argv.push(token.to_string());
            }
        }
    }
    Ok(cmd)
}

/// Splits the input on spaces and line terminators. Tabs and other
/// whitespace stay part of the token.
fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split([' ', '\n']).filter(|token| !token.is_empty())
}
