//! Line parsing for the interpreter.
//!
//! - `tokenizer` turns a raw line into validated tokens, splitting `>` out of words.
//! - `redirection_parser` pulls the single output target off a token stream.
//! - `command_parser` splits `&`-separated lines into independent commands.
use crate::error::ShellResult;

mod command_parser;
mod redirection_parser;
mod tokenizer;

pub use command_parser::{contains_group_separator, normalize_group_separators, split_group};
pub use redirection_parser::extract_redirection;
pub use tokenizer::{parse_line, MAX_TOKENS};

pub const REDIRECT_OPERATOR: &str = ">";
pub const GROUP_SEPARATOR: char = '&';
pub(crate) const GROUP_SEPARATOR_TOKEN: &str = "&";

/// One command ready for dispatch: argv plus an optional output target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub args: Vec<String>,
    pub output: Option<String>,
}

impl CommandSpec {
    pub fn new(args: Vec<String>) -> Self {
        Self { args, output: None }
    }

    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn program(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Arguments after the program name.
    pub fn operands(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }
}

/// Parse an ungrouped line into a command. Blank lines yield `None`.
pub fn parse_command(line: &str) -> ShellResult<Option<CommandSpec>> {
    let tokens = parse_line(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    extract_redirection(tokens).map(Some)
}

/// Parse a line containing `&` into its group members.
pub fn parse_group(line: &str) -> ShellResult<Vec<CommandSpec>> {
    let normalized = normalize_group_separators(line);
    let tokens = parse_line(&normalized)?;
    split_group(tokens)
}
