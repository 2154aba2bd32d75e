//! Command execution engine for the `witsshell` interpreter.
//!
//! The binary only reads lines; everything that happens to a line lives here
//! so tests and fuzz targets can drive the engine without a terminal.

pub mod builtins;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod parse;
pub mod search_path;

pub use dispatch::{execute, execute_line, ExecutionResult};
pub use error::{ErrorKind, ShellError, ShellResult, ERROR_MESSAGE};
pub use parse::CommandSpec;
pub use search_path::SearchPath;

/// Tokenize a line into validated tokens.
pub fn parse_tokens(input: &str) -> ShellResult<Vec<String>> {
    parse::parse_line(input)
}

/// Parse a line into the commands it would run, without running them.
pub fn parse_commands(input: &str) -> ShellResult<Vec<CommandSpec>> {
    if parse::contains_group_separator(input) {
        return parse::parse_group(input);
    }
    Ok(parse::parse_command(input)?.into_iter().collect())
}

/// Fuzz helper for parser-only targets.
pub fn fuzz_parse_bytes(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    if let Ok(tokens) = parse::parse_line(&input) {
        let _ = parse::split_group(tokens.clone());
        if !tokens.is_empty() {
            let _ = parse::extract_redirection(tokens);
        }
    }
    let _ = parse_commands(&input);
}
