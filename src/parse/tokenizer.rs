//! Tokenizer for interpreter input.
//!
//! Words are split on whitespace only; there is no quoting. A `>` anywhere in
//! a word is split out as its own token so `echo hi>out` and `echo hi > out`
//! tokenize the same way.
use log::trace;

use crate::error::{ShellError, ShellResult};
use crate::parse::REDIRECT_OPERATOR;

// Tokens past this count are dropped without error.
pub const MAX_TOKENS: usize = 4096;

const REDIRECT_CHAR: char = '>';

fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x07')
}

pub fn parse_line(input: &str) -> ShellResult<Vec<String>> {
    let mut tokens = Vec::new();

    'words: for word in input.split(is_delimiter).filter(|word| !word.is_empty()) {
        for piece in split_redirections(word) {
            if tokens.len() >= MAX_TOKENS {
                trace!("parse event=truncate limit={MAX_TOKENS}");
                break 'words;
            }
            tokens.push(piece.to_string());
        }
    }

    validate_redirections(&tokens)?;
    Ok(tokens)
}

fn split_redirections(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = word;
    while let Some(idx) = rest.find(REDIRECT_CHAR) {
        if idx > 0 {
            pieces.push(&rest[..idx]);
        }
        pieces.push(REDIRECT_OPERATOR);
        rest = &rest[idx + REDIRECT_CHAR.len_utf8()..];
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

fn validate_redirections(tokens: &[String]) -> ShellResult<()> {
    for (idx, token) in tokens.iter().enumerate() {
        if token != REDIRECT_OPERATOR {
            continue;
        }
        if idx == 0 {
            return Err(ShellError::malformed_redirection("redirection without a command")
                .with_context("Expected: cmd > filename"));
        }
        if idx + 1 == tokens.len() {
            return Err(ShellError::malformed_redirection("missing output file")
                .with_context("Expected: cmd > filename"));
        }
        if tokens[idx - 1] == REDIRECT_OPERATOR {
            return Err(ShellError::malformed_redirection(
                "consecutive redirection operators",
            ));
        }
    }
    Ok(())
}
