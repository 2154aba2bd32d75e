use crate::error::ShellResult;
use crate::parse::{extract_redirection, CommandSpec, GROUP_SEPARATOR, GROUP_SEPARATOR_TOKEN};

pub fn contains_group_separator(line: &str) -> bool {
    line.contains(GROUP_SEPARATOR)
}

/// Surround every `&` with spaces so it always tokenizes on its own.
pub fn normalize_group_separators(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for ch in line.chars() {
        if ch == GROUP_SEPARATOR {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split a token stream on `&` tokens into independently redirected commands.
///
/// Empty members (leading, trailing or doubled `&`) are dropped.
pub fn split_group(tokens: Vec<String>) -> ShellResult<Vec<CommandSpec>> {
    let mut group = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        if token == GROUP_SEPARATOR_TOKEN {
            push_member(&mut group, std::mem::take(&mut current))?;
            continue;
        }
        current.push(token);
    }
    push_member(&mut group, current)?;

    Ok(group)
}

fn push_member(group: &mut Vec<CommandSpec>, tokens: Vec<String>) -> ShellResult<()> {
    if tokens.is_empty() {
        return Ok(());
    }
    group.push(extract_redirection(tokens)?);
    Ok(())
}
