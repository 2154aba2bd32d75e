use crate::error::{ShellError, ShellResult};
use crate::parse::{CommandSpec, REDIRECT_OPERATOR};

/// Split a token stream at its first `>` into argv and an output target.
///
/// Exactly one token may follow the operator, and at least one must precede it.
pub fn extract_redirection(tokens: Vec<String>) -> ShellResult<CommandSpec> {
    let Some(op_idx) = tokens.iter().position(|token| token == REDIRECT_OPERATOR) else {
        if tokens.is_empty() {
            return Err(ShellError::malformed_redirection("empty command"));
        }
        return Ok(CommandSpec::new(tokens));
    };

    let mut args = tokens;
    let mut trailing = args.split_off(op_idx).into_iter().skip(1);
    let target = trailing.next().ok_or_else(|| {
        ShellError::malformed_redirection("missing output file")
            .with_context("Expected: cmd > filename")
    })?;
    if trailing.next().is_some() {
        return Err(ShellError::malformed_redirection("too many output files")
            .with_context("Only one token may follow '>'"));
    }
    if args.is_empty() {
        return Err(ShellError::malformed_redirection("redirection without a command"));
    }

    Ok(CommandSpec {
        args,
        output: Some(target),
    })
}
