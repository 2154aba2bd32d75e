//! Per-line entry point of the engine.
//!
//! A line with `&` anywhere goes to the parallel-group executor untouched by
//! built-in handling; any other line is parsed into one command and handed to
//! the built-in dispatcher.
use log::debug;

use crate::builtins::execute_builtin;
use crate::error::ShellResult;
use crate::execution::run_parallel_group;
use crate::parse::{contains_group_separator, parse_command, parse_group};
use crate::search_path::SearchPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    Continue,
    /// `exit` ran; the caller terminates with success.
    Exit,
}

impl ExecutionResult {
    pub fn should_continue(self) -> bool {
        matches!(self, ExecutionResult::Continue)
    }
}

/// Execute one trimmed line, reporting any error with the fixed diagnostic.
///
/// Allocation failures end the process with status 1.
pub fn execute(line: &str, search_path: &mut SearchPath) -> ExecutionResult {
    match execute_line(line, search_path) {
        Ok(result) => result,
        Err(err) if err.kind.is_fatal() => {
            err.report();
            std::process::exit(1);
        }
        Err(err) => {
            err.report();
            ExecutionResult::Continue
        }
    }
}

/// Like [`execute`] but hands the error back instead of reporting it.
pub fn execute_line(line: &str, search_path: &mut SearchPath) -> ShellResult<ExecutionResult> {
    if contains_group_separator(line) {
        let group = parse_group(line)?;
        debug!("dispatch event=group members={}", group.len());
        run_parallel_group(search_path, &group)?;
        return Ok(ExecutionResult::Continue);
    }

    let Some(cmd) = parse_command(line)? else {
        return Ok(ExecutionResult::Continue);
    };
    debug!("dispatch event=command argv={:?} output={:?}", cmd.args, cmd.output);
    execute_builtin(&cmd, search_path)
}
