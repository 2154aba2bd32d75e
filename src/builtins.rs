use std::env;

use log::debug;

use crate::dispatch::ExecutionResult;
use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::execution::{exit_status_code, resolve_program, run_command};
use crate::parse::CommandSpec;
use crate::search_path::SearchPath;

/// Run an ungrouped command: built-ins in process, everything else as a child.
pub fn execute_builtin(
    cmd: &CommandSpec,
    search_path: &mut SearchPath,
) -> ShellResult<ExecutionResult> {
    let args = cmd.operands();
    match cmd.program() {
        "exit" => {
            if !args.is_empty() {
                return Err(ShellError::new(ErrorKind::BuiltinArgument, "exit takes no arguments"));
            }
            debug!("builtin event=exit");
            Ok(ExecutionResult::Exit)
        }
        "cd" => {
            let [target] = args else {
                return Err(
                    ShellError::new(ErrorKind::BuiltinArgument, "cd takes exactly one argument")
                        .with_context("Usage: cd <dir>"),
                );
            };
            env::set_current_dir(target).map_err(|err| {
                ShellError::new(ErrorKind::DirectoryChangeFailed, format!("cd: {target}: {err}"))
            })?;
            debug!("builtin event=cd dir={target}");
            Ok(ExecutionResult::Continue)
        }
        "path" => {
            search_path.replace(args.iter().cloned());
            debug!("builtin event=path dirs={:?}", search_path.entries());
            Ok(ExecutionResult::Continue)
        }
        name => {
            let program = resolve_program(search_path, name)?;
            let status = run_command(&program, cmd)?;
            debug!(
                "exec event=done program={} status={}",
                name,
                exit_status_code(status)
            );
            Ok(ExecutionResult::Continue)
        }
    }
}
