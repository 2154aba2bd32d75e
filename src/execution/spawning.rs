use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, ExitStatus};

use log::debug;

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::parse::CommandSpec;

use super::redirection::apply_output_redirection;
use super::{exit_status_code, wrap_spawn_error};

/// Build a `Command` for `program`, keeping the typed name as argv[0].
pub fn build_command(program: &Path, cmd: &CommandSpec) -> ShellResult<Command> {
    let mut command = Command::new(program);
    command.arg0(cmd.program()).args(cmd.operands());

    if let Some(ref output) = cmd.output {
        apply_output_redirection(&mut command, output).map_err(|err| {
            ShellError::new(ErrorKind::Spawn, format!("{output}: {err}"))
                .with_context("cannot open output file")
        })?;
    }

    Ok(command)
}

pub fn spawn_command(program: &Path, cmd: &CommandSpec) -> ShellResult<Child> {
    // The parent's copy of any redirection file closes when `command` drops here.
    let mut command = build_command(program, cmd)?;
    let child = command
        .spawn()
        .map_err(|err| wrap_spawn_error(cmd.program(), err))?;
    debug!(
        "exec event=spawn program={} path={} pid={}",
        cmd.program(),
        program.display(),
        child.id()
    );
    Ok(child)
}

/// Spawn one command and block until it exits or is killed.
pub fn run_command(program: &Path, cmd: &CommandSpec) -> ShellResult<ExitStatus> {
    let mut child = spawn_command(program, cmd)?;
    let pid = child.id();
    let status = child.wait().map_err(|err| {
        ShellError::new(ErrorKind::Spawn, format!("wait for pid {pid} failed: {err}"))
    })?;
    debug!(
        "exec event=exit kind=single pid={} status={}",
        pid,
        exit_status_code(status)
    );
    Ok(status)
}
