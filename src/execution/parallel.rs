//! Barrier-synchronized execution of `&`-separated command groups.
//!
//! Every member is resolved and spawned before any is waited on; the group
//! returns only once all spawned children have exited.
use std::process::{Child, ExitStatus};

use log::debug;

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::parse::CommandSpec;
use crate::search_path::SearchPath;

use super::resolve::resolve_program;
use super::spawning::spawn_command;
use super::exit_status_code;

/// Children of one group. Anything still unreaped is waited on drop.
struct ChildSet {
    children: Vec<(String, Child)>,
}

impl ChildSet {
    fn with_capacity(count: usize) -> ShellResult<Self> {
        let mut children = Vec::new();
        children.try_reserve_exact(count).map_err(|err| {
            ShellError::new(
                ErrorKind::Allocation,
                format!("cannot track {count} children: {err}"),
            )
        })?;
        Ok(Self { children })
    }

    fn push(&mut self, program: &str, child: Child) {
        self.children.push((program.to_string(), child));
    }

    fn len(&self) -> usize {
        self.children.len()
    }

    fn wait_all(&mut self) -> Vec<ExitStatus> {
        let mut statuses = Vec::with_capacity(self.children.len());
        for (program, mut child) in self.children.drain(..) {
            let pid = child.id();
            match child.wait() {
                Ok(status) => {
                    debug!(
                        "exec event=exit kind=group program={} pid={} status={}",
                        program,
                        pid,
                        exit_status_code(status)
                    );
                    statuses.push(status);
                }
                Err(err) => {
                    debug!("exec event=wait-failed kind=group program={program} pid={pid} err={err}");
                }
            }
        }
        statuses
    }
}

impl Drop for ChildSet {
    fn drop(&mut self) {
        for (_, child) in self.children.iter_mut() {
            let _ = child.wait();
        }
    }
}

/// Spawn every member concurrently, then wait for all of them.
///
/// Built-in names get no special treatment here. A member that cannot be
/// resolved or spawned reports the diagnostic and is skipped; its siblings
/// still run. Returns the exit statuses of the spawned members in order.
pub fn run_parallel_group(
    search_path: &SearchPath,
    group: &[CommandSpec],
) -> ShellResult<Vec<ExitStatus>> {
    debug!("exec event=group-start count={}", group.len());
    let mut children = ChildSet::with_capacity(group.len())?;

    for cmd in group {
        let spawned = resolve_program(search_path, cmd.program())
            .and_then(|program| spawn_command(&program, cmd));
        match spawned {
            Ok(child) => children.push(cmd.program(), child),
            Err(err) => err.report(),
        }
    }

    let spawned = children.len();
    let statuses = children.wait_all();
    debug!(
        "exec event=group-done spawned={} reaped={}",
        spawned,
        statuses.len()
    );
    Ok(statuses)
}
