use std::path::{Path, PathBuf};

use log::{debug, trace};
use nix::unistd::{access, AccessFlags};

use crate::error::{ShellError, ShellResult};
use crate::search_path::SearchPath;

/// Regular file (after following links) that this process may execute.
pub fn is_executable(path: &Path) -> bool {
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

/// Find `program` in the search path; the first directory in order wins.
///
/// Nothing is cached: `path` may change the directories between calls.
pub fn resolve_program(search_path: &SearchPath, program: &str) -> ShellResult<PathBuf> {
    for dir in search_path.dirs() {
        let candidate = PathBuf::from(format!("{dir}/{program}"));
        trace!("resolve event=probe path={}", candidate.display());
        if is_executable(&candidate) {
            debug!(
                "resolve event=found program={} path={}",
                program,
                candidate.display()
            );
            return Ok(candidate);
        }
    }
    Err(ShellError::command_not_found(program))
}
