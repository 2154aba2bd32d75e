use std::fs;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use crate::error::{ErrorKind, ShellError};

mod parallel;
mod redirection;
mod resolve;
mod spawning;

pub use parallel::run_parallel_group;
pub use redirection::{apply_output_redirection, open_output_file, OUTPUT_FILE_MODE};
pub use resolve::{is_executable, resolve_program};
pub use spawning::{build_command, run_command, spawn_command};

pub fn wrap_spawn_error(cmd: &str, err: io::Error) -> ShellError {
    ShellError::new(ErrorKind::Spawn, spawn_error_message(cmd, &err))
}

pub fn exit_status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else if let Some(sig) = status.signal() {
        128 + sig
    } else {
        1
    }
}

fn spawn_error_message(cmd: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("{cmd}: command not found"),
        io::ErrorKind::PermissionDenied => format!("{cmd}: permission denied"),
        _ => {
            if cmd.contains('/') {
                if let Ok(meta) = fs::metadata(cmd) {
                    if meta.is_dir() {
                        return format!("{cmd}: is a directory");
                    }
                }
            }
            format!("{cmd}: {err}")
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable `/bin/sh` script named `name` into `dir`.
    pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Write a file that exists but is not executable.
    pub(crate) fn write_plain(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "not a program\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        path
    }
}
