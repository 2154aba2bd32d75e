use std::fs::{self, File};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::process::{Command, Stdio};

pub const OUTPUT_FILE_MODE: u32 = 0o644;

/// Open a redirection target: create if missing, truncate if present.
pub fn open_output_file(path: &str) -> io::Result<File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_FILE_MODE)
        .open(path)
}

/// Point the child's stdout and stderr at the same file.
///
/// Only the `Command` holds the descriptors, so the parent's streams are untouched
/// and the file closes when the `Command` is dropped.
pub fn apply_output_redirection(command: &mut Command, path: &str) -> io::Result<()> {
    let file = open_output_file(path)?;
    let stderr = file.try_clone()?;
    command.stdout(Stdio::from(file));
    command.stderr(Stdio::from(stderr));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn target(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).display().to_string()
    }

    #[test]
    fn stdout_and_stderr_share_the_file() {
        let dir = tempdir().unwrap();
        let out = target(&dir, "both.txt");
        let mut command = Command::new("/bin/sh");
        command.args(["-c", "echo out; echo err 1>&2"]);
        apply_output_redirection(&mut command, &out).unwrap();
        let status = command.status().unwrap();
        assert!(status.success());

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("out\n"));
        assert!(content.contains("err\n"));
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempdir().unwrap();
        let out = target(&dir, "old.txt");
        fs::write(&out, "a much longer previous content\n").unwrap();

        let mut command = Command::new("/bin/sh");
        command.args(["-c", "echo new"]);
        apply_output_redirection(&mut command, &out).unwrap();
        command.status().unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "new\n");
    }

    #[test]
    fn new_file_gets_fixed_mode() {
        let dir = tempdir().unwrap();
        let out = target(&dir, "fresh.txt");
        drop(open_output_file(&out).unwrap());
        let mode = fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits.
        assert_eq!(mode & !OUTPUT_FILE_MODE, 0);
        assert!(mode & 0o600 == 0o600);
    }

    #[test]
    fn unopenable_target_errors() {
        let dir = tempdir().unwrap();
        let out = target(&dir, "missing-dir/out.txt");
        let mut command = Command::new("/bin/sh");
        let err = apply_output_redirection(&mut command, &out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
