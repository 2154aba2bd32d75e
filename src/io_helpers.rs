use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use witsshell::config::{EditPreference, ShellConfig};

pub trait LineSource {
    /// Next raw line, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Called once when the loop stops, by end of input or `exit`.
    fn finish(&mut self) {}
}

/// Prompted input: rustyline on a terminal, plain stdin otherwise.
pub struct InteractiveSource {
    editor: Option<DefaultEditor>,
    prompt: String,
    history_file: Option<PathBuf>,
}

impl InteractiveSource {
    pub fn new(config: &ShellConfig) -> io::Result<Self> {
        let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) == 1 };
        let editor = if interactive {
            Some(build_editor(config)?)
        } else {
            None
        };
        Ok(Self {
            editor,
            prompt: config.prompt.clone(),
            history_file: config.history_file.clone(),
        })
    }
}

fn build_editor(config: &ShellConfig) -> io::Result<DefaultEditor> {
    let edit_mode = match config.edit_mode {
        EditPreference::Vi => EditMode::Vi,
        EditPreference::Emacs => EditMode::Emacs,
    };
    let rl_config = Config::builder()
        .auto_add_history(true)
        .edit_mode(edit_mode)
        .build();
    let mut editor = DefaultEditor::with_config(rl_config).map_err(io::Error::other)?;
    if let Some(ref path) = config.history_file {
        let _ = editor.load_history(path);
    }
    Ok(editor)
}

impl LineSource for InteractiveSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let Some(editor) = self.editor.as_mut() else {
            print!("{}", self.prompt);
            io::stdout().flush()?;
            return read_lossy_line(&mut io::stdin().lock());
        };
        match editor.readline(&self.prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(io::Error::other(err)),
        }
    }

    fn finish(&mut self) {
        if let (Some(editor), Some(path)) = (self.editor.as_mut(), self.history_file.as_ref()) {
            if let Err(err) = editor.save_history(path) {
                debug!("history event=save-failed path={} err={err}", path.display());
            }
        }
    }
}

/// One raw line; bytes that are not UTF-8 become U+FFFD instead of failing the read.
fn read_lossy_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let bytes = reader.read_until(b'\n', &mut buf)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Lines from a batch file; no prompt is printed.
pub struct BatchSource<R> {
    reader: R,
}

impl BatchSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> BatchSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BatchSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut self.reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn batch_source_yields_lines_then_none() {
        let mut source = BatchSource::from_reader(Cursor::new("ls\n\n  pwd  \nlast"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("ls\n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("\n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("  pwd  \n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_line_does_not_end_input() {
        let mut source = BatchSource::from_reader(Cursor::new(b"echo \xff\npwd\n".to_vec()));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("echo \u{fffd}\n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("pwd\n"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn batch_source_missing_file_errors() {
        let err = BatchSource::open("/nonexistent/batch.txt").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
