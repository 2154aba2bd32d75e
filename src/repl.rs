use std::io;

use log::debug;
use witsshell::{execute, SearchPath};

use crate::io_helpers::LineSource;

/// Read and execute one line. Returns `false` once the loop should stop.
pub(crate) fn run_once(source: &mut dyn LineSource, search_path: &mut SearchPath) -> io::Result<bool> {
    let Some(line) = source.next_line()? else {
        debug!("repl event=eof");
        return Ok(false);
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(true);
    }

    Ok(execute(trimmed, search_path).should_continue())
}

/// Drive `source` until end of input or `exit`.
pub(crate) fn run(source: &mut dyn LineSource, search_path: &mut SearchPath) -> io::Result<()> {
    let outcome = loop {
        match run_once(source, search_path) {
            Ok(true) => continue,
            Ok(false) => break Ok(()),
            Err(err) => break Err(err),
        }
    };
    source.finish();
    outcome
}
