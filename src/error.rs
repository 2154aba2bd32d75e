//! Error types and reporting for the interpreter.
//!
//! Every failure inside the engine is a `ShellError` carrying:
//! - Error kind (redirection, lookup, built-in usage, etc.)
//! - Human-readable message for the debug log
//! - Optional context about what input caused the error
//!
//! Users only ever see one fixed diagnostic line; the detail goes to the log.

use std::fmt;
use std::io::{self, Write};

use log::debug;

/// The one diagnostic the interpreter prints for every recoverable error.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Categorized error types for diagnostics and fatality decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Misplaced `>` or wrong number of targets after it
    MalformedRedirection,
    /// No directory in the search path holds an executable match
    CommandNotFound,
    /// Wrong argument count for `cd` or `exit`
    BuiltinArgument,
    /// The OS rejected a `cd` target
    DirectoryChangeFailed,
    /// The OS could not create the child process or its output file
    Spawn,
    /// Memory for the child table could not be reserved
    Allocation,
    /// Error loading/parsing configuration
    Config,
}

impl ErrorKind {
    /// Fatal kinds terminate the interpreter instead of moving to the next line.
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorKind::Allocation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::MalformedRedirection => write!(f, "Redirection error"),
            ErrorKind::CommandNotFound => write!(f, "Command not found"),
            ErrorKind::BuiltinArgument => write!(f, "Built-in usage error"),
            ErrorKind::DirectoryChangeFailed => write!(f, "Directory change error"),
            ErrorKind::Spawn => write!(f, "Spawn error"),
            ErrorKind::Allocation => write!(f, "Allocation error"),
            ErrorKind::Config => write!(f, "Config error"),
        }
    }
}

/// Rich error type with context information
#[derive(Debug, Clone)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
    /// Additional context explaining what was being processed
    pub context: Option<String>,
}

impl ShellError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ShellError {
            kind,
            message: message.into(),
            context: None,
        }
    }

    pub fn malformed_redirection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRedirection, message)
    }

    pub fn command_not_found(name: &str) -> Self {
        Self::new(ErrorKind::CommandNotFound, format!("{name}: not found in search path"))
    }

    /// Add context string (e.g., "Expected: cmd > filename")
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Log the detailed error and print the fixed diagnostic to stderr.
    pub fn report(&self) {
        debug!("error event=report kind={:?} detail={}", self.kind, self);
        report_error();
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\n  hint: {}", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ShellError {}

/// Convenience type alias for Results with ShellError
pub type ShellResult<T> = Result<T, ShellError>;

/// Write the fixed diagnostic in one call so concurrent writers never split it.
pub fn report_error() {
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_hint() {
        let err = ShellError::malformed_redirection("missing target")
            .with_context("Expected: cmd > filename");
        let text = err.to_string();
        assert!(text.starts_with("Redirection error: missing target"));
        assert!(text.contains("hint: Expected: cmd > filename"));
    }

    #[test]
    fn only_allocation_is_fatal() {
        assert!(ErrorKind::Allocation.is_fatal());
        for kind in [
            ErrorKind::MalformedRedirection,
            ErrorKind::CommandNotFound,
            ErrorKind::BuiltinArgument,
            ErrorKind::DirectoryChangeFailed,
            ErrorKind::Spawn,
            ErrorKind::Config,
        ] {
            assert!(!kind.is_fatal(), "{kind} should not be fatal");
        }
    }

    #[test]
    fn command_not_found_names_program() {
        let err = ShellError::command_not_found("frobnicate");
        assert_eq!(err.kind, ErrorKind::CommandNotFound);
        assert!(err.message.contains("frobnicate"));
    }
}
