use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ErrorKind, ShellError};
use crate::search_path::{SearchPath, DEFAULT_SEARCH_DIR};

pub const DEFAULT_PROMPT: &str = "witsshell> ";
const RC_FILE: &str = ".witsshellrc";
const HISTORY_FILE: &str = ".witsshell_history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPreference {
    Emacs,
    Vi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub initial_path: Vec<String>,
    pub prompt: String,
    pub edit_mode: EditPreference,
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_path: vec![DEFAULT_SEARCH_DIR.to_string()],
            prompt: DEFAULT_PROMPT.to_string(),
            edit_mode: EditPreference::Emacs,
            history_file: env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(HISTORY_FILE)),
        }
    }
}

impl ShellConfig {
    pub fn search_path(&self) -> SearchPath {
        SearchPath::new(self.initial_path.iter().cloned())
    }
}

/// Defaults, then the rc file, then environment overrides.
///
/// An rc file that exists but cannot be read is reported with the fixed
/// diagnostic and skipped.
pub fn load_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    if let Some(path) = rc_path() {
        match read_rc_file(&path) {
            Ok(Some(content)) => {
                for (line, err) in apply_config_text(&mut config, &content) {
                    eprintln!("config:{line}: {}", err.message);
                }
            }
            Ok(None) => {}
            Err(err) => err.report(),
        }
    }
    apply_env_overrides(&mut config, |key| env::var(key).ok());
    config
}

fn read_rc_file(path: &Path) -> Result<Option<String>, ShellError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ShellError::new(
            ErrorKind::Config,
            format!("{}: {err}", path.display()),
        )),
    }
}

fn rc_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("WITSSHELL_RC") {
        return Some(PathBuf::from(path));
    }
    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(RC_FILE))
}

/// Apply `key=value` lines; returns the bad lines (1-based) without stopping.
pub fn apply_config_text(config: &mut ShellConfig, content: &str) -> Vec<(usize, ShellError)> {
    let mut errors = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(err) = apply_directive(config, line) {
            errors.push((idx + 1, err));
        }
    }
    errors
}

fn apply_directive(config: &mut ShellConfig, line: &str) -> Result<(), ShellError> {
    let (key, value) = line.split_once('=').ok_or_else(|| {
        ShellError::new(ErrorKind::Config, "unrecognized directive")
            .with_context("Expected: key=value")
    })?;
    let key = key.trim();
    let value = strip_quotes(value.trim());
    match key.to_ascii_lowercase().as_str() {
        "path" => config.initial_path = split_dirs(value),
        "prompt" => config.prompt = value.to_string(),
        "editmode" | "edit_mode" => config.edit_mode = parse_edit_mode(value)?,
        "history" => {
            config.history_file = match value {
                "" | "off" | "none" => None,
                path => Some(PathBuf::from(path)),
            }
        }
        _ => {
            return Err(ShellError::new(
                ErrorKind::Config,
                format!("unknown key '{key}'"),
            ))
        }
    }
    Ok(())
}

pub fn apply_env_overrides<F>(config: &mut ShellConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("WITSSHELL_PATH") {
        config.initial_path = split_dirs(&path);
    }
    if let Some(mode) = lookup("WITSSHELL_EDITMODE") {
        if let Ok(mode) = parse_edit_mode(&mode) {
            config.edit_mode = mode;
        }
    }
}

fn parse_edit_mode(value: &str) -> Result<EditPreference, ShellError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "vi" => Ok(EditPreference::Vi),
        "emacs" => Ok(EditPreference::Emacs),
        other => Err(ShellError::new(
            ErrorKind::Config,
            format!("unknown edit mode '{other}'"),
        )
        .with_context("Valid values: vi, emacs")),
    }
}

fn split_dirs(value: &str) -> Vec<String> {
    value
        .split(|ch: char| ch == ':' || ch.is_whitespace())
        .filter(|dir| !dir.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_quotes(input: &str) -> &str {
    let bytes = input.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &input[1..bytes.len() - 1];
        }
    }
    input
}
