//! The interpreter's program search path.
//!
//! Owned by the dispatch loop; executors only ever see `&SearchPath`.

pub const DEFAULT_SEARCH_DIR: &str = "/bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { dirs: Vec::new() }
    }

    /// Discard every entry and install `dirs` in the given order.
    pub fn replace<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs = dirs.into_iter().map(Into::into).collect();
    }

    pub fn entries(&self) -> &[String] {
        &self.dirs
    }

    /// Directories in lookup order; an entry like `/bin:/usr/bin` yields both.
    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs
            .iter()
            .flat_map(|entry| entry.split(':'))
            .filter(|dir| !dir.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.dirs().next().is_none()
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::new([DEFAULT_SEARCH_DIR])
    }
}
