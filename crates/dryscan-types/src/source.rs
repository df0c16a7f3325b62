//! Query source files.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A SQL query source identified by a file-system path.
///
/// The SQL text is read lazily, whole, once per estimation pass; nothing is
/// cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySource {
    path: PathBuf,
}

impl QuerySource {
    /// Creates a query source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the underlying SQL file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display name: the final path component, with all leading
    /// segments stripped.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map_or_else(|| self.path.to_string_lossy(), |name| name.to_string_lossy())
    }

    /// Reads the whole UTF-8 SQL text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

impl From<PathBuf> for QuerySource {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl From<&Path> for QuerySource {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
