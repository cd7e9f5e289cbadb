//! Where the task list lives.

use std::path::{Path, PathBuf};

/// Default name of the backing file.
pub const TODO_FILE: &str = "todo.json";

/// Configuration for a task store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the backing file
    pub root: PathBuf,

    /// Backing file name, relative to `root`
    pub file_name: PathBuf,
}

impl StoreConfig {
    /// Create config with the default file name.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: PathBuf::from(TODO_FILE),
        }
    }

    /// Use a different backing file name.
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Get the backing file path.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
