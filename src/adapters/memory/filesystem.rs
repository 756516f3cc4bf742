//! In-memory adapter for the `FileSystem` port.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;

/// Filesystem held entirely in memory.
///
/// Files marked editable are tracked so callers can assert the permission
/// step ran.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    editable: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.lock().expect("memory fs lock poisoned").insert(path.into(), contents.into());
    }

    /// Returns a copy of a file's contents, if present.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("memory fs lock poisoned").get(path).cloned()
    }

    /// Whether [`FileSystem::make_editable`] was called for `path`.
    #[must_use]
    pub fn is_editable(&self, path: &Path) -> bool {
        self.editable.lock().expect("memory fs lock poisoned").contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path).ok_or_else(|| format!("{}: no such file", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.insert(path, contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("memory fs lock poisoned").contains_key(path)
    }

    fn make_editable(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if !self.exists(path) {
            return Err(format!("{}: no such file", path.display()).into());
        }
        self.editable.lock().expect("memory fs lock poisoned").insert(path.to_path_buf());
        Ok(())
    }
}
