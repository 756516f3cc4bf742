//! Filesystem port for file I/O operations.

use std::path::Path;

/// Provides filesystem access for reading and writing output files.
///
/// Abstracting the filesystem lets both stages run against an in-memory
/// tree in tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Widens the permissions of a written file so anyone can edit it.
    ///
    /// Some hosts create generated files read-only; both stages call this
    /// after closing their output.
    ///
    /// # Errors
    ///
    /// Returns an error if the permissions cannot be changed.
    fn make_editable(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
