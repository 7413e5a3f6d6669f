//! Filesystem port for listing module trees and writing descriptors.

use std::path::{Path, PathBuf};

/// Boxed error returned by port operations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Provides the filesystem access the generator needs.
///
/// Abstracting the filesystem lets generation run against an in-memory
/// tree in tests and in dry-run mode without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Lists every file under `dir`, recursively, in a stable sorted order.
    ///
    /// Directories themselves are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` or any directory below it cannot be read.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError>;

    /// Lists the immediate subdirectories of `dir`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a directory or cannot be read.
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError>;

    /// Creates `dir` and any missing parents. Existing directories are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, dir: &Path) -> Result<(), PortError>;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
