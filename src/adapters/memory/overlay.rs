//! Read-through overlay used for dry runs.

use std::path::{Path, PathBuf};

use super::MemoryFileSystem;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::filesystem::{FileSystem, PortError};

/// Reads from disk, keeps every write in memory.
///
/// Source listings and the manifest come from the real disk; directory
/// creation and descriptor writes land in an in-memory layer that is
/// consulted first on reads.
#[derive(Default)]
pub struct OverlayFileSystem {
    disk: LiveFileSystem,
    overlay: MemoryFileSystem,
}

impl OverlayFileSystem {
    /// Creates an overlay with nothing written yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every file written so far, sorted.
    #[must_use]
    pub fn written(&self) -> Vec<PathBuf> {
        self.overlay.file_paths()
    }
}

impl FileSystem for OverlayFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        self.disk.list_files(dir)
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        self.disk.list_subdirectories(dir)
    }

    fn create_dir_all(&self, dir: &Path) -> Result<(), PortError> {
        self.overlay.create_dir_all(dir)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        self.overlay.write(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        self.overlay.read_to_string(path).or_else(|_| self.disk.read_to_string(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.overlay.exists(path)
    }
}
