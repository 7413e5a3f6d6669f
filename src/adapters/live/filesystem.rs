//! Live filesystem adapter backed by real disk I/O.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::ports::filesystem::{FileSystem, PortError};

/// Live filesystem adapter backed by real disk I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        walk(dir, None, |entry| entry.file_type().is_file())
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        walk(dir, Some(1), |entry| entry.file_type().is_dir())
    }

    fn create_dir_all(&self, dir: &Path) -> Result<(), PortError> {
        Ok(std::fs::create_dir_all(dir)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        Ok(std::fs::write(path, contents)?)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Entries below `dir` (never `dir` itself) in file-name order, keeping
/// those `keep` accepts.
fn walk(
    dir: &Path,
    max_depth: Option<usize>,
    keep: impl Fn(&DirEntry) -> bool,
) -> Result<Vec<PathBuf>, PortError> {
    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }
    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if keep(&entry) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
