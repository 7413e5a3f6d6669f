//! In-memory filesystem adapter.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::filesystem::{FileSystem, PortError};

#[derive(Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    created: Vec<PathBuf>,
}

impl MemoryState {
    fn insert_dir_chain(&mut self, dir: &Path, record: bool) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if self.dirs.insert(ancestor.to_path_buf()) && record {
                self.created.push(ancestor.to_path_buf());
            }
        }
    }
}

/// Filesystem held entirely in memory.
///
/// Used by tests and by `--dry-run`. Seeded files and directories are not
/// counted as created; every directory added through
/// [`FileSystem::create_dir_all`] is logged in creation order.
#[derive(Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, registering all of its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        let path = path.as_ref();
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            state.insert_dir_chain(parent, false);
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
    }

    /// Seeds a (possibly empty) directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.lock().insert_dir_chain(path.as_ref(), false);
    }

    /// Returns the contents of a file, if present.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        self.lock().files.get(path).cloned()
    }

    /// Paths of every file currently held, sorted.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    /// Directories created through `create_dir_all`, in creation order.
    #[must_use]
    pub fn created_directories(&self) -> Vec<PathBuf> {
        self.lock().created.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(path: &Path) -> PortError {
    Box::new(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such directory: {}", path.display()),
    ))
}

impl FileSystem for MemoryFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        let state = self.lock();
        if !state.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(state.files.keys().filter(|p| p.starts_with(dir)).cloned().collect())
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        let state = self.lock();
        if !state.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(state.dirs.iter().filter(|d| d.parent() == Some(dir)).cloned().collect())
    }

    fn create_dir_all(&self, dir: &Path) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.files.contains_key(dir) {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("a file exists at {}", dir.display()),
            )));
        }
        state.insert_dir_chain(dir, true);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut state = self.lock();
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) => {
                Err(not_found(parent))
            }
            _ => {
                state.files.insert(path.to_path_buf(), contents.to_string());
                Ok(())
            }
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        self.lock().files.get(path).cloned().ok_or_else(|| {
            Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )) as PortError
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || state.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_files_register_parent_directories() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/Core/Public/Foo.h", "");

        assert!(fs.exists(Path::new("/src/Core/Public")));
        assert!(fs.exists(Path::new("/src/Core")));
        assert!(fs.created_directories().is_empty());
    }

    #[test]
    fn lists_files_recursively_and_subdirectories_one_level() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/m/Public/A.h", "");
        fs.add_file("/m/Private/Deep/B.cpp", "");
        fs.add_dir("/m/Empty");

        let files = fs.list_files(Path::new("/m")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("/m/Private/Deep/B.cpp"), PathBuf::from("/m/Public/A.h")]
        );

        let dirs = fs.list_subdirectories(Path::new("/m")).unwrap();
        assert_eq!(
            dirs,
            vec![PathBuf::from("/m/Empty"), PathBuf::from("/m/Private"), PathBuf::from("/m/Public")]
        );
    }

    #[test]
    fn create_dir_all_logs_each_directory_once() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/out");

        fs.create_dir_all(Path::new("/out/Runtime/Core")).unwrap();
        fs.create_dir_all(Path::new("/out/Runtime/Core")).unwrap();

        assert_eq!(
            fs.created_directories(),
            vec![PathBuf::from("/out/Runtime/Core"), PathBuf::from("/out/Runtime")]
        );
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFileSystem::new();
        assert!(fs.write(Path::new("/missing/file.txt"), "x").is_err());

        fs.add_dir("/present");
        fs.write(Path::new("/present/file.txt"), "x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/present/file.txt")).unwrap(), "x");
    }

    #[test]
    fn listing_unknown_directory_fails() {
        let fs = MemoryFileSystem::new();
        assert!(fs.list_files(Path::new("/nope")).is_err());
        assert!(fs.list_subdirectories(Path::new("/nope")).is_err());
    }
}
