//! Partition of a module's files into compilable and non-compilable lists.

use std::path::{Path, PathBuf};

/// Extensions that mark a file as a translation unit.
pub const COMPILABLE_EXTENSIONS: [&str; 3] = ["cpp", "c", "cxx"];

/// Returns `true` if the file's extension is in [`COMPILABLE_EXTENSIONS`].
///
/// The comparison ignores ASCII case, so `Main.CPP` compiles too.
#[must_use]
pub fn is_compilable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPILABLE_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

/// A module's files, split once by extension.
///
/// Every listed file lands in exactly one of the two lists, and each list
/// keeps the order the files were listed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCatalog {
    compilable: Vec<PathBuf>,
    non_compilable: Vec<PathBuf>,
}

impl FileCatalog {
    /// Partitions `files` by extension.
    #[must_use]
    pub fn partition(files: impl IntoIterator<Item = PathBuf>) -> Self {
        let (compilable, non_compilable) = files.into_iter().partition(|f| is_compilable(f));
        Self { compilable, non_compilable }
    }

    /// Translation units (`ClCompile` items).
    #[must_use]
    pub fn compilable(&self) -> &[PathBuf] {
        &self.compilable
    }

    /// Headers and everything else (`ClInclude` items).
    #[must_use]
    pub fn non_compilable(&self) -> &[PathBuf] {
        &self.non_compilable
    }

    /// Total number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.compilable.len() + self.non_compilable.len()
    }

    /// Returns `true` if the module has no files at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
