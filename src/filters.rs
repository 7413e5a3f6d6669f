//! Filter hierarchy: one IDE folder per source subdirectory.

use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::module::schema_path;
use crate::ports::{FileSystem, IdGenerator};

/// One filter group, mirroring a directory below the module's source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNode {
    /// Directory path relative to the source root, `\`-separated.
    pub relative_path: String,
    /// Bare unique identifier (no braces).
    pub identifier: String,
}

/// Builds filters for every directory below `source_directory`.
///
/// Directories are visited level by level, so a parent's filter is always
/// emitted before any of its descendants'. Empty directories still get a
/// filter; the source directory itself does not.
///
/// # Errors
///
/// Returns an error if any directory cannot be listed.
pub fn build_filters(
    fs: &dyn FileSystem,
    id_gen: &dyn IdGenerator,
    source_directory: &Path,
) -> Result<Vec<FilterNode>, GenerateError> {
    let mut nodes = Vec::new();
    let mut level = subdirectories(fs, source_directory)?;

    while !level.is_empty() {
        let mut next_level = Vec::new();
        for dir in &level {
            let relative = dir.strip_prefix(source_directory).unwrap_or(dir);
            let node =
                FilterNode { relative_path: schema_path(relative), identifier: id_gen.generate_id() };
            tracing::debug!(filter = %node.relative_path, id = %node.identifier, "filter");
            nodes.push(node);
            next_level.extend(subdirectories(fs, dir)?);
        }
        level = next_level;
    }

    Ok(nodes)
}

fn subdirectories(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    fs.list_subdirectories(dir).map_err(|e| GenerateError::io("failed to list", dir, e))
}
