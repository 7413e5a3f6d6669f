//! Writes documents to the output tree.

use std::path::{Path, PathBuf};

use crate::document::{xml, Document};
use crate::error::GenerateError;
use crate::ports::FileSystem;

/// Serializes `document` to `<output_root>/<relative_output_dir>/<file_name>`.
///
/// Missing directories are created; existing ones are left alone. An
/// existing file at the target path is overwritten.
///
/// # Errors
///
/// Returns an error carrying the path if serialization, directory creation,
/// or the write fails. A partially written file may remain.
pub fn write(
    fs: &dyn FileSystem,
    document: &Document,
    output_root: &Path,
    relative_output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, GenerateError> {
    let directory = output_root.join(relative_output_dir);
    let path = directory.join(file_name);

    let contents = xml::to_xml(document).map_err(|message| GenerateError::Serialize {
        document: file_name.to_string(),
        message,
    })?;

    if !fs.exists(&directory) {
        fs.create_dir_all(&directory)
            .map_err(|e| GenerateError::io("failed to create directory", &directory, e))?;
    }
    fs.write(&path, &contents).map_err(|e| GenerateError::io("failed to write", &path, e))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote descriptor");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::memory::MemoryFileSystem;
    use crate::document::Element;

    fn doc(text: &str) -> Document {
        Document::new(Element::builder("Project").text_child("Note", text).build())
    }

    #[test]
    fn creates_missing_directories_once() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/out");

        let first = write(&fs, &doc("a"), Path::new("/out"), Path::new("Runtime/Core"), "Core.vcxproj")
            .unwrap();
        let created = fs.created_directories();
        let second = write(&fs, &doc("b"), Path::new("/out"), Path::new("Runtime/Core"), "Core.vcxproj")
            .unwrap();

        assert_eq!(first, PathBuf::from("/out/Runtime/Core/Core.vcxproj"));
        assert_eq!(first, second);
        assert_eq!(fs.created_directories(), created);
        assert_eq!(created.len(), 2);
    }

    #[test]
    fn overwrites_existing_file() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/out");
        write(&fs, &doc("old"), Path::new("/out"), Path::new(""), "Core.vcxproj").unwrap();
        let path = write(&fs, &doc("new"), Path::new("/out"), Path::new(""), "Core.vcxproj").unwrap();

        let contents = fs.file(&path).unwrap();
        assert!(contents.contains("<Note>new</Note>"));
        assert!(!contents.contains("old"));
    }

    #[test]
    fn writes_to_disk_twice_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let rel = Path::new("Runtime/Core");
        write(&LiveFileSystem, &doc("a"), dir.path(), rel, "Core.vcxproj").unwrap();
        let path = write(&LiveFileSystem, &doc("a"), dir.path(), rel, "Core.vcxproj").unwrap();

        assert!(path.is_file());
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<?xml"));
    }

    #[test]
    fn write_failure_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();

        let err = write(&LiveFileSystem, &doc("a"), &blocker, Path::new("sub"), "Core.vcxproj")
            .unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(err.to_string().contains("blocked"));
    }
}
