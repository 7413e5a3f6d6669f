//! Module identity, output placement, and the file catalog.

pub mod catalog;

use std::path::{Component, Path, PathBuf};

pub use catalog::{is_compilable, FileCatalog};

use crate::error::GenerateError;

/// Directory under the root that mirrors into the output tree.
pub const SOURCE_ROOT_NAME: &str = "Source";

/// One compilable unit, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    root_directory: PathBuf,
    source_directory: PathBuf,
    output_root: PathBuf,
}

impl Module {
    /// Creates a module description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        root_directory: impl Into<PathBuf>,
        source_directory: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            root_directory: root_directory.into(),
            source_directory: source_directory.into(),
            output_root: output_root.into(),
        }
    }

    /// Module name; also the base name of the generated files.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root the `Source` directory lives under.
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Directory holding the module's files.
    #[must_use]
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Root of the generated project tree.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// `<source>/Public`, exported to dependants.
    #[must_use]
    pub fn public_directory(&self) -> PathBuf {
        self.source_directory.join("Public")
    }

    /// `<source>/Private`.
    #[must_use]
    pub fn private_directory(&self) -> PathBuf {
        self.source_directory.join("Private")
    }

    /// Where this module's descriptors go, relative to [`Module::output_root`].
    ///
    /// The source directory's position under `<root>/Source` is mirrored, so
    /// `Source/Runtime/Core` lands in `<output>/Runtime/Core`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SourceOutsideRoot`] if the source directory is
    /// not inside `<root>/Source`, including paths that climb out of it with
    /// `..`.
    pub fn relative_output_directory(&self) -> Result<PathBuf, GenerateError> {
        let source_root = self.root_directory.join(SOURCE_ROOT_NAME);
        match self.source_directory.strip_prefix(&source_root) {
            Ok(relative) if relative.components().all(|c| matches!(c, Component::Normal(_))) => {
                Ok(relative.to_path_buf())
            }
            _ => Err(GenerateError::SourceOutsideRoot {
                source_dir: self.source_directory.clone(),
                source_root,
            }),
        }
    }

    /// Schema form of the directory containing `file`, relative to the
    /// source directory. `None` for files at the module root.
    #[must_use]
    pub fn filter_of(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.source_directory).ok()?;
        let parent = relative.parent()?;
        if parent.as_os_str().is_empty() {
            None
        } else {
            Some(schema_path(parent))
        }
    }
}

/// Joins a relative path's components with `\`, the separator the project
/// schema uses for filter names.
#[must_use]
pub fn schema_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> Module {
        Module::new("Core", "/engine", "/engine/Source/Runtime/Core", "/engine/Intermediate")
    }

    #[test]
    fn output_directory_mirrors_source_tree() {
        assert_eq!(core().relative_output_directory().unwrap(), PathBuf::from("Runtime/Core"));
    }

    #[test]
    fn module_directly_in_source_root_writes_to_output_root() {
        let module = Module::new("Core", "/engine", "/engine/Source", "/out");
        assert_eq!(module.relative_output_directory().unwrap(), PathBuf::new());
    }

    #[test]
    fn source_outside_root_is_rejected() {
        let module = Module::new("Core", "/engine", "/elsewhere/Core", "/out");
        assert!(matches!(
            module.relative_output_directory(),
            Err(GenerateError::SourceOutsideRoot { .. })
        ));
    }

    #[test]
    fn parent_components_cannot_escape_source_root() {
        for source in ["/engine/Source/../Other", "/engine/Source/Runtime/../../Other"] {
            let module = Module::new("Other", "/engine", source, "/out");
            assert!(
                matches!(
                    module.relative_output_directory(),
                    Err(GenerateError::SourceOutsideRoot { .. })
                ),
                "{source} was accepted"
            );
        }
    }

    #[test]
    fn filter_of_uses_containing_directory() {
        let module = core();
        let src = module.source_directory().to_path_buf();
        assert_eq!(module.filter_of(&src.join("Public/Foo.h")).as_deref(), Some("Public"));
        assert_eq!(
            module.filter_of(&src.join("Private/Assets/Parser/FbxParser.cpp")).as_deref(),
            Some("Private\\Assets\\Parser")
        );
        assert_eq!(module.filter_of(&src.join("Core.Build.yaml")), None);
    }

    #[test]
    fn public_and_private_directories() {
        let module = core();
        assert_eq!(module.public_directory(), PathBuf::from("/engine/Source/Runtime/Core/Public"));
        assert_eq!(module.private_directory(), PathBuf::from("/engine/Source/Runtime/Core/Private"));
    }
}
