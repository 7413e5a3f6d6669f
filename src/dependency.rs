//! Values exchanged between the generation of one module and its dependants.

use std::path::{Path, PathBuf};

/// Handle to a written project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    /// Absolute path of the `.vcxproj` file.
    pub file_path: PathBuf,
    /// Bare project GUID (no braces).
    pub project_identifier: String,
}

impl ProjectReference {
    /// Builds the view dependants consume.
    #[must_use]
    pub fn into_dependency(
        self,
        symbol: impl Into<String>,
        public_include_root: impl Into<PathBuf>,
    ) -> DependencyModule {
        DependencyModule {
            symbol: symbol.into(),
            public_include_root: public_include_root.into(),
            project_descriptor_path: self.file_path,
            project_identifier: self.project_identifier,
        }
    }
}

/// Read-only view of an already generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyModule {
    /// Upper-cased export symbol, e.g. `CORE`.
    pub symbol: String,
    /// The dependency's `Public` directory.
    pub public_include_root: PathBuf,
    /// Path of the dependency's written `.vcxproj`.
    pub project_descriptor_path: PathBuf,
    /// The dependency's project GUID.
    pub project_identifier: String,
}

impl DependencyModule {
    /// The reference a dependant emits for this module.
    #[must_use]
    pub fn project_reference(&self) -> ProjectReference {
        ProjectReference {
            file_path: self.project_descriptor_path.clone(),
            project_identifier: self.project_identifier.clone(),
        }
    }

    /// The dependency's public include directory.
    #[must_use]
    pub fn public_include_root(&self) -> &Path {
        &self.public_include_root
    }
}
