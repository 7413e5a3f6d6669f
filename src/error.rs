//! Error type for descriptor generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::PortError;

/// Errors raised while generating a module's descriptors.
///
/// Every variant aborts generation of the current module only; modules
/// generated earlier in the same run are left untouched.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A filesystem operation failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. "failed to write".
        action: &'static str,
        /// The path the operation targeted.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: PortError,
    },

    /// The module's source directory does not live under `<root>/Source`.
    #[error("source directory {} is not under {}", .source_dir.display(), .source_root.display())]
    SourceOutsideRoot {
        /// The module's source directory.
        source_dir: PathBuf,
        /// The expected `Source` root.
        source_root: PathBuf,
    },

    /// A dependency was requested before it was generated.
    #[error("module {module} depends on {dependency}, which has not been generated yet")]
    DependencyNotGenerated {
        /// The module being generated.
        module: String,
        /// The missing dependency.
        dependency: String,
    },

    /// A module names itself as a dependency.
    #[error("module {0} lists itself as a dependency")]
    SelfDependency(String),

    /// The workspace manifest could not be parsed or is inconsistent.
    #[error("invalid manifest {}: {message}", .path.display())]
    Manifest {
        /// The manifest path.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// A document could not be serialized.
    #[error("failed to serialize {document}: {message}")]
    Serialize {
        /// The document being written.
        document: String,
        /// The serializer's message.
        message: String,
    },
}

impl GenerateError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: PortError) -> Self {
        Self::Io { action, path: path.into(), source }
    }
}
