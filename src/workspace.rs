//! Workspace manifest: which modules to generate, with which rules.
//!
//! ```yaml
//! root: .
//! output: Intermediate/ProjectFiles
//! toolset: vc2019
//! modules:
//!   - name: Core
//!     path: Runtime/Core
//!   - name: Game
//!     path: Runtime/Game
//!     dependencies: [Core]
//!     rules:
//!       precompiled_header: GamePCH
//!       language_standard: cpp20
//!       additional_libraries: [d3d12.lib, dxgi.lib]
//! ```
//!
//! Modules are generated in the order listed. A module may only depend on
//! modules listed (and successfully generated) before it.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dependency::DependencyModule;
use crate::error::GenerateError;
use crate::generator::{GeneratedModule, ProjectGenerator};
use crate::module::{Module, SOURCE_ROOT_NAME};
use crate::ports::{FileSystem, IdGenerator};
use crate::rules::{BuildRules, Toolset};

/// Default output directory, relative to the root.
pub const DEFAULT_OUTPUT: &str = "Intermediate/ProjectFiles";

/// Manifest file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Root containing `Source/`, relative to the manifest's directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Output root, relative to `root` unless absolute.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Toolset to target.
    #[serde(default)]
    pub toolset: Toolset,
    /// Modules in generation order.
    pub modules: Vec<ModuleEntry>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// One module in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleEntry {
    /// Module name.
    pub name: String,
    /// Source directory relative to `<root>/Source`; defaults to `name`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Build rules.
    #[serde(default)]
    pub rules: BuildRules,
    /// Names of modules this one depends on, in include order.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Outcome of generating one module of a workspace.
#[derive(Debug)]
pub struct ModuleOutcome {
    /// Module name.
    pub name: String,
    /// What happened.
    pub result: Result<GeneratedModule, GenerateError>,
}

/// A loaded manifest with its paths resolved.
#[derive(Debug, Clone)]
pub struct Workspace {
    manifest: Manifest,
    root: PathBuf,
    output_root: PathBuf,
}

impl Workspace {
    /// Reads and validates a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or names
    /// a module twice.
    pub fn load(fs: &dyn FileSystem, manifest_path: &Path) -> Result<Self, GenerateError> {
        let content = fs
            .read_to_string(manifest_path)
            .map_err(|e| GenerateError::io("failed to read", manifest_path, e))?;
        let manifest: Manifest = serde_yaml::from_str(&content).map_err(|e| GenerateError::Manifest {
            path: manifest_path.to_path_buf(),
            message: e.to_string(),
        })?;
        let base = manifest_path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_manifest(manifest, base).map_err(|message| GenerateError::Manifest {
            path: manifest_path.to_path_buf(),
            message,
        })
    }

    /// Resolves a manifest's paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns a message if two modules share a name.
    pub fn from_manifest(manifest: Manifest, base: &Path) -> Result<Self, String> {
        let mut seen = HashMap::new();
        for (index, entry) in manifest.modules.iter().enumerate() {
            if let Some(first) = seen.insert(entry.name.as_str(), index) {
                return Err(format!(
                    "module {} is listed twice (entries {} and {})",
                    entry.name,
                    first + 1,
                    index + 1
                ));
            }
        }
        let root = normalize(&base.join(&manifest.root));
        let output_root = normalize(&root.join(&manifest.output));
        Ok(Self { manifest, root, output_root })
    }

    /// Replaces the output root.
    #[must_use]
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = normalize(&output_root.into());
        self
    }

    /// The resolved root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The resolved output root.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// The parsed manifest.
    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Builds the [`Module`] for a manifest entry.
    #[must_use]
    pub fn module(&self, entry: &ModuleEntry) -> Module {
        let relative = entry.path.clone().unwrap_or_else(|| PathBuf::from(&entry.name));
        let source = normalize(&self.root.join(SOURCE_ROOT_NAME).join(relative));
        Module::new(entry.name.clone(), self.root.clone(), source, self.output_root.clone())
    }

    /// Finds an entry by name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&ModuleEntry> {
        self.manifest.modules.iter().find(|m| m.name == name)
    }

    /// Generates every module in manifest order.
    ///
    /// A failing module does not stop the run; modules that depend on it
    /// then fail with [`GenerateError::DependencyNotGenerated`].
    pub fn generate_all(&self, fs: &dyn FileSystem, id_gen: &dyn IdGenerator) -> Vec<ModuleOutcome> {
        let mut generated: HashMap<String, DependencyModule> = HashMap::new();
        let mut outcomes = Vec::with_capacity(self.manifest.modules.len());

        for entry in &self.manifest.modules {
            let _span = tracing::info_span!("module", name = %entry.name).entered();
            let result = self.generate_one(fs, id_gen, entry, &generated);
            match &result {
                Ok(module) => {
                    generated.insert(entry.name.clone(), module.dependency.clone());
                }
                Err(err) => tracing::error!(error = %err, "generation failed"),
            }
            outcomes.push(ModuleOutcome { name: entry.name.clone(), result });
        }
        outcomes
    }

    fn generate_one(
        &self,
        fs: &dyn FileSystem,
        id_gen: &dyn IdGenerator,
        entry: &ModuleEntry,
        generated: &HashMap<String, DependencyModule>,
    ) -> Result<GeneratedModule, GenerateError> {
        if entry.dependencies.iter().any(|d| *d == entry.name) {
            return Err(GenerateError::SelfDependency(entry.name.clone()));
        }
        let dependencies = entry
            .dependencies
            .iter()
            .map(|name| {
                generated.get(name).cloned().ok_or_else(|| GenerateError::DependencyNotGenerated {
                    module: entry.name.clone(),
                    dependency: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let generator = ProjectGenerator::new(fs, self.module(entry))?;
        generator.generate(id_gen, &entry.rules, self.manifest.toolset, &dependencies)
    }
}

/// Lexically drops `.` and folds `..` into its parent, without touching disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
