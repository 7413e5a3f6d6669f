//! Compiler and linker settings derived from rules and dependencies.

use std::path::{Path, PathBuf};

use crate::dependency::{DependencyModule, ProjectReference};
use crate::module::{FileCatalog, Module};
use crate::rules::{BuildRules, Configuration, LanguageStandard};

/// Marker MSBuild expands to the inherited include directories.
pub const INHERIT_INCLUDE_DIRECTORIES: &str = "%(AdditionalIncludeDirectories)";
/// Marker MSBuild expands to the inherited preprocessor definitions.
pub const INHERIT_PREPROCESSOR_DEFINITIONS: &str = "%(PreprocessorDefinitions)";
/// Marker MSBuild expands to the inherited linker inputs.
pub const INHERIT_ADDITIONAL_DEPENDENCIES: &str = "%(AdditionalDependencies)";

/// Annotation for symbols defined by the module being built.
pub const EXPORT_ANNOTATION: &str = "__declspec(dllexport)";
/// Annotation for symbols defined by a dependency.
pub const IMPORT_ANNOTATION: &str = "__declspec(dllimport)";

/// Windows libraries every DLL links against, after the module's own.
pub const BASE_LIBRARIES: [&str; 12] = [
    "kernel32.lib",
    "user32.lib",
    "gdi32.lib",
    "winspool.lib",
    "comdlg32.lib",
    "advapi32.lib",
    "shell32.lib",
    "ole32.lib",
    "oleaut32.lib",
    "uuid.lib",
    "odbc32.lib",
    "odbccp32.lib",
];

const PLATFORM_MARKERS: [&str; 2] = ["_WINDOWS", "_USRDLL"];

/// How a translation unit participates in the precompiled header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PchRole {
    /// Builds the precompiled header.
    Create,
    /// Consumes it, with the header force-included.
    Use,
}

impl PchRole {
    /// Value of the `PrecompiledHeader` element.
    #[must_use]
    pub fn schema_value(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Use => "Use",
        }
    }
}

/// Precompiled header wiring for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompiledHeader {
    /// Header base name, without extension.
    pub name: String,
    /// The translation unit whose stem matches `name`, if any.
    pub creator: Option<PathBuf>,
}

impl PrecompiledHeader {
    fn scan(name: &str, catalog: &FileCatalog) -> Self {
        let creator = catalog
            .compilable()
            .iter()
            .find(|file| {
                file.file_stem()
                    .and_then(|stem| stem.to_str())
                    .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
            })
            .cloned();
        Self { name: name.to_string(), creator }
    }

    /// `{name}.h`, used both as the precompiled header and the forced include.
    #[must_use]
    pub fn header_file(&self) -> String {
        format!("{}.h", self.name)
    }

    /// Role of a compilable file.
    #[must_use]
    pub fn role_of(&self, file: &Path) -> PchRole {
        if self.creator.as_deref() == Some(file) {
            PchRole::Create
        } else {
            PchRole::Use
        }
    }

    /// `true` when a header is named but no translation unit creates it.
    ///
    /// Every file is then marked `Use` while nothing builds the header.
    #[must_use]
    pub fn is_orphaned(&self) -> bool {
        self.creator.is_none()
    }
}

/// The optimization switch. All four paired flags follow it together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimization {
    enabled: bool,
}

impl Optimization {
    /// On for Release, off for Debug.
    #[must_use]
    pub fn for_configuration(configuration: Configuration) -> Self {
        Self { enabled: configuration.is_release() }
    }

    /// Whether optimization is on.
    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled
    }

    /// Compiler flags: function-level linking and intrinsics.
    #[must_use]
    pub fn compiler_flags(self) -> [(&'static str, bool); 2] {
        [("FunctionLevelLinking", self.enabled), ("IntrinsicFunctions", self.enabled)]
    }

    /// Linker flags: COMDAT folding and reference optimization.
    #[must_use]
    pub fn linker_flags(self) -> [(&'static str, bool); 2] {
        [("EnableCOMDATFolding", self.enabled), ("OptimizeReferences", self.enabled)]
    }
}

/// Settings that do not vary by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSettings {
    /// Include directories, ending with [`INHERIT_INCLUDE_DIRECTORIES`].
    pub include_directories: Vec<String>,
    /// Precompiled header wiring, if the rules name one.
    pub precompiled_header: Option<PrecompiledHeader>,
    /// Language standard.
    pub language_standard: LanguageStandard,
    /// Linker inputs; empty when the module adds no libraries of its own.
    pub link_libraries: Vec<String>,
    /// References to dependency projects, in dependency order.
    pub project_references: Vec<ProjectReference>,
}

/// Settings specific to one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSettings {
    /// Which configuration these apply to.
    pub configuration: Configuration,
    /// Definitions, ending with [`INHERIT_PREPROCESSOR_DEFINITIONS`].
    pub preprocessor_definitions: Vec<String>,
    /// The optimization switch.
    pub optimization: Optimization,
}

/// Everything needed for one configuration of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSettings {
    /// Configuration-independent settings.
    pub shared: SharedSettings,
    /// Configuration-specific settings.
    pub configuration: ConfigurationSettings,
}

/// Shared settings plus every configuration, in [`Configuration::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Configuration-independent settings.
    pub shared: SharedSettings,
    /// One entry per configuration, Debug first.
    pub configurations: Vec<ConfigurationSettings>,
}

/// Resolves the settings for one configuration.
///
/// `dependencies` must already be generated; they are trusted as given and
/// used in order.
#[must_use]
pub fn resolve(
    module: &Module,
    rules: &BuildRules,
    catalog: &FileCatalog,
    dependencies: &[DependencyModule],
    configuration: Configuration,
) -> CompileSettings {
    CompileSettings {
        shared: resolve_shared(module, rules, catalog, dependencies),
        configuration: resolve_configuration(module, rules, dependencies, configuration),
    }
}

/// Resolves shared settings once and then every configuration.
#[must_use]
pub fn resolve_all(
    module: &Module,
    rules: &BuildRules,
    catalog: &FileCatalog,
    dependencies: &[DependencyModule],
) -> ProjectSettings {
    let shared = resolve_shared(module, rules, catalog, dependencies);
    if let Some(pch) = shared.precompiled_header.as_ref().filter(|p| p.is_orphaned()) {
        tracing::warn!(
            module = module.name(),
            header = %pch.name,
            "no translation unit matches the precompiled header; nothing will create it"
        );
    }
    let configurations = Configuration::ALL
        .into_iter()
        .map(|c| resolve_configuration(module, rules, dependencies, c))
        .collect();
    ProjectSettings { shared, configurations }
}

fn resolve_shared(
    module: &Module,
    rules: &BuildRules,
    catalog: &FileCatalog,
    dependencies: &[DependencyModule],
) -> SharedSettings {
    SharedSettings {
        include_directories: include_directories(module, dependencies),
        precompiled_header: rules.precompiled_header().map(|name| PrecompiledHeader::scan(name, catalog)),
        language_standard: rules.language_standard,
        link_libraries: link_libraries(rules),
        project_references: dependencies.iter().map(DependencyModule::project_reference).collect(),
    }
}

fn resolve_configuration(
    module: &Module,
    rules: &BuildRules,
    dependencies: &[DependencyModule],
    configuration: Configuration,
) -> ConfigurationSettings {
    ConfigurationSettings {
        configuration,
        preprocessor_definitions: preprocessor_definitions(module, rules, dependencies, configuration),
        optimization: Optimization::for_configuration(configuration),
    }
}

fn include_directories(module: &Module, dependencies: &[DependencyModule]) -> Vec<String> {
    let mut dirs = vec![
        module.public_directory().display().to_string(),
        module.private_directory().display().to_string(),
    ];
    dirs.extend(dependencies.iter().map(|d| d.public_include_root().display().to_string()));
    dirs.push(INHERIT_INCLUDE_DIRECTORIES.to_string());
    dirs
}

fn preprocessor_definitions(
    module: &Module,
    rules: &BuildRules,
    dependencies: &[DependencyModule],
    configuration: Configuration,
) -> Vec<String> {
    let symbol = rules.symbol_for(module.name());
    let mut defines = vec![format!("{symbol}_API={EXPORT_ANNOTATION}"), format!("{symbol}_BUILD")];
    defines.extend(rules.additional_defines.iter().cloned());
    defines.extend(
        dependencies
            .iter()
            .map(|d| d.symbol.to_uppercase())
            .filter(|dep| *dep != symbol)
            .map(|dep| format!("{dep}_API={IMPORT_ANNOTATION}")),
    );
    defines.push(if configuration.is_release() { "NDEBUG" } else { "_DEBUG" }.to_string());
    defines.extend(PLATFORM_MARKERS.iter().map(ToString::to_string));
    defines.push(INHERIT_PREPROCESSOR_DEFINITIONS.to_string());
    defines
}

fn link_libraries(rules: &BuildRules) -> Vec<String> {
    if rules.additional_libraries.is_empty() {
        return Vec::new();
    }
    let mut libraries: Vec<String> = rules.additional_libraries.iter().cloned().collect();
    for base in BASE_LIBRARIES {
        if !libraries.iter().any(|lib| lib.eq_ignore_ascii_case(base)) {
            libraries.push(base.to_string());
        }
    }
    libraries.push(INHERIT_ADDITIONAL_DEPENDENCIES.to_string());
    libraries
}
