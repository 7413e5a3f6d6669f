//! Generates both descriptors for one module.

use std::path::PathBuf;

use crate::assemble::{assemble_filters, assemble_project};
use crate::dependency::{DependencyModule, ProjectReference};
use crate::error::GenerateError;
use crate::filters::build_filters;
use crate::module::{FileCatalog, Module};
use crate::ports::{FileSystem, IdGenerator};
use crate::rules::{BuildRules, Toolset};
use crate::settings::resolve_all;
use crate::writer;

/// Extension of the project descriptor.
pub const PROJECT_EXTENSION: &str = "vcxproj";

/// Result of generating one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// The written project, for the caller.
    pub reference: ProjectReference,
    /// The view dependants pass back in as a dependency.
    pub dependency: DependencyModule,
    /// Where the filter descriptor was written.
    pub filters_path: PathBuf,
}

/// Generator for a single module.
///
/// The module's files are listed and partitioned once, on construction.
pub struct ProjectGenerator<'a> {
    fs: &'a dyn FileSystem,
    module: Module,
    catalog: FileCatalog,
}

impl<'a> ProjectGenerator<'a> {
    /// Lists and partitions the module's files.
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory cannot be listed.
    pub fn new(fs: &'a dyn FileSystem, module: Module) -> Result<Self, GenerateError> {
        let files = fs
            .list_files(module.source_directory())
            .map_err(|e| GenerateError::io("failed to list", module.source_directory(), e))?;
        let catalog = FileCatalog::partition(files);
        tracing::debug!(
            module = module.name(),
            compilable = catalog.compilable().len(),
            other = catalog.non_compilable().len(),
            "catalogued files"
        );
        Ok(Self { fs, module, catalog })
    }

    /// The module being generated.
    #[must_use]
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// The module's partitioned files.
    #[must_use]
    pub fn catalog(&self) -> &FileCatalog {
        &self.catalog
    }

    /// Writes `{name}.vcxproj` and `{name}.vcxproj.filters`.
    ///
    /// `dependencies` must all have been generated already; they are used in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SelfDependency`] if the module's own symbol
    /// appears among the dependencies, or any listing, placement, or write
    /// error.
    pub fn generate(
        &self,
        id_gen: &dyn IdGenerator,
        rules: &BuildRules,
        toolset: Toolset,
        dependencies: &[DependencyModule],
    ) -> Result<GeneratedModule, GenerateError> {
        let symbol = rules.symbol_for(self.module.name());
        if dependencies.iter().any(|d| d.symbol.eq_ignore_ascii_case(&symbol)) {
            return Err(GenerateError::SelfDependency(self.module.name().to_string()));
        }
        let relative_output = self.module.relative_output_directory()?;

        let filters = build_filters(self.fs, id_gen, self.module.source_directory())?;
        let settings = resolve_all(&self.module, rules, &self.catalog, dependencies);
        let project = assemble_project(&settings, &self.catalog, toolset, id_gen);
        let filter_document = assemble_filters(&self.module, &filters, &self.catalog);

        let project_file = format!("{}.{PROJECT_EXTENSION}", self.module.name());
        let project_path = writer::write(
            self.fs,
            &project.document,
            self.module.output_root(),
            &relative_output,
            &project_file,
        )?;
        let filters_path = writer::write(
            self.fs,
            &filter_document,
            self.module.output_root(),
            &relative_output,
            &format!("{project_file}.filters"),
        )?;

        let reference =
            ProjectReference { file_path: project_path, project_identifier: project.project_identifier };
        let dependency = reference.clone().into_dependency(symbol, self.module.public_directory());
        Ok(GeneratedModule { reference, dependency, filters_path })
    }
}
