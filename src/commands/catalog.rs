//! `projgen catalog` command.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::generator::ProjectGenerator;
use crate::module::FileCatalog;
use crate::workspace::Workspace;

/// Execute the `catalog` command: list a module's files by classification.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded, the module is
/// not listed, or its source directory cannot be read.
pub fn run(manifest: &Path, module: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let (source, catalog) = load(&ctx, manifest, module)?;
    let mut stdout = std::io::stdout().lock();
    print_catalog(&mut stdout, &source, &catalog).map_err(|e| format!("failed to write output: {e}"))
}

fn load(
    ctx: &ServiceContext,
    manifest: &Path,
    module: &str,
) -> Result<(PathBuf, FileCatalog), String> {
    let workspace = Workspace::load(ctx.fs.as_ref(), manifest).map_err(|e| e.to_string())?;
    let entry = workspace
        .entry(module)
        .ok_or_else(|| format!("module {module} is not listed in {}", manifest.display()))?;
    let generator =
        ProjectGenerator::new(ctx.fs.as_ref(), workspace.module(entry)).map_err(|e| e.to_string())?;
    Ok((generator.module().source_directory().to_path_buf(), generator.catalog().clone()))
}

fn print_catalog(out: &mut impl Write, source: &Path, catalog: &FileCatalog) -> std::io::Result<()> {
    let sections = [("Compilable", catalog.compilable()), ("Non-compilable", catalog.non_compilable())];
    for (title, files) in sections {
        writeln!(out, "{title} ({}):", files.len())?;
        for file in files {
            writeln!(out, "  {}", file.strip_prefix(source).unwrap_or(file).display())?;
        }
    }
    Ok(())
}
