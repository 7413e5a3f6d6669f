//! `projgen generate` command.

use std::io::Write;
use std::path::PathBuf;

use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::memory::OverlayFileSystem;
use crate::context::ServiceContext;
use crate::workspace::{ModuleOutcome, Workspace};

/// Options for the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Manifest path.
    pub manifest: PathBuf,
    /// Output root override.
    pub output: Option<PathBuf>,
    /// Use sequential GUIDs.
    pub deterministic_ids: bool,
    /// Keep writes in memory.
    pub dry_run: bool,
}

/// Execute the `generate` command.
///
/// Prints each written path on stdout, one per line, and a summary on
/// stderr.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded or any module
/// fails to generate.
pub fn run(options: &GenerateOptions) -> Result<(), String> {
    let ctx = context_for(options);
    let outcomes = run_with_context(&ctx, options)?;
    let mut stdout = std::io::stdout().lock();
    let failed = report(&mut stdout, &outcomes, options.dry_run)
        .map_err(|e| format!("failed to write output: {e}"))?;
    if failed > 0 {
        return Err(format!("{failed} of {} module(s) failed", outcomes.len()));
    }
    Ok(())
}

fn context_for(options: &GenerateOptions) -> ServiceContext {
    if options.dry_run {
        let ctx = ServiceContext::with_filesystem(Box::new(OverlayFileSystem::new()));
        if options.deterministic_ids {
            ctx
        } else {
            ctx.with_id_generator(Box::new(LiveIdGenerator::new()))
        }
    } else if options.deterministic_ids {
        ServiceContext::deterministic()
    } else {
        ServiceContext::live()
    }
}

/// Loads the manifest through `ctx` and generates every module.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded.
pub fn run_with_context(
    ctx: &ServiceContext,
    options: &GenerateOptions,
) -> Result<Vec<ModuleOutcome>, String> {
    let mut workspace =
        Workspace::load(ctx.fs.as_ref(), &options.manifest).map_err(|e| e.to_string())?;
    if let Some(output) = &options.output {
        workspace = workspace.with_output_root(output.clone());
    }
    Ok(workspace.generate_all(ctx.fs.as_ref(), ctx.id_gen.as_ref()))
}

/// Prints written paths to `out` and failures to stderr. Returns the
/// number of failed modules.
fn report(
    out: &mut impl Write,
    outcomes: &[ModuleOutcome],
    dry_run: bool,
) -> std::io::Result<usize> {
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(generated) => {
                writeln!(out, "{}", generated.reference.file_path.display())?;
                writeln!(out, "{}", generated.filters_path.display())?;
            }
            Err(err) => {
                failed += 1;
                eprintln!("error: {}: {err}", outcome.name);
            }
        }
    }

    let verb = if dry_run { "Would generate" } else { "Generated" };
    eprintln!("{verb} {} of {} modules", outcomes.len() - failed, outcomes.len());
    Ok(failed)
}
