//! Command dispatch and handlers.

pub mod catalog;
pub mod generate;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate { manifest, output, deterministic_ids, dry_run } => {
            generate::run(&generate::GenerateOptions {
                manifest: manifest.clone(),
                output: output.clone(),
                deterministic_ids: *deterministic_ids,
                dry_run: *dry_run,
            })
        }
        Command::Catalog { manifest, module } => catalog::run(manifest, module),
    }
}
