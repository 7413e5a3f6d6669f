//! Core library entry for the `projgen` CLI.
//!
//! Turns a module's source tree, build rules, and already generated
//! dependencies into an MSBuild `.vcxproj` and matching `.vcxproj.filters`.
//! The pipeline runs catalog → filters and settings → assembly → write, and
//! hands back a [`ProjectReference`] for dependants.

pub mod adapters;
pub mod assemble;
pub mod cli;
pub mod commands;
pub mod context;
pub mod dependency;
pub mod document;
pub mod error;
pub mod filters;
pub mod generator;
pub mod logging;
pub mod module;
pub mod ports;
pub mod rules;
pub mod settings;
pub mod workspace;
pub mod writer;

pub use dependency::{DependencyModule, ProjectReference};
pub use error::GenerateError;
pub use generator::{GeneratedModule, ProjectGenerator};
pub use module::{FileCatalog, Module};
pub use rules::{BuildRules, Configuration, LanguageStandard, Toolset};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests are printed to stdout and are not errors.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::{logging, run};

    #[test]
    fn run_errors_on_unknown_subcommand() {
        logging::install_test_subscriber();
        let result = run(["projgen", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        logging::install_test_subscriber();
        assert!(run(["projgen", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_missing_manifest() {
        logging::install_test_subscriber();
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("missing.yaml");
        let result = run([OsStr::new("projgen"), OsStr::new("generate"), manifest.as_os_str()]);
        assert!(result.unwrap_err().contains("missing.yaml"));
    }
}
