//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `projgen`.
#[derive(Debug, Parser)]
#[command(name = "projgen", version, about = "Generate MSBuild project files for native modules")]
pub struct Cli {
    /// Log debug detail to stderr (overrides `PROJGEN_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate `.vcxproj` and `.vcxproj.filters` files for every module in a manifest.
    Generate {
        /// Path to the workspace manifest (YAML).
        manifest: PathBuf,
        /// Output root, overriding the manifest's `output`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Use sequential GUIDs so reruns produce identical files.
        #[arg(long)]
        deterministic_ids: bool,
        /// Generate without writing anything to disk.
        #[arg(long)]
        dry_run: bool,
    },
    /// Show how a module's files are classified.
    Catalog {
        /// Path to the workspace manifest (YAML).
        manifest: PathBuf,
        /// Module name as listed in the manifest.
        module: String,
    },
}
