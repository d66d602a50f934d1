mod check;
mod generate;
mod list;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use teapot_registry::{MergedTable, RegistrySnapshot, curated, merge};

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for teapot_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load a registry snapshot (bundled when no path is given) and merge it
/// with the curated extension cases and name overrides.
pub(crate) fn load_merged(registry: Option<&Path>) -> (RegistrySnapshot, MergedTable) {
    let snapshot = match registry {
        Some(path) => RegistrySnapshot::load(path).unwrap_or_exit(),
        None => RegistrySnapshot::bundled().unwrap_or_exit(),
    };
    let extras = curated::curated_cases().unwrap_or_exit();
    let table = merge(snapshot.entries(), &curated::name_overrides(), &extras).unwrap_or_exit();
    (snapshot, table)
}

#[derive(Parser)]
#[command(name = "teapot")]
#[command(version)]
#[command(about = "Generate a documented HTTP status-code enum from a registry snapshot")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the status-code enum source file
    Generate(GenerateCommand),

    /// Validate the registry snapshot and merge without generating code
    Check(CheckCommand),

    /// List the merged status-code table
    List(ListCommand),
}
