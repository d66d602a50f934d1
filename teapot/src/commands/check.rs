use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use teapot_registry::{RegistrySnapshot, curated, merge};

use super::UnwrapOrExit;

#[derive(Args)]
pub(crate) struct CheckCommand {
    /// Path to a registry snapshot (defaults to the bundled IANA snapshot)
    #[arg(long)]
    registry: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let snapshot = match &self.registry {
            Some(path) => RegistrySnapshot::load(path).unwrap_or_exit(),
            None => RegistrySnapshot::bundled().unwrap_or_exit(),
        };
        let overrides = curated::name_overrides();
        let extras = curated::curated_cases().unwrap_or_exit();
        let table = merge(snapshot.entries(), &overrides, &extras).unwrap_or_exit();

        println!(
            "registry snapshot: {} entries (last updated: {})",
            snapshot.entries().len(),
            snapshot.last_updated()
        );
        println!("name overrides: {}", overrides.len());
        println!("curated extensions: {}", extras.len());
        println!("ok: {} status codes ready to render", table.len());
        Ok(())
    }
}
