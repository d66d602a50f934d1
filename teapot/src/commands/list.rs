use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use teapot_core::to_variant_name;

use super::load_merged;

#[derive(Args)]
pub(crate) struct ListCommand {
    /// Path to a registry snapshot (defaults to the bundled IANA snapshot)
    #[arg(long)]
    registry: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (_, table) = load_merged(self.registry.as_deref());

        for case in table.iter() {
            println!(
                "{:>3}  {:<36} {}",
                case.code(),
                to_variant_name(case.name()),
                case.name()
            );
        }
        Ok(())
    }
}
