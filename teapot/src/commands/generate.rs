use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use teapot_codegen::{GeneratedFile, Stamp, StatusCodeRs};

use super::load_merged;

#[derive(Args)]
pub(crate) struct GenerateCommand {
    /// Path to a registry snapshot (defaults to the bundled IANA snapshot)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Directory the generated file is written into
    #[arg(long, default_value = "src")]
    out: PathBuf,

    /// Print the generated file instead of writing it
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (snapshot, table) = load_merged(self.registry.as_deref());
        let file = StatusCodeRs::new(&table, snapshot.last_updated(), Stamp::now());

        if self.dry_run {
            print!("{}", file.render());
            return Ok(());
        }

        file.write(&self.out)?;
        println!(
            "Generated {} ({} status codes)",
            file.path(&self.out).display(),
            table.len()
        );
        Ok(())
    }
}
