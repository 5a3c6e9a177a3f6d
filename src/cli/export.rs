//! Export command: write the card as a PNG (the download path).

use clap::Args;
use std::path::PathBuf;

use crate::cli::card_args::CardArgs;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::ExportPipeline;

/// Render the card and write `card.png`
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    card: CardArgs,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// The download path has no fallback: any capture or write failure
    /// propagates as a non-zero exit.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let card = self.card.build_card(&config)?;

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        let path = ExportPipeline::download(&card, &output_dir)
            .map_err(|e| CliError::io(format!("Failed to export card: {e:#}")))?;

        println!("✓ Exported card to: {}", path.display());
        Ok(())
    }
}
