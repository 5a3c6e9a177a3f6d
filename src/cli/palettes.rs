//! Palettes command: list the preset color palettes.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::models::Palette;

/// List the preset color palettes
#[derive(Debug, Clone, Args)]
pub struct PalettesArgs {}

impl PalettesArgs {
    /// Execute the palettes command.
    pub fn execute(&self) -> CliResult<()> {
        let palette =
            Palette::load().map_err(|e| CliError::io(format!("Failed to load palettes: {e:#}")))?;

        for group in &palette.groups {
            println!("{}", group.name);
            for swatch in &group.swatches {
                println!("  {}", swatch.hex);
            }
        }
        Ok(())
    }
}
