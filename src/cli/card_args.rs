//! Card state flags shared by the export and share commands.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{CardState, RgbColor};

/// Card content options (defaults come from the config file).
#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    /// Caption text (empty input falls back to the placeholder)
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub caption: Option<String>,

    /// Caption text color as hex (e.g. "#FFFFFF")
    #[arg(long, value_name = "HEX")]
    pub text_color: Option<String>,

    /// Card background color as hex (e.g. "#0B0E11")
    #[arg(long, value_name = "HEX")]
    pub background_color: Option<String>,
}

impl CardArgs {
    /// Builds a card from the config defaults plus these overrides.
    ///
    /// Caption rules (placeholder, truncation) apply to the flag value the
    /// same way they apply to interactive edits.
    pub fn build_card(&self, config: &Config) -> CliResult<CardState> {
        let text_color = match &self.text_color {
            Some(hex) => parse_color(hex)?,
            None => config
                .card
                .text_color()
                .map_err(|e| CliError::validation(format!("{e:#}")))?,
        };
        let background_color = match &self.background_color {
            Some(hex) => parse_color(hex)?,
            None => config
                .card
                .background_color()
                .map_err(|e| CliError::validation(format!("{e:#}")))?,
        };

        let caption = self.caption.as_deref().unwrap_or_default();
        Ok(CardState::with_content(text_color, background_color, caption))
    }
}

fn parse_color(hex: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(hex).map_err(|e| CliError::validation(format!("{e:#}")))
}
