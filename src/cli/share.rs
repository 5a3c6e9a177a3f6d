//! Share command: offer the card to the platform share facility, with the
//! compose-URL fallback.

use clap::Args;

use crate::cli::card_args::CardArgs;
use crate::cli::common::CliResult;
use crate::config::Config;
use crate::constants::{FALLBACK_HASHTAG, PROMO_MESSAGE};
use crate::export::{intent_url, ExportPipeline, ShareOutcome, SystemNavigator, SystemShare};

/// Share the card (native share when available, compose URL otherwise)
#[derive(Debug, Clone, Args)]
pub struct ShareArgs {
    #[command(flatten)]
    card: CardArgs,

    /// Open the promotional compose message instead of sharing the card
    #[arg(long)]
    pub promo: bool,

    /// Print the compose URL instead of opening a browser
    #[arg(long)]
    pub print_url: bool,
}

impl ShareArgs {
    /// Execute the share command.
    ///
    /// Every failure inside the share flow is contained and degrades to
    /// the compose URL; this command only fails on invalid arguments.
    pub fn execute(&self) -> CliResult<()> {
        let message = if self.promo {
            PROMO_MESSAGE
        } else {
            FALLBACK_HASHTAG
        };

        if self.print_url {
            println!("{}", intent_url(message));
            return Ok(());
        }

        let navigator = SystemNavigator;
        let target = SystemShare;
        let pipeline = ExportPipeline::new(&navigator, &target);

        if self.promo {
            pipeline.open_fallback(PROMO_MESSAGE);
            println!("✓ Opened compose window in your browser");
            return Ok(());
        }

        let config = Config::load().unwrap_or_default();
        let card = self.card.build_card(&config)?;

        match pipeline.share(&card) {
            ShareOutcome::Shared => println!("✓ Card shared"),
            ShareOutcome::FallbackOpened => {
                println!("✓ Opened compose window in your browser");
            }
        }
        Ok(())
    }
}
