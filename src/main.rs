//! makecard - terminal studio for designing and exporting caption cards
//!
//! Pick text and background colors, edit the caption in place, then
//! download the card as a PNG or share it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use makecard::cli::{CliResult, ExportArgs, PalettesArgs, ShareArgs};
use makecard::config::Config;
use makecard::constants::APP_NAME;
use makecard::tui;

/// makecard - terminal studio for designing and exporting caption cards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the card and write card.png
    Export(ExportArgs),
    /// Share the card (native share when available, compose URL otherwise)
    Share(ShareArgs),
    /// List the preset color palettes
    Palettes(PalettesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export(args)) => finish(args.execute()),
        Some(Commands::Share(args)) => finish(args.execute()),
        Some(Commands::Palettes(args)) => finish(args.execute()),
        None => run_editor(),
    }
}

/// Launches the interactive editor.
fn run_editor() -> Result<()> {
    // Fall back to defaults when no config file exists yet
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: Failed to load config: {err:#}");
            eprintln!("Starting {APP_NAME} with default settings.");
            Config::default()
        }
    };

    let mut state = tui::AppState::new(config)?;
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;
    result
}

/// Maps a CLI result to the process exit code.
fn finish(result: CliResult<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
