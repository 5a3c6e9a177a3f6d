//! CLI command handlers for makecard.
//!
//! This module provides headless, scriptable access to the export and
//! share pipelines for automation, testing, and CI integration.

pub mod card_args;
pub mod common;
pub mod export;
pub mod palettes;
pub mod share;

// Re-export types used by main.rs and tests
pub use card_args::CardArgs;
pub use common::{CliError, CliResult};
pub use export::ExportArgs;
pub use palettes::PalettesArgs;
pub use share::ShareArgs;
