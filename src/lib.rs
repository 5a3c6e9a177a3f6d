//! makecard library
//!
//! Core functionality for the makecard terminal studio: card state and
//! palettes, the TUI editor, and the PNG export and share pipelines.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod tui;
