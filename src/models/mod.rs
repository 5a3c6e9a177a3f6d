//! Data models for the card, colors, and preset palettes.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and export logic.

pub mod card;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use card::{CaptionEdit, CardState, Target};
pub use palette::{Palette, PaletteGroup, Swatch};
pub use rgb::RgbColor;
