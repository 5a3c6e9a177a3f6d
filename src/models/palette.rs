//! Preset color palettes for the color selector.
//!
//! Palettes are a static mapping from a group name to an ordered list of
//! swatches, embedded as JSON and loaded once at startup. The data is
//! read-only; the selector never mutates it.

use serde::Deserialize;

use super::RgbColor;

/// The complete set of preset palettes.
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    /// Palette groups in display order.
    pub groups: Vec<PaletteGroup>,
}

/// A named group of preset colors.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteGroup {
    /// Display name of the group (e.g., "Calming").
    pub name: String,
    /// Swatches in display order.
    pub swatches: Vec<Swatch>,
}

/// A single preset color.
#[derive(Debug, Clone, Deserialize)]
pub struct Swatch {
    /// Hex color code (e.g., "#264653").
    pub hex: String,
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Swatch {
    /// Convert this swatch to an `RgbColor`.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

impl PaletteGroup {
    /// Get a swatch by index.
    #[must_use]
    pub fn swatch_at(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    /// Get the number of swatches.
    #[must_use]
    pub fn swatch_count(&self) -> usize {
        self.swatches.len()
    }
}

impl Palette {
    /// Load the palettes from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/palette.json");
        let palette: Self = serde_json::from_str(json_data)?;
        Ok(palette)
    }

    /// Get a group by index.
    #[must_use]
    pub fn group_at(&self, index: usize) -> Option<&PaletteGroup> {
        self.groups.get(index)
    }

    /// Get the number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether any preset swatch matches the given color.
    #[must_use]
    pub fn contains(&self, color: RgbColor) -> bool {
        self.groups
            .iter()
            .flat_map(|g| g.swatches.iter())
            .any(|s| s.to_rgb() == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { groups: Vec::new() })
    }
}
