//! Card state: colors, caption, and the active edit target.
//!
//! The card is the unit of export: a 16:9 rectangle with a background color
//! and a single caption line in the text color. All state here is transient
//! and UI-local; nothing is persisted across sessions.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR, MAX_CAPTION_LEN, PLACEHOLDER_CAPTION,
};

use super::RgbColor;

/// Which visual property currently receives color edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// The caption text color
    Text,
    /// The card background color
    Background,
}

/// Outcome of a caption edit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionEdit {
    /// Input was within limits and committed as-is
    Accepted,
    /// Input exceeded the maximum length and was cut to the first
    /// `MAX_CAPTION_LEN` characters
    Truncated,
    /// Input was empty after trimming; the placeholder was restored
    Reverted,
}

/// The card being designed: colors, caption, and selection.
///
/// Invariants:
/// - the rendered caption is never empty (an empty edit restores the placeholder)
/// - the caption never exceeds `MAX_CAPTION_LEN` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Caption text color
    pub text_color: RgbColor,
    /// Card background color
    pub background_color: RgbColor,
    /// Currently selected edit target, if any
    pub selected: Option<Target>,
    caption: String,
}

impl CardState {
    /// Creates a card with the default colors and the placeholder caption.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_color: RgbColor::from_hex(DEFAULT_TEXT_COLOR).unwrap_or_default(),
            background_color: RgbColor::from_hex(DEFAULT_BACKGROUND_COLOR)
                .unwrap_or(RgbColor::new(11, 14, 17)),
            selected: None,
            caption: PLACEHOLDER_CAPTION.to_string(),
        }
    }

    /// Creates a card with explicit colors and caption (caption rules apply).
    #[must_use]
    pub fn with_content(text_color: RgbColor, background_color: RgbColor, caption: &str) -> Self {
        let mut card = Self {
            text_color,
            background_color,
            selected: None,
            caption: String::new(),
        };
        card.set_caption(caption);
        card
    }

    /// The committed caption. Never empty, never longer than the maximum.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Whether the caption is the untouched placeholder.
    ///
    /// The first printable keystroke replaces a placeholder caption instead
    /// of appending to it.
    #[must_use]
    pub fn caption_is_placeholder(&self) -> bool {
        self.caption == PLACEHOLDER_CAPTION
    }

    /// Commits a caption edit event.
    ///
    /// Empty-after-trim input restores the placeholder; input within the
    /// maximum is committed as-is; longer input is cut to the first
    /// `MAX_CAPTION_LEN` characters. The committed value is readable via
    /// [`caption`](Self::caption) immediately, within the same event.
    pub fn set_caption(&mut self, input: &str) -> CaptionEdit {
        if input.trim().is_empty() {
            self.caption = PLACEHOLDER_CAPTION.to_string();
            return CaptionEdit::Reverted;
        }

        if input.chars().count() <= MAX_CAPTION_LEN {
            self.caption = input.to_string();
            return CaptionEdit::Accepted;
        }

        self.caption = input.chars().take(MAX_CAPTION_LEN).collect();
        CaptionEdit::Truncated
    }

    /// Marks the given element as the active color target.
    pub fn select(&mut self, target: Target) {
        self.selected = Some(target);
    }

    /// Clears the selection (no element receives color edits).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether the caption is currently editable (text target selected).
    #[must_use]
    pub const fn is_editing_text(&self) -> bool {
        matches!(self.selected, Some(Target::Text))
    }

    /// Applies a color to the currently selected target.
    ///
    /// Returns `false` when no target is selected; the card is unchanged.
    pub fn apply_color(&mut self, color: RgbColor) -> bool {
        match self.selected {
            Some(Target::Text) => {
                self.text_color = color;
                true
            }
            Some(Target::Background) => {
                self.background_color = color;
                true
            }
            None => false,
        }
    }

    /// The color the selector should display as active: the channel of the
    /// selected target, falling back to the background color.
    #[must_use]
    pub const fn active_color(&self) -> RgbColor {
        match self.selected {
            Some(Target::Text) => self.text_color,
            _ => self.background_color,
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
