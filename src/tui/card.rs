//! Card widget: the 16:9 editable card with background fill, centered
//! caption, and selection rings.
//!
//! Terminal cells are roughly twice as tall as wide, so a 16:9 card is
//! drawn at a 32:9 cell ratio. The geometry helpers here are shared with
//! the mouse hit-testing in the handlers so that what you click is what
//! gets selected.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Target;

use super::AppState;

/// Caret glyph shown while the caption is being edited.
const CARET: char = '█';

/// Card widget renders the card and its selection state.
pub struct CardWidget;

impl CardWidget {
    /// Largest 16:9 card (32:9 in cells) centered in `outer`.
    #[must_use]
    pub fn card_rect(outer: Rect) -> Rect {
        if outer.width == 0 || outer.height == 0 {
            return outer;
        }

        let mut width = outer.width;
        let mut height = (u32::from(width) * 9 / 32) as u16;
        if height > outer.height || height == 0 {
            height = outer.height;
            width = ((u32::from(height) * 32 / 9) as u16).min(outer.width);
        }
        let height = height.max(3).min(outer.height);

        Rect {
            x: outer.x + (outer.width - width) / 2,
            y: outer.y + (outer.height - height) / 2,
            width,
            height,
        }
    }

    /// Rect around the caption line, used for the text ring and hit-testing.
    #[must_use]
    pub fn caption_rect(card: Rect, display_len: u16) -> Rect {
        let width = (display_len + 4).min(card.width);
        let height = 3.min(card.height);
        let x = card.x + (card.width - width) / 2;
        let y = (card.y + card.height / 2).saturating_sub(1).max(card.y);

        Rect {
            x,
            y,
            width,
            height: height.min(card.bottom().saturating_sub(y)),
        }
    }

    /// Caption as displayed: the committed text plus a caret while editing.
    #[must_use]
    pub fn display_caption(state: &AppState) -> String {
        if state.card.is_editing_text() {
            format!("{}{CARET}", state.card.caption())
        } else {
            state.card.caption().to_string()
        }
    }

    /// Render the card into the precomputed screen regions.
    pub fn render(f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let card_area = state.regions.card;
        let caption_area = state.regions.caption;
        if card_area.width == 0 || card_area.height == 0 {
            return;
        }

        let bg = state.card.background_color.to_ratatui_color();
        let fg = state.card.text_color.to_ratatui_color();

        // Background fill, ringed when the background is the active target
        let mut block = Block::default().style(Style::default().bg(bg));
        if state.card.selected == Some(Target::Background) {
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
        }
        f.render_widget(block, card_area);

        // Caption, ringed and carated while the text is the active target
        let caption = Self::display_caption(state);
        let caption_style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);

        if state.card.selected == Some(Target::Text) {
            let ring = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(bg));
            let inner = ring.inner(caption_area);
            f.render_widget(ring, caption_area);
            f.render_widget(
                Paragraph::new(caption)
                    .alignment(Alignment::Center)
                    .style(caption_style),
                inner,
            );
        } else {
            // Middle line of the caption area
            let line = Rect {
                x: caption_area.x,
                y: caption_area.y + caption_area.height / 2,
                width: caption_area.width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(caption)
                    .alignment(Alignment::Center)
                    .style(caption_style),
                line,
            );
        }
    }
}
