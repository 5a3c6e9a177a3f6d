//! Status bar at the bottom of the main screen.
//!
//! Shows the active target, the color it would receive, the caption
//! budget, key hints, and the latest status or error message.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::MAX_CAPTION_LEN;
use crate::models::Target;

use super::{AppState, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Selection summary
                Constraint::Length(1), // Key hints
                Constraint::Length(1), // Status / error message
            ])
            .split(inner);

        // Selection summary
        let target_label = match state.card.selected {
            Some(Target::Text) => "text",
            Some(Target::Background) => "background",
            None => "none",
        };
        let caption_len = state.card.caption().chars().count();
        let summary = Line::from(vec![
            Span::styled("Target: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                target_label,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Color: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                state.card.active_color().to_hex(),
                Style::default().fg(theme.text),
            ),
            Span::raw("   "),
            Span::styled("Caption: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{caption_len}/{MAX_CAPTION_LEN}"),
                Style::default().fg(theme.text),
            ),
        ]);
        f.render_widget(Paragraph::new(summary), rows[0]);

        // Key hints
        let hints = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" target  "),
            Span::styled("←→↑↓", Style::default().fg(theme.accent)),
            Span::raw(" swatches  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" apply  "),
            Span::styled("c", Style::default().fg(theme.accent)),
            Span::raw(" custom  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" download  "),
            Span::styled("s", Style::default().fg(theme.accent)),
            Span::raw(" share  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" deselect  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ]);
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme.text_muted)),
            rows[1],
        );

        // Status or error message
        let message = state.error_message.as_ref().map_or_else(
            || {
                Paragraph::new(state.status_message.as_str())
                    .style(Style::default().fg(theme.text))
            },
            |error| {
                Paragraph::new(error.as_str()).style(
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )
            },
        );
        f.render_widget(message, rows[2]);
    }
}
