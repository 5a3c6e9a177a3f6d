//! Custom color picker dialog with RGB sliders.
//!
//! The terminal analogue of a native color input: fine-tune red, green,
//! and blue channels, preview the result, and apply or cancel. The picker
//! never decides what the color applies to; the parent routes the emitted
//! event by the current selection.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::models::RgbColor;

use super::component::{Component, ComponentEvent};
use super::Theme;

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red color channel
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

/// Custom RGB color picker popup.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    /// Red channel value (0-255)
    pub r: u8,
    /// Green channel value (0-255)
    pub g: u8,
    /// Blue channel value (0-255)
    pub b: u8,
    /// Currently active channel for editing
    pub active_channel: RgbChannel,
}

impl ColorPicker {
    /// Create a picker initialized with a specific color.
    #[must_use]
    pub const fn new(color: RgbColor) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            active_channel: RgbChannel::Red,
        }
    }

    /// Get the current color
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    /// Switch to next channel (Red -> Green -> Blue -> Red)
    pub const fn next_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Green,
            RgbChannel::Green => RgbChannel::Blue,
            RgbChannel::Blue => RgbChannel::Red,
        };
    }

    /// Switch to previous channel (Red -> Blue -> Green -> Red)
    pub const fn previous_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Blue,
            RgbChannel::Green => RgbChannel::Red,
            RgbChannel::Blue => RgbChannel::Green,
        };
    }

    /// Increase the active channel value
    pub const fn increase_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_add(amount),
            RgbChannel::Green => self.g = self.g.saturating_add(amount),
            RgbChannel::Blue => self.b = self.b.saturating_add(amount),
        }
    }

    /// Decrease the active channel value
    pub const fn decrease_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_sub(amount),
            RgbChannel::Green => self.g = self.g.saturating_sub(amount),
            RgbChannel::Blue => self.b = self.b.saturating_sub(amount),
        }
    }
}

impl Component for ColorPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => Some(ComponentEvent::ColorSelected(self.color())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.increase_value(10);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.decrease_value(10);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.increase_value(1);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.decrease_value(1);
                None
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_channel();
                } else {
                    self.next_channel();
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 60, area);

        // Clear the background area first
        f.render_widget(Clear, area);

        // Render opaque background with theme color
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Red slider
                Constraint::Length(3), // Green slider
                Constraint::Length(3), // Blue slider
                Constraint::Length(4), // Color preview
                Constraint::Length(3), // Hex display
                Constraint::Length(2), // Instructions
            ])
            .split(area);

        let title = Paragraph::new("Custom Color").style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(title, chunks[0]);

        render_channel_slider(
            f,
            chunks[1],
            "Red",
            self.r,
            Color::Red,
            self.active_channel == RgbChannel::Red,
            theme.text_muted,
        );
        render_channel_slider(
            f,
            chunks[2],
            "Green",
            self.g,
            Color::Green,
            self.active_channel == RgbChannel::Green,
            theme.text_muted,
        );
        render_channel_slider(
            f,
            chunks[3],
            "Blue",
            self.b,
            Color::Blue,
            self.active_channel == RgbChannel::Blue,
            theme.text_muted,
        );

        // Color preview
        let preview = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .style(Style::default().bg(self.color().to_ratatui_color()));
        f.render_widget(preview, chunks[4]);

        // Hex code display
        let hex_display = Paragraph::new(format!("  {}", self.color().to_hex()))
            .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(" Hex Code "));
        f.render_widget(hex_display, chunks[5]);

        // Instructions
        let instructions = vec![Line::from(vec![
            Span::styled("↑↓", Style::default().fg(theme.accent)),
            Span::raw(" ±10  "),
            Span::styled("←→", Style::default().fg(theme.accent)),
            Span::raw(" ±1  "),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" Channel  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" Cancel"),
        ])];
        f.render_widget(Paragraph::new(instructions), chunks[6]);
    }
}

/// Render a single channel slider
fn render_channel_slider(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: u8,
    color: Color,
    is_active: bool,
    inactive_color: Color,
) {
    let percentage = (f64::from(value) / 255.0 * 100.0) as u16;
    let label_text = format!("{label}: {value:3}");

    let style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(inactive_color)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(style)
        .label(label_text)
        .percent(percentage);

    f.render_widget(gauge, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_channel_editing() {
        let mut picker = ColorPicker::new(RgbColor::new(100, 100, 100));
        picker.handle_input(key(KeyCode::Up));
        assert_eq!(picker.r, 110);
        picker.handle_input(key(KeyCode::Tab));
        picker.handle_input(key(KeyCode::Right));
        assert_eq!(picker.g, 101);
        assert_eq!(picker.b, 100);
    }

    #[test]
    fn test_channel_saturates_at_bounds() {
        let mut picker = ColorPicker::new(RgbColor::new(250, 5, 0));
        picker.increase_value(10);
        assert_eq!(picker.r, 255);
        picker.active_channel = RgbChannel::Green;
        picker.decrease_value(10);
        assert_eq!(picker.g, 0);
    }

    #[test]
    fn test_enter_emits_selected_color() {
        let mut picker = ColorPicker::new(RgbColor::new(1, 2, 3));
        let event = picker.handle_input(key(KeyCode::Enter));
        assert!(matches!(
            event,
            Some(ComponentEvent::ColorSelected(c)) if c == RgbColor::new(1, 2, 3)
        ));
    }

    #[test]
    fn test_esc_cancels() {
        let mut picker = ColorPicker::new(RgbColor::default());
        assert!(matches!(
            picker.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        ));
    }

    #[test]
    fn test_channel_cycle() {
        let mut picker = ColorPicker::new(RgbColor::default());
        assert_eq!(picker.active_channel, RgbChannel::Red);
        picker.next_channel();
        assert_eq!(picker.active_channel, RgbChannel::Green);
        picker.next_channel();
        picker.next_channel();
        assert_eq!(picker.active_channel, RgbChannel::Red);
        picker.previous_channel();
        assert_eq!(picker.active_channel, RgbChannel::Blue);
    }
}
