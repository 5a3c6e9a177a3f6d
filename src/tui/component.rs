//! Component trait pattern for TUI popups.
//!
//! Popup components are self-contained: they manage their own state,
//! handle keyboard input, and emit events to communicate with the parent.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::RgbColor;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components and processed by the parent.
#[derive(Debug, Clone)]
pub enum ComponentEvent {
    /// User picked a color
    ColorSelected(RgbColor),
    /// User cancelled without making changes
    Cancelled,
}
