//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. Mouse capture doubles as the
//! screen-level click listener: it is registered in `setup_terminal` and
//! symmetrically deregistered in `restore_terminal`.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod card;
pub mod color_picker;
pub mod color_selector;
pub mod component;
pub mod handlers;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::models::{CardState, Palette, RgbColor, Target};

// Re-export TUI components
pub use card::CardWidget;
pub use color_picker::ColorPicker;
pub use color_selector::{ColorSelectorWidget, SelectorLayout, SwatchCursor};
pub use component::{Component, ComponentEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Screen regions computed once per frame and shared between rendering
/// and mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegions {
    /// Title bar.
    pub title: Rect,
    /// Color selector strip (swatches + custom row).
    pub selector: Rect,
    /// Area the card is centered in.
    pub card_outer: Rect,
    /// The card itself.
    pub card: Rect,
    /// The caption line inside the card.
    pub caption: Rect,
    /// Status bar.
    pub status: Rect,
    /// Selector internals (per-swatch cells, custom row).
    pub selector_layout: SelectorLayout,
}

impl ScreenRegions {
    /// Splits the screen and resolves the card and selector geometry.
    #[must_use]
    pub fn compute(area: Rect, palette: &Palette, caption_display_len: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(7), // Color selector
                Constraint::Min(9),    // Card
                Constraint::Length(5), // Status bar
            ])
            .split(area);

        let card = CardWidget::card_rect(chunks[2]);
        let caption = CardWidget::caption_rect(card, caption_display_len);

        Self {
            title: chunks[0],
            selector: chunks[1],
            card_outer: chunks[2],
            card,
            caption,
            status: chunks[3],
            selector_layout: SelectorLayout::compute(chunks[1], palette),
        }
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    /// The card being designed
    pub card: CardState,
    /// Preset palettes
    pub palette: Palette,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Keyboard cursor over the swatch grid
    pub cursor: SwatchCursor,
    /// Currently open custom color picker (if any)
    pub active_picker: Option<ColorPicker>,
    /// Per-frame screen regions for rendering and hit-testing
    pub regions: ScreenRegions,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the palettes fail to load or the configured
    /// default colors are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let palette = Palette::load().context("Failed to load color palettes")?;

        let mut card = CardState::new();
        card.text_color = config.card.text_color()?;
        card.background_color = config.card.background_color()?;

        let theme = Theme::from_mode(config.ui.theme_mode);

        Ok(Self {
            card,
            palette,
            config,
            theme,
            cursor: SwatchCursor::default(),
            active_picker: None,
            regions: ScreenRegions::default(),
            status_message: "Click the card or press Tab to choose a target".to_string(),
            error_message: None,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Applies a color to the active target, reporting what happened.
    pub fn apply_selected_color(&mut self, color: RgbColor) {
        if self.card.apply_color(color) {
            let target = match self.card.selected {
                Some(Target::Text) => "text",
                _ => "background",
            };
            self.set_status(format!("Set {target} color to {}", color.to_hex()));
        } else {
            self.set_status("Select the text or background first");
        }
    }

    /// Opens the custom color picker seeded with the active color.
    pub fn open_color_picker(&mut self) {
        self.active_picker = Some(ColorPicker::new(self.card.active_color()));
    }

    /// Closes the custom color picker.
    pub fn close_picker(&mut self) {
        self.active_picker = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Recompute regions so rendering and hit-testing agree
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let caption_len = CardWidget::display_caption(state).chars().count() as u16;
        state.regions = ScreenRegions::compute(area, &state.palette, caption_len);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                _ => {
                    // Resize and other events re-render on the next loop
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    render_title_bar(f, state.regions.title, state);
    ColorSelectorWidget::render(f, state);
    CardWidget::render(f, state);
    StatusBar::render(f, state.regions.status, state, &state.theme);

    // Render popup if active
    if let Some(picker) = &state.active_picker {
        picker.render(f, f.area(), &state.theme);
    }

    // Render error overlay on top of everything if an error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the app name and current caption
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} — {} ", crate::constants::APP_NAME, state.card.caption());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(2), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background));
    f.render_widget(help, chunks[2]);
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
