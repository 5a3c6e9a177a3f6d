//! Color selector: preset swatch grid plus the custom color control.
//!
//! Renders one clickable swatch per preset, grouped by palette, and a
//! custom-color row that opens the RGB picker. Emits the chosen color
//! upward; which element it applies to is decided by the caller from the
//! current selection state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Palette, RgbColor};

use super::AppState;

/// Marker drawn on the swatch matching the active color.
const ACTIVE_MARKER: &str = "◆";

/// A clickable swatch region.
#[derive(Debug, Clone, Copy)]
pub struct SwatchRegion {
    /// Screen rect of the swatch cell.
    pub rect: Rect,
    /// Palette group index.
    pub group: usize,
    /// Swatch index within the group.
    pub index: usize,
}

/// Computed selector layout, shared between rendering and hit-testing.
#[derive(Debug, Clone, Default)]
pub struct SelectorLayout {
    /// Name line per group.
    pub group_names: Vec<Rect>,
    /// All swatch cells.
    pub swatches: Vec<SwatchRegion>,
    /// The custom-color row.
    pub custom: Rect,
}

impl SelectorLayout {
    /// Splits the selector area into group columns, swatch cells, and the
    /// custom row.
    #[must_use]
    pub fn compute(area: Rect, palette: &Palette) -> Self {
        if area.width == 0 || area.height < 5 || palette.group_count() == 0 {
            return Self::default();
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, palette.group_count() as u32);
                palette.group_count()
            ])
            .split(rows[0]);

        let mut group_names = Vec::with_capacity(palette.group_count());
        let mut swatches = Vec::new();

        for (group_idx, column) in columns.iter().enumerate() {
            let Some(group) = palette.group_at(group_idx) else {
                continue;
            };

            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(3)])
                .split(*column);
            group_names.push(parts[0]);

            let count = group.swatch_count();
            if count == 0 {
                continue;
            }
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, count as u32); count])
                .split(parts[1]);

            for (index, cell) in cells.iter().enumerate() {
                swatches.push(SwatchRegion {
                    rect: *cell,
                    group: group_idx,
                    index,
                });
            }
        }

        Self {
            group_names,
            swatches,
            custom: rows[1],
        }
    }

    /// The swatch region under the given screen position, if any.
    #[must_use]
    pub fn swatch_at(&self, x: u16, y: u16) -> Option<SwatchRegion> {
        self.swatches
            .iter()
            .copied()
            .find(|s| s.rect.contains(ratatui::layout::Position { x, y }))
    }
}

/// Keyboard cursor over the swatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchCursor {
    /// Palette group index.
    pub group: usize,
    /// Swatch index within the group.
    pub index: usize,
}

impl Default for SwatchCursor {
    fn default() -> Self {
        Self { group: 0, index: 0 }
    }
}

impl SwatchCursor {
    /// Moves left, wrapping into the previous group.
    pub fn move_left(&mut self, palette: &Palette) {
        if self.index > 0 {
            self.index -= 1;
        } else if self.group > 0 {
            self.group -= 1;
            self.index = palette
                .group_at(self.group)
                .map_or(0, |g| g.swatch_count().saturating_sub(1));
        }
    }

    /// Moves right, wrapping into the next group.
    pub fn move_right(&mut self, palette: &Palette) {
        let count = palette.group_at(self.group).map_or(0, |g| g.swatch_count());
        if self.index + 1 < count {
            self.index += 1;
        } else if self.group + 1 < palette.group_count() {
            self.group += 1;
            self.index = 0;
        }
    }

    /// Moves to the previous group, keeping the column where possible.
    pub fn move_up(&mut self, palette: &Palette) {
        if self.group > 0 {
            self.group -= 1;
            self.clamp(palette);
        }
    }

    /// Moves to the next group, keeping the column where possible.
    pub fn move_down(&mut self, palette: &Palette) {
        if self.group + 1 < palette.group_count() {
            self.group += 1;
            self.clamp(palette);
        }
    }

    fn clamp(&mut self, palette: &Palette) {
        let count = palette.group_at(self.group).map_or(0, |g| g.swatch_count());
        self.index = self.index.min(count.saturating_sub(1));
    }

    /// The color under the cursor.
    #[must_use]
    pub fn color(&self, palette: &Palette) -> Option<RgbColor> {
        palette
            .group_at(self.group)
            .and_then(|g| g.swatch_at(self.index))
            .map(|s| s.to_rgb())
    }
}

/// Color selector widget.
pub struct ColorSelectorWidget;

impl ColorSelectorWidget {
    /// Render the selector into the precomputed regions.
    pub fn render(f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let layout = &state.regions.selector_layout;
        let active = state.card.active_color();

        for (group_idx, name_area) in layout.group_names.iter().enumerate() {
            if let Some(group) = state.palette.group_at(group_idx) {
                let name = Paragraph::new(format!(" {}", group.name))
                    .style(Style::default().fg(theme.text_muted));
                f.render_widget(name, *name_area);
            }
        }

        for swatch_region in &layout.swatches {
            let Some(swatch) = state
                .palette
                .group_at(swatch_region.group)
                .and_then(|g| g.swatch_at(swatch_region.index))
            else {
                continue;
            };
            let rgb = swatch.to_rgb();
            let is_cursor = state.cursor.group == swatch_region.group
                && state.cursor.index == swatch_region.index;

            if is_cursor {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .style(Style::default().bg(rgb.to_ratatui_color()));
                f.render_widget(block, swatch_region.rect);
            } else {
                // Inset fill so unbordered swatches align with the cursor cell
                let inner = Rect {
                    x: swatch_region.rect.x + 1,
                    y: swatch_region.rect.y + 1,
                    width: swatch_region.rect.width.saturating_sub(2),
                    height: 1,
                };
                let fill = Block::default().style(Style::default().bg(rgb.to_ratatui_color()));
                f.render_widget(fill, inner);
            }

            if rgb == active {
                Self::render_active_marker(f, swatch_region.rect, rgb);
            }
        }

        // Custom color control with the active hex readout
        let custom = Line::from(vec![
            Span::styled("c", Style::default().fg(theme.accent)),
            Span::raw(" custom color   "),
            Span::styled(
                active.to_hex(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(custom), layout.custom);
    }

    /// Contrast-aware marker on the swatch matching the active color.
    fn render_active_marker(f: &mut Frame, cell: Rect, rgb: RgbColor) {
        if cell.width < 3 || cell.height < 3 {
            return;
        }
        let marker_fg = if rgb.luma() > 128 {
            Color::Black
        } else {
            Color::White
        };
        let marker_area = Rect {
            x: cell.x + cell.width / 2,
            y: cell.y + 1,
            width: 1,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(ACTIVE_MARKER).style(
                Style::default()
                    .fg(marker_fg)
                    .bg(rgb.to_ratatui_color()),
            ),
            marker_area,
        );
    }
}
