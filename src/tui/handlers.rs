//! Input handlers for the main screen: keyboard, caption editing, and the
//! screen-level click router.
//!
//! The click router implements the selection-clearing rule: a click that
//! lands outside both the card and the color selector resets the selection
//! to none. Clicks inside the selector never clear it.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::constants::PROMO_MESSAGE;
use crate::export::{ExportPipeline, ShareOutcome, SystemNavigator, SystemShare};
use crate::models::{CaptionEdit, Target};

use super::component::{Component, ComponentEvent};
use super::AppState;

/// Handle a key event. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // If the error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while the error is shown
        return Ok(false);
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Route to the custom color picker while it is open
    if let Some(picker) = state.active_picker.as_mut() {
        if let Some(event) = picker.handle_input(key) {
            match event {
                ComponentEvent::ColorSelected(color) => {
                    state.close_picker();
                    state.apply_selected_color(color);
                }
                ComponentEvent::Cancelled => {
                    state.close_picker();
                    state.set_status("Cancelled");
                }
            }
        }
        return Ok(false);
    }

    let editing = state.card.is_editing_text();

    match key.code {
        // While the text target is selected the caption is directly
        // editable; printable keys go into it, not to shortcuts.
        KeyCode::Char(c) if editing && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            insert_caption_char(state, c);
        }
        KeyCode::Backspace if editing => delete_caption_char(state),

        KeyCode::Char('q') => return Ok(true),
        KeyCode::Esc => {
            state.card.clear_selection();
            state.set_status("Selection cleared");
        }
        KeyCode::Tab => {
            let next = match state.card.selected {
                Some(Target::Background) => Target::Text,
                Some(Target::Text) | None => Target::Background,
            };
            state.card.select(next);
            let label = if next == Target::Text {
                "text (type to edit the caption)"
            } else {
                "background"
            };
            state.set_status(format!("Selected {label}"));
        }
        KeyCode::Left => move_cursor(state, |s| s.cursor.move_left(&s.palette)),
        KeyCode::Right => move_cursor(state, |s| s.cursor.move_right(&s.palette)),
        KeyCode::Up => move_cursor(state, |s| s.cursor.move_up(&s.palette)),
        KeyCode::Down => move_cursor(state, |s| s.cursor.move_down(&s.palette)),
        KeyCode::Enter => {
            if let Some(color) = state.cursor.color(&state.palette) {
                state.apply_selected_color(color);
            }
        }
        KeyCode::Char('c') => {
            state.open_color_picker();
        }
        KeyCode::Char('y') => copy_active_hex(state),
        KeyCode::Char('d') => download_card(state),
        KeyCode::Char('s') => share_card(state),
        KeyCode::Char('b') => open_promo_compose(state),
        _ => {}
    }

    Ok(false)
}

/// Handle a mouse event: target selection and the click-outside rule.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(());
    }

    if state.error_message.is_some() {
        state.clear_error();
        return Ok(());
    }
    if state.active_picker.is_some() {
        // The picker popup is keyboard-driven
        return Ok(());
    }

    let pos = Position {
        x: mouse.column,
        y: mouse.row,
    };
    let regions = &state.regions;

    if regions.caption.contains(pos) {
        state.card.select(Target::Text);
        state.set_status("Selected text (type to edit the caption)");
    } else if regions.card.contains(pos) {
        state.card.select(Target::Background);
        state.set_status("Selected background");
    } else if regions.selector.contains(pos) {
        if let Some(swatch) = regions.selector_layout.swatch_at(pos.x, pos.y) {
            state.cursor = super::SwatchCursor {
                group: swatch.group,
                index: swatch.index,
            };
            if let Some(color) = state.cursor.color(&state.palette) {
                state.apply_selected_color(color);
            }
        } else if regions.selector_layout.custom.contains(pos) {
            state.open_color_picker();
        }
        // Clicks inside the selector leave the selection alone
    } else {
        // Outside both the card and the color selector
        state.card.clear_selection();
        state.set_status("Selection cleared");
    }

    Ok(())
}

/// Appends a character to the caption. A pristine placeholder is replaced
/// by the first keystroke; overflow is truncated within this same event.
fn insert_caption_char(state: &mut AppState, c: char) {
    let candidate = if state.card.caption_is_placeholder() {
        c.to_string()
    } else {
        format!("{}{c}", state.card.caption())
    };

    if state.card.set_caption(&candidate) == CaptionEdit::Truncated {
        state.set_status("Caption limit reached");
    }
}

/// Removes the last caption character; emptying it restores the placeholder.
fn delete_caption_char(state: &mut AppState) {
    let mut chars: Vec<char> = state.card.caption().chars().collect();
    chars.pop();
    let candidate: String = chars.into_iter().collect();
    if state.card.set_caption(&candidate) == CaptionEdit::Reverted {
        state.set_status("Caption reset");
    }
}

fn move_cursor(state: &mut AppState, movement: impl FnOnce(&mut AppState)) {
    movement(state);
    if let Some(color) = state.cursor.color(&state.palette) {
        state.set_status(format!("Swatch {}", color.to_hex()));
    }
}

/// Copies the active color's hex value to the system clipboard.
fn copy_active_hex(state: &mut AppState) {
    let hex = state.card.active_color().to_hex();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(hex.clone())) {
        Ok(()) => state.set_status(format!("Copied {hex}")),
        Err(err) => state.set_error(format!("Clipboard unavailable: {err}")),
    }
}

/// Download path: errors surface to the user, there is no fallback here.
fn download_card(state: &mut AppState) {
    let output_dir = state.config.export.output_dir.clone();
    match ExportPipeline::download(&state.card, &output_dir) {
        Ok(path) => state.set_status(format!("Saved {}", path.display())),
        Err(err) => state.set_error(format!("Export failed: {err:#}")),
    }
}

/// Share path: every failure degrades to the compose URL.
fn share_card(state: &mut AppState) {
    let navigator = SystemNavigator;
    let target = SystemShare;
    let pipeline = ExportPipeline::new(&navigator, &target);

    match pipeline.share(&state.card) {
        ShareOutcome::Shared => state.set_status("Card shared"),
        ShareOutcome::FallbackOpened => state.set_status("Opened compose window in your browser"),
    }
}

/// The "made with" credit: opens a prefilled promotional post.
fn open_promo_compose(state: &mut AppState) {
    let navigator = SystemNavigator;
    let target = SystemShare;
    let pipeline = ExportPipeline::new(&navigator, &target);
    pipeline.open_fallback(PROMO_MESSAGE);
    state.set_status("Opened compose window in your browser");
}
