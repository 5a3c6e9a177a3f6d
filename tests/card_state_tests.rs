//! Integration tests for card state rules: caption algebra, selection
//! exclusivity, and target-gated color application.

mod fixtures;
use fixtures::*;

use makecard::models::{CardState, RgbColor, Target};

#[test]
fn test_default_state_matches_contract() {
    // Default state, no interaction
    let card = CardState::new();
    assert_eq!(card.background_color.to_hex(), "#0B0E11");
    assert_eq!(card.text_color.to_hex(), "#FFFFFF");
    assert_eq!(card.caption(), "just make things");
    assert_eq!(card.selected, None);
}

#[test]
fn test_palette_pick_changes_only_background() {
    let mut card = CardState::new();
    card.select(Target::Background);
    card.apply_color(RgbColor::from_hex("#264653").unwrap());

    assert_eq!(card.background_color.to_hex(), "#264653");
    assert_eq!(card.text_color.to_hex(), "#FFFFFF");
}

#[test]
fn test_long_caption_keeps_first_thirty_characters() {
    let mut card = CardState::new();
    card.select(Target::Text);

    let typed: String = ('a'..='z').chain('0'..='9').cycle().take(40).collect();
    card.set_caption(&typed);

    let expected: String = typed.chars().take(30).collect();
    assert_eq!(card.caption(), expected);
    assert_eq!(card.caption().chars().count(), 30);
}

#[test]
fn test_cleared_caption_reverts_to_placeholder() {
    let mut card = CardState::new();
    card.select(Target::Text);
    card.set_caption("draft");
    card.set_caption("");
    assert_eq!(card.caption(), "just make things");
}

#[test]
fn test_exactly_one_selection_state_at_a_time() {
    let mut card = CardState::new();

    let states = [
        Some(Target::Text),
        Some(Target::Background),
        Some(Target::Text),
        None,
    ];
    for wanted in states {
        match wanted {
            Some(t) => card.select(t),
            None => card.clear_selection(),
        }
        assert_eq!(card.selected, wanted);
    }
}

#[test]
fn test_color_with_no_target_leaves_card_untouched() {
    let mut card = test_card_teal();
    let before = card.clone();
    assert!(!card.apply_color(RgbColor::new(250, 250, 250)));
    assert_eq!(card, before);
}

#[test]
fn test_caption_never_empty_never_overlong() {
    let mut card = CardState::new();
    let q29 = "q".repeat(29);
    let q30 = "q".repeat(30);
    let q31 = "q".repeat(31);
    let inputs: [&str; 7] = ["", "  ", "ok", &q29, &q30, &q31, "\t\n"];
    for input in inputs {
        card.set_caption(input);
        assert!(!card.caption().is_empty(), "caption must never render empty");
        assert!(
            card.caption().chars().count() <= 30,
            "caption must never exceed the maximum"
        );
    }
}
