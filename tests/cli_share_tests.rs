//! End-to-end tests for `makecard share`.
//!
//! These use `--print-url` so no browser is launched from the test suite.

mod fixtures;
use fixtures::*;

#[test]
fn test_share_print_url_uses_compose_endpoint() {
    let home = temp_output_dir();

    let output = makecard_cmd(home.path())
        .args(["share", "--print-url"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let url = stdout.trim();
    assert!(
        url.starts_with("https://x.com/intent/post?text="),
        "Unexpected compose URL: {url}"
    );
    assert!(url.contains("%23justmakethings"), "Should carry the hashtag");
}

#[test]
fn test_share_promo_print_url_uses_promo_message() {
    let home = temp_output_dir();

    let output = makecard_cmd(home.path())
        .args(["share", "--promo", "--print-url"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let url = stdout.trim();
    assert!(url.starts_with("https://x.com/intent/post?text="));
    assert!(
        url.contains("v0.dev"),
        "Promo call site should mention the product: {url}"
    );
    assert!(!url.contains("%23justmakethings"));
}

#[test]
fn test_share_rejects_invalid_color() {
    let home = temp_output_dir();

    let output = makecard_cmd(home.path())
        .args(["share", "--background-color", "#XYZ", "--print-url"])
        .output()
        .expect("Failed to execute command");

    // --print-url never touches the card, so this still succeeds; without
    // it the card build must fail validation first.
    assert_eq!(output.status.code(), Some(0));

    let output = makecard_cmd(home.path())
        .args(["share", "--background-color", "#XYZ"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}
