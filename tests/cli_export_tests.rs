//! End-to-end tests for `makecard export`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_basic_succeeds() {
    let out = temp_output_dir();

    let output = makecard_cmd(out.path())
        .args(["export", "--output", out.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let png_path = out.path().join("card.png");
    assert!(
        png_path.exists(),
        "Export file should exist at: {}",
        png_path.display()
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("card.png"), "Should report the output path");
}

#[test]
fn test_export_produces_1920_wide_png() {
    let out = temp_output_dir();

    let status = makecard_cmd(out.path())
        .args(["export", "--output", out.path().to_str().unwrap()])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let img = image::open(out.path().join("card.png")).expect("Should decode as PNG");
    assert_eq!(img.width(), 1920);
    // Height follows the fixed 16:9 card aspect
    assert_eq!(img.height(), 1080);
}

#[test]
fn test_export_background_color_fills_corners() {
    let out = temp_output_dir();

    let status = makecard_cmd(out.path())
        .args([
            "export",
            "--background-color",
            "#264653",
            "--output",
            out.path().to_str().unwrap(),
        ])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let img = image::open(out.path().join("card.png"))
        .expect("Should decode as PNG")
        .to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [38, 70, 83, 255]);
    assert_eq!(img.get_pixel(1919, 1079).0, [38, 70, 83, 255]);
}

#[test]
fn test_export_is_deterministic_for_unchanged_state() {
    let out = temp_output_dir();
    let args = [
        "export",
        "--caption",
        "same card twice",
        "--output",
        out.path().to_str().unwrap(),
    ];

    let status = makecard_cmd(out.path())
        .args(args)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
    let first = fs::read(out.path().join("card.png")).expect("read first export");

    let status = makecard_cmd(out.path())
        .args(args)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
    let second = fs::read(out.path().join("card.png")).expect("read second export");

    assert_eq!(first, second, "Repeated export should be bit-identical");
}

#[test]
fn test_export_rejects_invalid_color() {
    let out = temp_output_dir();

    let output = makecard_cmd(out.path())
        .args([
            "export",
            "--text-color",
            "not-a-color",
            "--output",
            out.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Validation errors exit 2");
    assert!(!out.path().join("card.png").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "Should print an error message");
}

#[test]
fn test_export_accepts_overlong_caption() {
    let out = temp_output_dir();
    let long_caption = "a".repeat(40);

    let status = makecard_cmd(out.path())
        .args([
            "export",
            "--caption",
            &long_caption,
            "--output",
            out.path().to_str().unwrap(),
        ])
        .status()
        .expect("Failed to execute command");

    // Overlong captions are truncated, not rejected
    assert!(status.success());
    assert!(out.path().join("card.png").exists());
}
