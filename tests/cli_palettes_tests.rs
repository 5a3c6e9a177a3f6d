//! End-to-end tests for `makecard palettes`.

mod fixtures;
use fixtures::*;

#[test]
fn test_palettes_lists_groups_and_presets() {
    let home = temp_output_dir();

    let output = makecard_cmd(home.path())
        .arg("palettes")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);

    for group in ["Calming", "50s Vibe", "Aesthetic"] {
        assert!(stdout.contains(group), "Missing group: {group}");
    }
    for hex in ["#FFFCF9", "#264653", "#B73838", "#F6E0B5"] {
        assert!(stdout.contains(hex), "Missing preset: {hex}");
    }

    // Three groups of five presets each
    let preset_count = stdout.lines().filter(|l| l.trim_start().starts_with('#')).count();
    assert_eq!(preset_count, 15);
}
