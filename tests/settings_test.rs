//! Tests for settings files.

use emoji_tictactoe::{Marker, Settings};
use std::io::Write;

#[test]
fn test_load_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_x_marker = "👑"
player_o_marker = "🐰"
log_filter = "debug"
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.player_x_marker(), Marker::from("👑"));
    assert_eq!(*settings.player_o_marker(), Marker::from("🐰"));
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(
        settings.log_file(),
        &std::path::PathBuf::from("emoji_tictactoe.log")
    );
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read settings file"));
}

#[test]
fn test_unknown_types_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x_marker = 7").unwrap();
    assert!(Settings::from_file(file.path()).is_err());
}
