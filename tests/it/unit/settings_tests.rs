//! Settings serialization and file round-trips.

use sketchboard::{Color, Settings};

#[test]
fn snapshot_default_settings_json() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "min_zoom": 0.1,
      "max_zoom": 5.0,
      "scroll_multiplier": 0.0015,
      "erase_radius": 20.0,
      "stroke_width": 1.0,
      "stroke_color": {
        "r": 0,
        "g": 0,
        "b": 0
      }
    }
    "#);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        erase_radius: 5.0,
        stroke_width: 3.0,
        stroke_color: Color::new(200, 40, 40),
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_from_malformed_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_load_from_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Settings::load_from(&dir.path().join("absent.json")).is_err());
}
