use map_settings::{
    parse_height_rows, MapSettings, ModeSettings, SettingsError, StretchSettings,
    ThresholdSettings, ViewSettings,
};
use std::fs;

fn sample_settings() -> MapSettings {
    MapSettings {
        name: "weld-seam".to_string(),
        data_width: 3,
        data_height: 3,
        canvas_width: 320,
        canvas_height: 240,
        view: ViewSettings {
            from: [10.0, -250.0, 180.0],
            at: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            rotation_degrees: 120,
            field_of_view_degrees: 60,
            screen_offset: [4, -8],
        },
        stretch: StretchSettings { x: 2.0, y: 3.0 },
        thresholds: ThresholdSettings {
            critical: 100,
            warning: 65,
            normal: 25,
        },
        modes: ModeSettings {
            hidden_surface: true,
            wireframe: true,
            birds_eye: false,
        },
        ..MapSettings::default()
    }
}

#[test]
fn save_and_load_json_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("map.json");
    let settings = sample_settings();

    settings.save_to_file(&path).unwrap();
    let loaded = MapSettings::load_from_file(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn save_and_load_toml_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("map.toml");
    let settings = sample_settings();

    settings.save_to_file(&path).unwrap();
    assert!(path.exists());
    let loaded = MapSettings::load_from_file(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.json");
    fs::write(
        &path,
        r#"{"name": "p", "data_width": 8, "data_height": 4, "canvas_width": 100, "canvas_height": 80}"#,
    )
    .unwrap();

    let loaded = MapSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.view, ViewSettings::default());
    assert_eq!(loaded.thresholds, ThresholdSettings::default());
    assert!(loaded.modes.hidden_surface);
}

#[test]
fn load_normalizes_field_of_view() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wide.json");
    let mut settings = sample_settings();
    settings.view.field_of_view_degrees = 250;
    fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

    let loaded = MapSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.view.field_of_view_degrees, 179);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("map.ini");
    let err = sample_settings().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "ini"));
}

#[test]
fn parses_height_rows_with_mixed_separators() {
    let rows = parse_height_rows("# header\n1, 2, 3\n\n4 5\t6 # trailing\n").unwrap();
    assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn height_rows_report_bad_tokens_and_lengths() {
    let err = parse_height_rows("1 2 3\n4 x 6\n").unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSample { line: 2, ref token } if token == "x"));

    let err = parse_height_rows("1 2 3\n4 5\n").unwrap_err();
    assert!(matches!(
        err,
        SettingsError::RowLength {
            line: 2,
            expected: 3,
            found: 2
        }
    ));
}
