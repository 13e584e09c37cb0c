//! Tests for config module

use groundtrack::{Color, MapConfig, TrailError};

#[test]
fn test_default_config() {
    let config = MapConfig::default();
    assert_eq!(config.palette.len(), 16);
    assert_eq!(config.icon_size, 28);
    assert_eq!(config.history_capacity, 4);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = MapConfig::from_json_str(r#"{"icon_size": 32}"#).unwrap();
    assert_eq!(config.icon_size, 32);
    assert_eq!(config.history_capacity, 4);
    assert_eq!(config.palette, MapConfig::default().palette);
}

#[test]
fn test_custom_palette_json() {
    let config = MapConfig::from_json_str(r##"{"palette": ["#ff0000", "#00FF00"]}"##).unwrap();
    assert_eq!(
        config.palette.colors(),
        &[Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)]
    );
}

#[test]
fn test_empty_palette_json_rejected() {
    let result = MapConfig::from_json_str(r#"{"palette": []}"#);
    assert!(matches!(result, Err(TrailError::Config(_))));
}

#[test]
fn test_bad_color_json_rejected() {
    let result = MapConfig::from_json_str(r#"{"palette": ["red"]}"#);
    assert!(matches!(result, Err(TrailError::Config(_))));
}

#[test]
fn test_missing_file() {
    let result = MapConfig::from_path("/nonexistent/groundtrack-config.json");
    assert!(matches!(result, Err(TrailError::Io(_))));
}

#[test]
fn test_config_round_trips_through_file() {
    let path = std::env::temp_dir().join(format!("groundtrack-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"history_capacity": 8}"#).unwrap();

    let config = MapConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.history_capacity, 8);
}

#[test]
fn test_global_install_once() {
    let config = MapConfig {
        icon_size: 40,
        ..MapConfig::default()
    };
    // Only this test touches the global in this binary.
    config.install().unwrap();
    assert_eq!(MapConfig::global().icon_size, 40);

    let again = MapConfig::default().install();
    assert!(matches!(again, Err(TrailError::ConfigAlreadyInstalled)));
    assert_eq!(MapConfig::global().icon_size, 40);
}
