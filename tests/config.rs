//! Loading swimmer tuning from JSON files.
use std::fs;
use std::path::PathBuf;

use swimmer::{ConfigError, SwimmerConfig};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("swimmer-{}-{name}", std::process::id()));
    if let Err(e) = fs::write(&path, contents) {
        panic!("failed to write {}: {e}", path.display());
    }
    path
}

#[test]
fn loads_overrides_from_file() {
    let path = scratch_file("lag.json", r#"{ "lag_seconds": 2.0, "tick_rate": 30.0 }"#);
    let config = SwimmerConfig::from_path(&path).unwrap_or_else(|e| panic!("load failed: {e}"));
    assert_eq!(config.trail_capacity(), 60);
    assert!((config.join_speed - swimmer::JOIN_SPEED).abs() < f32::EPSILON);
    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("swimmer-definitely-missing.json");
    assert!(matches!(
        SwimmerConfig::from_path(path),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn invalid_values_in_file_are_rejected() {
    let path = scratch_file("bad.json", r#"{ "join_threshold": -1.0 }"#);
    let result = SwimmerConfig::from_path(&path);
    let _ = fs::remove_file(path);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: "join_threshold",
            ..
        })
    ));
}

#[test]
fn misspelled_key_in_file_is_a_parse_error() {
    let path = scratch_file("typo.json", r#"{ "lag_second": 0.5 }"#);
    let result = SwimmerConfig::from_path(&path);
    let _ = fs::remove_file(path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
