//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{GlobekitConfig, MeasureUnits, SyncMode};
use globekit_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_globekit_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[sync]
mode = "mirror"
percentage_changed = 0.05

[measure]
units = "miles"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.sync.mode, SyncMode::Mirror);
    assert_eq!(config.sync.percentage_changed, 0.05);
    assert_eq!(config.measure.units, MeasureUnits::Miles);
    // Defaults preserved
    assert_eq!(config.sync.expand_width_factor, 2.0);
    assert_eq!(config.overlay.color, "#ff000080");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_fall_back_field_by_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[sync]
mode = "mirror"
percentage_changed = 3.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.sync.mode, SyncMode::Mirror);
    assert_eq!(config.sync.percentage_changed, 0.01);
}

#[test]
fn newer_schema_version_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "schema_version = 2\n\n[measure]\nunits = \"feet\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.schema_version, 2);
    assert_eq!(config.measure.units, MeasureUnits::Feet);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("globekit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, GlobekitConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: GlobekitConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.sync.mode, SyncMode::Overview);
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("globekit"));
        assert!(path_str.ends_with("config.toml"));
    }
}
