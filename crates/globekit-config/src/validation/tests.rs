//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = GlobekitConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_percentage_changed() {
    let mut config = GlobekitConfig::default();
    config.sync.percentage_changed = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sync.percentage_changed"));
}

#[test]
fn accepts_percentage_changed_of_one() {
    let mut config = GlobekitConfig::default();
    config.sync.percentage_changed = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_nan_percentage_changed() {
    let mut config = GlobekitConfig::default();
    config.sync.percentage_changed = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_shrinking_expand_factor() {
    let mut config = GlobekitConfig::default();
    config.sync.expand_width_factor = 0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sync.expand_width_factor"));
}

#[test]
fn catches_huge_expand_factor() {
    let mut config = GlobekitConfig::default();
    config.sync.expand_height_factor = 11.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sync.expand_height_factor"));
}

#[test]
fn catches_bad_overlay_color() {
    let mut config = GlobekitConfig::default();
    config.overlay.color = "red".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.color"));
}

#[test]
fn catches_too_many_decimals() {
    let mut config = GlobekitConfig::default();
    config.measure.decimals = 9;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("measure.decimals"));
}

#[test]
fn catches_zero_line_width() {
    let mut config = GlobekitConfig::default();
    config.measure.line_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("measure.line_width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlobekitConfig::default();
    config.sync.percentage_changed = 5.0;
    config.measure.decimals = 7;
    config.measure.line_color = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sync.percentage_changed"));
    assert!(err.contains("measure.decimals"));
    assert!(err.contains("measure.line_color"));
    assert_eq!(err.matches("; ").count(), 2);
}

#[test]
fn sanitize_resets_only_offending_fields() {
    let mut config = GlobekitConfig::default();
    config.sync.mode = crate::schema::SyncMode::Mirror;
    config.sync.percentage_changed = 3.0;
    config.sync.expand_width_factor = 4.0;
    config.measure.decimals = 9;
    config.measure.units = crate::schema::MeasureUnits::Miles;

    let reset = sanitize(&mut config);
    assert_eq!(reset.len(), 2);
    assert!(reset[0].contains("sync.percentage_changed"));
    assert!(reset[1].contains("measure.decimals"));

    assert_eq!(config.sync.mode, crate::schema::SyncMode::Mirror);
    assert_eq!(config.sync.percentage_changed, 0.01);
    assert_eq!(config.sync.expand_width_factor, 4.0);
    assert_eq!(config.measure.decimals, 2);
    assert_eq!(config.measure.units, crate::schema::MeasureUnits::Miles);
    assert!(validate(&config).is_ok());
}

#[test]
fn validate_does_not_modify() {
    let mut config = GlobekitConfig::default();
    config.overlay.color = "red".into();
    assert!(validate(&config).is_err());
    assert_eq!(config.overlay.color, "red");
}
