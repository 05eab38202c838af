//! Configuration schema types for globekit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod measure;
mod sync;
mod system;

pub use measure::*;
pub use sync::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobekitConfig {
    /// Schema the file was written for.
    pub schema_version: u32,
    pub sync: SyncConfig,
    pub overlay: OverlayConfig,
    pub measure: MeasureConfig,
    pub logging: LoggingConfig,
}

impl Default for GlobekitConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            sync: SyncConfig::default(),
            overlay: OverlayConfig::default(),
            measure: MeasureConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sync_section() {
        let config = GlobekitConfig::default();
        assert_eq!(config.sync.mode, SyncMode::Overview);
        assert_eq!(config.sync.percentage_changed, 0.01);
        assert_eq!(config.sync.expand_width_factor, 2.0);
        assert_eq!(config.sync.expand_height_factor, 2.0);
        assert_eq!(config.sync.stale_overlay, StaleOverlayPolicy::Keep);
        assert!(config.sync.lock_overview_controls);
    }

    #[test]
    fn missing_schema_version_means_current() {
        let config: GlobekitConfig = toml::from_str("[logging]\nlevel = \"WARN\"\n").unwrap();
        assert_eq!(config.schema_version, CONFIG_SCHEMA_VERSION);
    }

    #[test]
    fn default_overlay_is_translucent_red() {
        let config = GlobekitConfig::default();
        assert_eq!(config.overlay.color, "#ff000080");
    }

    #[test]
    fn default_measure_section() {
        let config = GlobekitConfig::default();
        assert_eq!(config.measure.units, MeasureUnits::Kilometers);
        assert_eq!(config.measure.decimals, 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[sync]
mode = "mirror"
"#;
        let config: GlobekitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sync.mode, SyncMode::Mirror);
        assert_eq!(config.sync.percentage_changed, 0.01);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn enums_parse_from_toml() {
        let toml_str = r#"
[sync]
stale_overlay = "hide"

[measure]
units = "nauticalmiles"

[logging]
level = "DEBUG"
"#;
        let config: GlobekitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sync.stale_overlay, StaleOverlayPolicy::Hide);
        assert_eq!(config.measure.units, MeasureUnits::NauticalMiles);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let toml_str = r#"
[sync]
mode = "sideways"
"#;
        assert!(toml::from_str::<GlobekitConfig>(toml_str).is_err());
    }

    #[test]
    fn units_name_matches_serde() {
        for units in [
            MeasureUnits::Meters,
            MeasureUnits::Kilometers,
            MeasureUnits::Miles,
            MeasureUnits::NauticalMiles,
            MeasureUnits::Feet,
            MeasureUnits::Yards,
        ] {
            let json = serde_json::to_string(&units).unwrap();
            assert_eq!(json, format!("\"{}\"", units.name()));
        }
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::Warn.as_directive(), "warn");
        assert_eq!(LogLevel::default().as_directive(), "info");
    }
}
