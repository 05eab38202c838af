//! Measurement configuration types.

use serde::{Deserialize, Serialize};

/// Display units for lengths and areas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum MeasureUnits {
    Meters,
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
    Yards,
}

impl MeasureUnits {
    /// Lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            MeasureUnits::Meters => "meters",
            MeasureUnits::Kilometers => "kilometers",
            MeasureUnits::Miles => "miles",
            MeasureUnits::NauticalMiles => "nauticalmiles",
            MeasureUnits::Feet => "feet",
            MeasureUnits::Yards => "yards",
        }
    }

    /// Short symbol used in labels.
    pub fn symbol(self) -> &'static str {
        match self {
            MeasureUnits::Meters => "m",
            MeasureUnits::Kilometers => "km",
            MeasureUnits::Miles => "mi",
            MeasureUnits::NauticalMiles => "nmi",
            MeasureUnits::Feet => "ft",
            MeasureUnits::Yards => "yd",
        }
    }
}

/// Measurement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeasureConfig {
    pub units: MeasureUnits,
    /// Decimal places in labels (valid range: 0-6).
    pub decimals: u32,
    /// Line color for measurement shapes.
    pub line_color: String,
    /// Line width in pixels (valid range: 1-32).
    pub line_width: u32,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            units: MeasureUnits::Kilometers,
            decimals: 2,
            line_color: "#ffff00".into(),
            line_width: 2,
        }
    }
}
