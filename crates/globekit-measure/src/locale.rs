//! Label text formatting.

use globekit_config::schema::MeasureConfig;

use crate::units::{convert_area, convert_length, MeasureUnits};

const SQUARE_KILOMETER: f64 = 1_000_000.0;

/// Words and number formatting used in measurement labels.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureLocale {
    pub units: MeasureUnits,
    pub decimals: usize,
    pub start: String,
    pub area: String,
    pub total: String,
    pub slant_distance: String,
    pub height_difference: String,
    pub horizontal_distance: String,
}

impl Default for MeasureLocale {
    fn default() -> Self {
        Self::from_config(&MeasureConfig::default())
    }
}

impl MeasureLocale {
    pub fn from_config(config: &MeasureConfig) -> Self {
        Self {
            units: config.units,
            decimals: config.decimals as usize,
            start: "Start".into(),
            area: "Area".into(),
            total: "Total".into(),
            slant_distance: "Slant distance".into(),
            height_difference: "Height difference".into(),
            horizontal_distance: "Horizontal distance".into(),
        }
    }

    /// Meters below 1 km, the configured units otherwise.
    pub fn format_length(&self, meters: f64) -> String {
        let d = self.decimals;
        if meters.abs() < 1000.0 {
            return format!("{meters:.d$} m");
        }
        let united = convert_length(meters, MeasureUnits::Meters, self.units);
        format!("{united:.d$} {}", self.units.symbol())
    }

    /// Square meters below 1 km², the configured units squared otherwise.
    pub fn format_area(&self, square_meters: f64) -> String {
        let d = self.decimals;
        if square_meters < SQUARE_KILOMETER {
            return format!("{square_meters:.d$} m²");
        }
        let united = convert_area(square_meters, self.units);
        format!("{united:.d$} {}²", self.units.symbol())
    }

    pub fn format_angle(&self, degrees: f64) -> String {
        let d = self.decimals;
        format!("{degrees:.d$}°")
    }

    /// Meters or kilometers with two decimals, regardless of units.
    pub fn format_distance_short(&self, meters: f64) -> String {
        if meters.abs() < 1000.0 {
            format!("{meters:.2} m")
        } else {
            format!("{:.2} km", meters / 1000.0)
        }
    }
}
