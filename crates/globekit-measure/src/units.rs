//! Length and area unit conversion.

pub use globekit_config::schema::MeasureUnits;

/// Meters in one `units`.
pub fn meters_per_unit(units: MeasureUnits) -> f64 {
    match units {
        MeasureUnits::Meters => 1.0,
        MeasureUnits::Kilometers => 1000.0,
        MeasureUnits::Miles => 1609.344,
        MeasureUnits::NauticalMiles => 1852.0,
        MeasureUnits::Feet => 0.3048,
        MeasureUnits::Yards => 0.9144,
    }
}

pub fn convert_length(value: f64, from: MeasureUnits, to: MeasureUnits) -> f64 {
    value * meters_per_unit(from) / meters_per_unit(to)
}

/// Square meters to square `to`.
pub fn convert_area(square_meters: f64, to: MeasureUnits) -> f64 {
    let m = meters_per_unit(to);
    square_meters / (m * m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilometers_to_meters() {
        assert_eq!(
            convert_length(1.5, MeasureUnits::Kilometers, MeasureUnits::Meters),
            1500.0
        );
    }

    #[test]
    fn miles_to_feet() {
        let feet = convert_length(1.0, MeasureUnits::Miles, MeasureUnits::Feet);
        assert!((feet - 5280.0).abs() < 1e-9);
    }

    #[test]
    fn nautical_mile_in_meters() {
        assert_eq!(
            convert_length(1852.0, MeasureUnits::Meters, MeasureUnits::NauticalMiles),
            1.0
        );
    }

    #[test]
    fn square_kilometer() {
        assert_eq!(convert_area(2_500_000.0, MeasureUnits::Kilometers), 2.5);
    }
}
