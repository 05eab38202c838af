//! Validation for the `[measure]` section.

use crate::schema::MeasureConfig;

use super::helpers::{reset_invalid, validate_hex_color, validate_range};

pub(crate) fn sanitize_measure(errors: &mut Vec<String>, measure: &mut MeasureConfig) {
    let defaults = MeasureConfig::default();
    reset_invalid(errors, &mut measure.decimals, &defaults.decimals, |e, v| {
        validate_range(e, "measure.decimals", *v, 0, 6)
    });
    reset_invalid(errors, &mut measure.line_width, &defaults.line_width, |e, v| {
        validate_range(e, "measure.line_width", *v, 1, 32)
    });
    reset_invalid(errors, &mut measure.line_color, &defaults.line_color, |e, v| {
        validate_hex_color(e, "measure.line_color", v)
    });
}
