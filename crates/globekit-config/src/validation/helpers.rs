//! Shared range-validation helpers used by all section validators.

use globekit_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is rejected.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is in the half-open range `(min, max]`.
pub(crate) fn validate_range_open_min(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(value > min && value <= max) {
        errors.push(format!("{name} = {value} is out of range ({min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` / `#rrggbbaa` color.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}

/// Run `check` on `field` and put `default` back if it reported anything.
pub(crate) fn reset_invalid<T: Clone>(
    errors: &mut Vec<String>,
    field: &mut T,
    default: &T,
    check: impl FnOnce(&mut Vec<String>, &T),
) {
    let before = errors.len();
    check(errors, field);
    if errors.len() > before {
        *field = default.clone();
    }
}
