//! Validation for the `[sync]` and `[overlay]` sections.

use crate::schema::{OverlayConfig, SyncConfig};

use super::helpers::{
    reset_invalid, validate_hex_color, validate_range_f64, validate_range_open_min,
};

/// Synchronizer constraints. Offending fields are reset to their defaults.
pub(crate) fn sanitize_sync(errors: &mut Vec<String>, sync: &mut SyncConfig) {
    let defaults = SyncConfig::default();
    reset_invalid(
        errors,
        &mut sync.percentage_changed,
        &defaults.percentage_changed,
        |e, v| validate_range_open_min(e, "sync.percentage_changed", *v, 0.0, 1.0),
    );
    reset_invalid(
        errors,
        &mut sync.expand_width_factor,
        &defaults.expand_width_factor,
        |e, v| validate_range_f64(e, "sync.expand_width_factor", *v, 1.0, 10.0),
    );
    reset_invalid(
        errors,
        &mut sync.expand_height_factor,
        &defaults.expand_height_factor,
        |e, v| validate_range_f64(e, "sync.expand_height_factor", *v, 1.0, 10.0),
    );
}

pub(crate) fn sanitize_overlay(errors: &mut Vec<String>, overlay: &mut OverlayConfig) {
    let defaults = OverlayConfig::default();
    reset_invalid(errors, &mut overlay.color, &defaults.color, |e, v| {
        validate_hex_color(e, "overlay.color", v)
    });
}
