//! Label computation for each measurement kind.

use globekit_common::{Cartesian3, MeasureError};

use crate::geometry::{
    angle_to_horizontal, azimuth_degrees, centroid, distance, height_difference, polygon_area,
};
use crate::locale::MeasureLocale;

use super::{Label, MeasureKind};

/// Labels for `positions` measured as `kind`.
///
/// Fails with `NotEnoughPoints` below [`MeasureKind::min_positions`].
pub fn labels(
    kind: MeasureKind,
    positions: &[Cartesian3],
    locale: &MeasureLocale,
) -> Result<Vec<Label>, MeasureError> {
    let needed = kind.min_positions();
    if positions.len() < needed {
        return Err(MeasureError::NotEnoughPoints {
            needed,
            have: positions.len(),
        });
    }
    match kind {
        MeasureKind::Distance => Ok(distance_labels(positions, locale)),
        MeasureKind::AzimuthDistance => azimuth_labels(positions, locale),
        MeasureKind::Triangle => triangle_labels(positions, locale),
        MeasureKind::Area => area_labels(positions, locale),
    }
}

/// Segment lengths are rounded to centimeters before summing so the
/// total matches the displayed parts.
fn round_cm(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}

fn distance_labels(positions: &[Cartesian3], locale: &MeasureLocale) -> Vec<Label> {
    let mut out = vec![Label::new(positions[0], locale.start.clone())];
    let mut total = 0.0;
    for (i, pair) in positions.windows(2).enumerate() {
        let segment = round_cm(distance(pair[0], pair[1]));
        total += segment;
        let mut text = locale.format_length(segment);
        let last = i + 2 == positions.len();
        if last && positions.len() > 2 {
            text = format!("{text}\n{}: {}", locale.total, locale.format_length(total));
        }
        out.push(Label::new(pair[1], text));
    }
    out
}

fn azimuth_labels(
    positions: &[Cartesian3],
    locale: &MeasureLocale,
) -> Result<Vec<Label>, MeasureError> {
    let mut out = vec![Label::new(positions[0], locale.start.clone())];
    for pair in positions.windows(2) {
        let segment = round_cm(distance(pair[0], pair[1]));
        let bearing = azimuth_degrees(pair[0], pair[1])?;
        out.push(Label::new(
            pair[1],
            format!(
                "{}\n{}",
                locale.format_angle(bearing),
                locale.format_length(segment)
            ),
        ));
    }
    Ok(out)
}

fn triangle_labels(
    positions: &[Cartesian3],
    locale: &MeasureLocale,
) -> Result<Vec<Label>, MeasureError> {
    let (start, corner, end) = (positions[0], positions[1], positions[2]);

    let slant = distance(start, end);
    let rise = height_difference(start, corner)?;
    let run = distance(corner, end);
    let angle = angle_to_horizontal(start, end)?;

    Ok(vec![
        Label::new(
            start.midpoint(end),
            format!(
                "{}: {}",
                locale.slant_distance,
                locale.format_distance_short(slant)
            ),
        ),
        Label::new(
            start.midpoint(corner),
            format!(
                "{}: {}\n{}",
                locale.height_difference,
                locale.format_distance_short(rise),
                locale.format_angle(angle)
            ),
        ),
        Label::new(
            corner.midpoint(end),
            format!(
                "{}: {}",
                locale.horizontal_distance,
                locale.format_distance_short(run)
            ),
        ),
    ])
}

fn area_labels(
    positions: &[Cartesian3],
    locale: &MeasureLocale,
) -> Result<Vec<Label>, MeasureError> {
    let area = polygon_area(positions)?;
    let anchor = centroid(positions).ok_or_else(|| {
        MeasureError::InvalidPosition("polygon centroid is undefined".into())
    })?;
    Ok(vec![Label::new(
        anchor,
        format!("{}: {}", locale.area, locale.format_area(area)),
    )])
}
