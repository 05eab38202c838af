//! `globekit measure`: feed picked points through a measurement session.

use globekit_common::{Cartesian3, Cartographic, GlobeError};
use globekit_config::schema::MeasureConfig;
use globekit_measure::{Measure, MeasureKind, MeasureResult};
use tracing::warn;

use crate::cli::PointArg;

pub fn run(
    config: &MeasureConfig,
    kind: MeasureKind,
    points: &[PointArg],
) -> Result<MeasureResult, GlobeError> {
    let mut session = Measure::from_config(kind, config);
    for p in points {
        let position = Cartesian3::from_degrees(p.lon, p.lat, p.height);
        if !session.drop_point(position)? {
            warn!(kind = %kind, "shape already complete, ignoring {p:?}");
        }
    }
    Ok(session.finish()?)
}

pub fn print(result: &MeasureResult) {
    println!("{} ({} labels)", result.kind, result.labels.len());
    for label in &result.labels {
        let at = match Cartographic::from_cartesian(label.position) {
            Some(c) => format!(
                "{:.5},{:.5},{:.1}",
                c.longitude.to_degrees(),
                c.latitude.to_degrees(),
                c.height
            ),
            None => "?".to_string(),
        };
        println!("  [{at}] {}", label.text.replace('\n', " | "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lon: f64, lat: f64, height: f64) -> PointArg {
        PointArg { lon, lat, height }
    }

    #[test]
    fn triangle_from_two_points() {
        let result = run(
            &MeasureConfig::default(),
            MeasureKind::Triangle,
            &[point(0.0, 0.0, 0.0), point(0.01, 0.0, 120.0)],
        )
        .unwrap();
        assert_eq!(result.labels.len(), 3);
        assert!(result.labels[1].text.starts_with("Height difference: 120.00 m"));
    }

    #[test]
    fn extra_triangle_points_are_ignored() {
        let result = run(
            &MeasureConfig::default(),
            MeasureKind::Triangle,
            &[
                point(0.0, 0.0, 0.0),
                point(0.01, 0.0, 120.0),
                point(0.02, 0.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(result.shape.positions.len(), 4);
    }

    #[test]
    fn area_needs_three_points() {
        let err = run(
            &MeasureConfig::default(),
            MeasureKind::Area,
            &[point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0)],
        )
        .unwrap_err();
        assert!(matches!(err, GlobeError::Measure(_)));
    }
}
