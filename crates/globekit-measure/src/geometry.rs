//! Distances, heights, bearings and areas on the WGS84 ellipsoid.
//!
//! Positions are earth-fixed cartesians in meters. Anything that needs a
//! geodetic position fails with `InvalidPosition` at the earth's center.

use globekit_common::{Cartesian3, Cartographic, EastNorthUp, MeasureError, WGS84};

fn cartographic(position: Cartesian3) -> Result<Cartographic, MeasureError> {
    Cartographic::from_cartesian(position).ok_or_else(|| {
        MeasureError::InvalidPosition(format!("{position:?} has no geodetic position"))
    })
}

/// Straight-line distance in meters.
pub fn distance(start: Cartesian3, end: Cartesian3) -> f64 {
    start.distance(end)
}

/// Height of `end` minus height of `start`, in meters.
pub fn height_difference(start: Cartesian3, end: Cartesian3) -> Result<f64, MeasureError> {
    if start == end {
        return Ok(0.0);
    }
    Ok(cartographic(end)?.height - cartographic(start)?.height)
}

/// Bearing from `start` to `end` in degrees clockwise from north, in
/// `[0, 360)`.
pub fn azimuth_degrees(start: Cartesian3, end: Cartesian3) -> Result<f64, MeasureError> {
    let frame = EastNorthUp::at(start).ok_or_else(|| {
        MeasureError::InvalidPosition(format!("{start:?} has no local frame"))
    })?;
    let local = frame.to_local(end);
    let mut degrees = local.x.atan2(local.y).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    Ok(degrees)
}

/// Elevation angle of the `start -> end` line in degrees, positive when
/// `end` is higher.
pub fn angle_to_horizontal(start: Cartesian3, end: Cartesian3) -> Result<f64, MeasureError> {
    let d = distance(start, end);
    if d == 0.0 {
        return Ok(0.0);
    }
    let ratio = (height_difference(start, end)? / d).clamp(-1.0, 1.0);
    Ok(ratio.asin().to_degrees())
}

/// `start`'s longitude and latitude at `end`'s height: the right-angle
/// corner of the triangle spanned by the two points.
pub fn horizontal_point(start: Cartesian3, end: Cartesian3) -> Result<Cartesian3, MeasureError> {
    let s = cartographic(start)?;
    let e = cartographic(end)?;
    Ok(Cartesian3::from_radians(s.longitude, s.latitude, e.height))
}

/// Area enclosed by a ring of positions in square meters, on a sphere
/// of the equatorial radius. A closing point equal to the first is
/// optional.
pub fn polygon_area(positions: &[Cartesian3]) -> Result<f64, MeasureError> {
    let mut ring: Vec<Cartographic> = positions
        .iter()
        .map(|p| cartographic(*p))
        .collect::<Result<_, _>>()?;
    if ring.len() > 1 && positions.first() == positions.last() {
        ring.pop();
    }
    let n = ring.len();
    if n < 3 {
        return Err(MeasureError::NotEnoughPoints { needed: 3, have: n });
    }

    let total: f64 = (0..n)
        .map(|i| {
            let lower = ring[(i + n - 1) % n];
            let middle = ring[i];
            let upper = ring[(i + 1) % n];
            (upper.longitude - lower.longitude) * middle.latitude.sin()
        })
        .sum();
    let r = WGS84.radii.x;
    Ok((total * r * r / 2.0).abs())
}

/// Arithmetic mean of the positions, lifted back onto the ellipsoid
/// surface at the mean height.
pub fn centroid(positions: &[Cartesian3]) -> Option<Cartesian3> {
    if positions.is_empty() {
        return None;
    }
    let sum = positions.iter().fold(Cartesian3::ZERO, |acc, p| acc + *p);
    let mean = sum * (1.0 / positions.len() as f64);
    let heights: Vec<f64> = positions
        .iter()
        .filter_map(|p| Cartographic::from_cartesian(*p))
        .map(|c| c.height)
        .collect();
    let carto = Cartographic::from_cartesian(mean)?;
    let height = if heights.is_empty() {
        carto.height
    } else {
        heights.iter().sum::<f64>() / heights.len() as f64
    };
    Some(Cartesian3::from_radians(carto.longitude, carto.latitude, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lon: f64, lat: f64, height: f64) -> Cartesian3 {
        Cartesian3::from_degrees(lon, lat, height)
    }

    #[test]
    fn azimuth_due_north_is_zero() {
        let a = azimuth_degrees(at(10.0, 20.0, 0.0), at(10.0, 20.01, 0.0)).unwrap();
        assert!(a.abs() < 1e-6 || (a - 360.0).abs() < 1e-6, "{a}");
    }

    #[test]
    fn azimuth_due_east_is_ninety() {
        let a = azimuth_degrees(at(0.0, 0.0, 0.0), at(0.01, 0.0, 0.0)).unwrap();
        assert!((a - 90.0).abs() < 1e-6, "{a}");
    }

    #[test]
    fn azimuth_west_is_positive() {
        let a = azimuth_degrees(at(0.0, 0.0, 0.0), at(-0.01, 0.0, 0.0)).unwrap();
        assert!((a - 270.0).abs() < 1e-6, "{a}");
    }

    #[test]
    fn height_difference_signed() {
        let low = at(5.0, 5.0, 100.0);
        let high = at(5.0, 5.0, 350.0);
        assert!((height_difference(low, high).unwrap() - 250.0).abs() < 1e-6);
        assert!((height_difference(high, low).unwrap() + 250.0).abs() < 1e-6);
        assert_eq!(height_difference(low, low).unwrap(), 0.0);
    }

    #[test]
    fn earth_center_is_invalid() {
        let err = height_difference(Cartesian3::ZERO, at(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MeasureError::InvalidPosition(_)));
        assert!(azimuth_degrees(Cartesian3::ZERO, at(0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn vertical_line_is_ninety_degrees() {
        let a = angle_to_horizontal(at(0.0, 0.0, 0.0), at(0.0, 0.0, 500.0)).unwrap();
        assert!((a - 90.0).abs() < 1e-2, "{a}");
    }

    #[test]
    fn horizontal_point_takes_end_height() {
        let start = at(1.0, 2.0, 10.0);
        let end = at(1.1, 2.1, 400.0);
        let corner = Cartographic::from_cartesian(horizontal_point(start, end).unwrap()).unwrap();
        assert!((corner.longitude.to_degrees() - 1.0).abs() < 1e-9);
        assert!((corner.latitude.to_degrees() - 2.0).abs() < 1e-9);
        assert!((corner.height - 400.0).abs() < 1e-6);
    }

    #[test]
    fn one_degree_square_at_equator() {
        let ring = [
            at(0.0, 0.0, 0.0),
            at(1.0, 0.0, 0.0),
            at(1.0, 1.0, 0.0),
            at(0.0, 1.0, 0.0),
        ];
        let area = polygon_area(&ring).unwrap();
        assert!((area - 1.239_14e10).abs() / 1.239_14e10 < 1e-3, "{area}");

        let mut closed = ring.to_vec();
        closed.push(ring[0]);
        assert!((polygon_area(&closed).unwrap() - area).abs() < 1e-3);
    }

    #[test]
    fn area_needs_three_points() {
        let err = polygon_area(&[at(0.0, 0.0, 0.0), at(1.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, MeasureError::NotEnoughPoints { needed: 3, have: 2 });
    }

    #[test]
    fn centroid_of_square() {
        let ring = [
            at(0.0, 0.0, 0.0),
            at(2.0, 0.0, 0.0),
            at(2.0, 2.0, 0.0),
            at(0.0, 2.0, 0.0),
        ];
        let c = Cartographic::from_cartesian(centroid(&ring).unwrap()).unwrap();
        assert!((c.longitude.to_degrees() - 1.0).abs() < 1e-3);
        assert!((c.latitude.to_degrees() - 1.0).abs() < 1e-3);
        assert!(c.height.abs() < 1e-6);
        assert!(centroid(&[]).is_none());
    }
}
