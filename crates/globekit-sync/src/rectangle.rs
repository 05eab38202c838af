//! Ground-rectangle scaling and footprint-to-screen geometry.

use std::f64::consts::{FRAC_PI_2, PI};

use globekit_common::{BoundingRectangle, Cartesian2, Cartographic, GroundRectangle};

/// Scale `rect` about its center by the given factors, clamped to the
/// valid angular domain.
///
/// A factor of 1 leaves the rectangle unchanged; 2 doubles its width or
/// height. Factors below 1 shrink it.
pub fn expand(rect: &GroundRectangle, width_factor: f64, height_factor: f64) -> GroundRectangle {
    let dw = rect.width() * (1.0 - width_factor) / 2.0;
    let dh = rect.height() * (1.0 - height_factor) / 2.0;

    GroundRectangle {
        west: (rect.west + dw).max(-PI),
        south: (rect.south + dh).max(-FRAC_PI_2),
        east: (rect.east - dw).min(PI),
        north: (rect.north - dh).min(FRAC_PI_2),
    }
}

/// The four ground corners of a rectangle at height 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleCorners {
    pub wn: Cartographic,
    pub en: Cartographic,
    pub ws: Cartographic,
    pub es: Cartographic,
}

impl RectangleCorners {
    pub fn of(rect: &GroundRectangle) -> Self {
        Self {
            wn: rect.northwest(),
            en: rect.northeast(),
            ws: rect.southwest(),
            es: rect.southeast(),
        }
    }

    /// Project every corner with `project`; `None` if any corner fails.
    pub fn project<F>(&self, mut project: F) -> Option<[Cartesian2; 4]>
    where
        F: FnMut(Cartographic) -> Option<Cartesian2>,
    {
        Some([
            project(self.wn)?,
            project(self.en)?,
            project(self.ws)?,
            project(self.es)?,
        ])
    }
}

pub fn corners(rect: &GroundRectangle) -> RectangleCorners {
    RectangleCorners::of(rect)
}

/// Axis-aligned screen rectangle spanned by projected corners.
///
/// Returns `None` when the width or height is not positive.
pub fn overlay_from_corners(
    wn: Cartesian2,
    en: Cartesian2,
    ws: Cartesian2,
    _es: Cartesian2,
) -> Option<BoundingRectangle> {
    let width = en.x - wn.x;
    let height = ws.y - wn.y;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let x = (wn.x + en.x) / 2.0 - width / 2.0;
    let y = (wn.y + ws.y) / 2.0 - height / 2.0;
    Some(BoundingRectangle::new(x, y, width, height))
}
