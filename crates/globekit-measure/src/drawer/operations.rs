//! Drawer state transitions: drop_point, moving, cancel, shape, play_off.

use globekit_common::{Cartesian3, MeasureError};
use tracing::debug;

use crate::geometry::horizontal_point;

use super::{Drawer, Shape, ShapeKind};

impl Drawer {
    /// Commit a point. Returns `false` once the shape is complete.
    pub fn drop_point(&mut self, position: Cartesian3) -> Result<bool, MeasureError> {
        if self.complete {
            return Ok(false);
        }
        let mut points = self.points.clone();
        points.push(position);
        let active = preview(self.kind, &points, None)?;

        self.points = points;
        self.cursor = None;
        self.active = active;
        if let Some(max) = self.kind.max_points() {
            if self.points.len() >= max {
                self.complete = true;
                debug!(kind = ?self.kind, "shape complete");
            }
        }
        Ok(true)
    }

    /// Preview the shape with `position` as the next point. Ignored before
    /// the first point and after completion.
    pub fn moving(&mut self, position: Cartesian3) -> Result<bool, MeasureError> {
        if self.points.is_empty() || self.complete {
            return Ok(false);
        }
        self.active = preview(self.kind, &self.points, Some(position))?;
        self.cursor = Some(position);
        Ok(true)
    }

    /// Drop the last committed point. Triangles cannot be edited this way.
    pub fn cancel(&mut self) -> bool {
        if self.kind == ShapeKind::Triangle || self.points.pop().is_none() {
            return false;
        }
        self.complete = false;
        self.cursor = None;
        self.active = self.points.clone();
        true
    }

    /// The shape the committed points make, cursor excluded. Leaves the
    /// drawer untouched.
    pub fn shape(&self) -> Result<Shape, MeasureError> {
        let needed = self.kind.min_points();
        if self.points.len() < needed {
            return Err(MeasureError::NotEnoughPoints {
                needed,
                have: self.points.len(),
            });
        }
        Ok(Shape {
            kind: self.kind,
            positions: preview(self.kind, &self.points, None)?,
            style: self.style,
        })
    }

    /// Finish drawing and reset for the next shape. On error nothing is
    /// reset.
    pub fn play_off(&mut self) -> Result<Shape, MeasureError> {
        let shape = self.shape()?;
        self.reset();
        debug!(kind = ?self.kind, points = shape.positions.len(), "shape finished");
        Ok(shape)
    }

    /// Discard everything drawn so far.
    pub fn reset(&mut self) {
        self.points.clear();
        self.cursor = None;
        self.active.clear();
        self.complete = false;
    }
}

fn preview(
    kind: ShapeKind,
    points: &[Cartesian3],
    cursor: Option<Cartesian3>,
) -> Result<Vec<Cartesian3>, MeasureError> {
    if kind == ShapeKind::Triangle {
        if let (Some(&start), Some(end)) = (points.first(), cursor.or(points.get(1).copied())) {
            return Ok(vec![start, horizontal_point(start, end)?, end, start]);
        }
    }
    let mut active = points.to_vec();
    active.extend(cursor);
    Ok(active)
}
