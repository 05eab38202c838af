//! Drawer data types.

use globekit_common::{Cartesian3, Color};
use globekit_config::schema::MeasureConfig;
use serde::{Deserialize, Serialize};

/// Geometry a [`Drawer`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Polyline,
    Polygon,
    /// Right triangle from two picked points: start, the point under the
    /// end at the start's position, end.
    Triangle,
}

impl ShapeKind {
    /// Points needed before the shape can be finished.
    pub fn min_points(self) -> usize {
        match self {
            ShapeKind::Line | ShapeKind::Polyline | ShapeKind::Triangle => 2,
            ShapeKind::Polygon => 3,
        }
    }

    /// Points after which drawing completes on its own.
    pub fn max_points(self) -> Option<usize> {
        match self {
            ShapeKind::Line | ShapeKind::Triangle => Some(2),
            ShapeKind::Polyline | ShapeKind::Polygon => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub color: Color,
    /// Line width in pixels.
    pub width: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: Color::YELLOW,
            width: 2,
        }
    }
}

impl DrawStyle {
    pub fn from_config(config: &MeasureConfig) -> Self {
        Self {
            color: Color::from_hex(&config.line_color).unwrap_or(Color::YELLOW),
            width: config.line_width,
        }
    }
}

/// A finished shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub positions: Vec<Cartesian3>,
    pub style: DrawStyle,
}

/// Interactive shape construction from picked points.
///
/// `drop_point` commits a point, `moving` previews the next one under the
/// cursor, `play_off` finishes and hands back the [`Shape`].
#[derive(Debug, Clone)]
pub struct Drawer {
    pub(super) kind: ShapeKind,
    pub(super) style: DrawStyle,
    /// Committed break points.
    pub(super) points: Vec<Cartesian3>,
    pub(super) cursor: Option<Cartesian3>,
    /// What would be drawn right now, preview included.
    pub(super) active: Vec<Cartesian3>,
    pub(super) complete: bool,
}

impl Drawer {
    pub fn new(kind: ShapeKind, style: DrawStyle) -> Self {
        Self {
            kind,
            style,
            points: Vec::new(),
            cursor: None,
            active: Vec::new(),
            complete: false,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn points(&self) -> &[Cartesian3] {
        &self.points
    }

    /// Current geometry including the cursor preview.
    pub fn positions(&self) -> &[Cartesian3] {
        &self.active
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }
}
