use std::fmt;
use std::str::FromStr;

use globekit_common::Cartesian3;
use serde::{Deserialize, Serialize};

use crate::drawer::{Shape, ShapeKind};

/// What a measurement session computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureKind {
    /// Segment and running total lengths along a polyline.
    Distance,
    /// Bearing and length of every segment.
    AzimuthDistance,
    /// Slant distance, height difference and horizontal distance.
    Triangle,
    /// Enclosed surface area.
    Area,
}

impl MeasureKind {
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            MeasureKind::Distance | MeasureKind::AzimuthDistance => ShapeKind::Polyline,
            MeasureKind::Triangle => ShapeKind::Triangle,
            MeasureKind::Area => ShapeKind::Polygon,
        }
    }

    /// Positions needed before any label can be computed.
    pub fn min_positions(self) -> usize {
        match self {
            MeasureKind::Distance | MeasureKind::AzimuthDistance => 2,
            MeasureKind::Area => 3,
            // start, horizontal point, end, start
            MeasureKind::Triangle => 4,
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureKind::Distance => "distance",
            MeasureKind::AzimuthDistance => "azimuth-distance",
            MeasureKind::Triangle => "triangle",
            MeasureKind::Area => "area",
        };
        f.write_str(name)
    }
}

impl FromStr for MeasureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(MeasureKind::Distance),
            "azimuth" | "azimuth-distance" => Ok(MeasureKind::AzimuthDistance),
            "triangle" => Ok(MeasureKind::Triangle),
            "area" => Ok(MeasureKind::Area),
            other => Err(format!("unknown measure kind: {other}")),
        }
    }
}

/// Text anchored at a world position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub position: Cartesian3,
    pub text: String,
}

impl Label {
    pub fn new(position: Cartesian3, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// A finished measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureResult {
    pub kind: MeasureKind,
    pub shape: Shape,
    pub labels: Vec<Label>,
}
