use serde::{Deserialize, Serialize};

use crate::geo::{Cartesian3, GroundRectangle};

/// How a view projects the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneMode {
    Scene2D,
    Columbus,
    Scene3D,
    /// Transitioning between two modes; camera transforms are unstable.
    Morphing,
}

/// Camera attitude in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// Looking straight down with north up.
    pub fn top_down() -> Self {
        Self::new(0.0, -std::f64::consts::FRAC_PI_2, 0.0)
    }
}

/// Snapshot of a camera, recomputed on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Cartesian3,
    pub orientation: Orientation,
    /// Height above the ellipsoid in meters.
    pub height: f64,
}

/// Where a camera command should place the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraTarget {
    /// Frame the whole rectangle.
    Rectangle(GroundRectangle),
    /// Put the camera eye at this world position.
    Position(Cartesian3),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_pitch() {
        let o = Orientation::top_down();
        assert_eq!(o.heading, 0.0);
        assert!((o.pitch + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn scene_mode_serde_lowercase() {
        let json = serde_json::to_string(&SceneMode::Scene3D).unwrap();
        assert_eq!(json, "\"scene3d\"");
        let back: SceneMode = serde_json::from_str("\"morphing\"").unwrap();
        assert_eq!(back, SceneMode::Morphing);
    }

    #[test]
    fn camera_target_variants() {
        let targets = [
            CameraTarget::Rectangle(GroundRectangle::new(-1.0, 0.0, 1.0, 0.5)),
            CameraTarget::Position(Cartesian3::new(1.0, 2.0, 3.0)),
        ];
        for target in &targets {
            let json = serde_json::to_string(target).unwrap();
            let back: CameraTarget = serde_json::from_str(&json).unwrap();
            assert_eq!(*target, back);
        }
    }
}
