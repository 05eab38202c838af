//! The contract a host rendering toolkit must satisfy.
//!
//! Views are shared handles: every method takes `&self` and the host is
//! expected to use interior mutability. Camera commands may synchronously
//! raise camera-changed notifications on the same or another view, so
//! implementations must not hold internal borrows while emitting.

use globekit_common::{
    BoundingRectangle, CameraPose, CameraTarget, Cartesian2, Cartesian3, Color, GroundRectangle,
    HostError, Orientation, OverlayId, SceneMode, SubscriptionId,
};

pub type HostResult<T> = Result<T, HostError>;

/// Appearance of a screen-space overlay quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: Color,
    pub outline: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::RED.with_alpha(0.5),
            outline: true,
        }
    }
}

pub trait SceneView {
    fn camera_pose(&self) -> CameraPose;

    fn scene_mode(&self) -> SceneMode;

    /// Ground footprint of the current view, or `None` when the camera
    /// looks past the horizon or the projection cannot produce one.
    fn compute_view_rectangle(&self) -> Option<GroundRectangle>;

    /// World position under the center of the canvas, if it hits the globe.
    fn pick_center(&self) -> Option<Cartesian3>;

    fn set_camera_view(
        &self,
        target: CameraTarget,
        orientation: Orientation,
        duration_seconds: f64,
    ) -> HostResult<()>;

    /// Window coordinates of a world position, or `None` when it is behind
    /// the camera or outside the canvas.
    fn project_to_screen(&self, position: Cartesian3) -> Option<Cartesian2>;

    /// Lock the camera to orbit `target`, placed at `offset` in the
    /// target's local east-north-up frame.
    fn look_at(&self, target: Cartesian3, offset: Cartesian3) -> HostResult<()>;

    /// Drop any look-at lock and return the camera to free control.
    fn release_look_at(&self);

    /// Fraction of camera movement required before a camera-changed
    /// notification fires.
    fn percentage_changed(&self) -> f64;

    fn set_percentage_changed(&self, value: f64);

    fn camera_controls_enabled(&self) -> bool;

    fn set_camera_controls_enabled(&self, enabled: bool);

    fn on_camera_changed(&self, handler: Box<dyn Fn()>) -> SubscriptionId;

    fn off_camera_changed(&self, id: SubscriptionId) -> bool;

    fn on_pointer_move(&self, handler: Box<dyn Fn(Cartesian2)>) -> SubscriptionId;

    fn off_pointer_move(&self, id: SubscriptionId) -> bool;

    /// Add a hidden overlay quad.
    fn add_overlay_rectangle(&self, style: &OverlayStyle) -> HostResult<OverlayId>;

    fn update_overlay_rectangle(&self, id: OverlayId, rect: BoundingRectangle) -> HostResult<()>;

    fn set_overlay_visible(&self, id: OverlayId, visible: bool);

    fn remove_overlay(&self, id: OverlayId) -> bool;

    /// `true` once the host has torn the view down.
    fn is_destroyed(&self) -> bool {
        false
    }
}
