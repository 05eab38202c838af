//! In-memory `SceneView` with a flat, equirectangular projection.
//!
//! The visible ground rectangle is the camera: it maps linearly onto the
//! canvas, west edge at x = 0 and north edge at y = 0. Camera height is the
//! rectangle width in radians times the equatorial radius. Used by tests
//! and by the CLI's scripted sessions.

use std::cell::{Cell, RefCell};
use std::f64::consts::{FRAC_PI_4, PI, TAU};

use globekit_common::{
    BoundingRectangle, CameraPose, CameraTarget, Cartesian2, Cartesian3, Cartographic,
    GroundRectangle, HostError, Listeners, Orientation, OverlayId, SceneMode, SubscriptionId,
    WGS84,
};
use tracing::trace;

use crate::host::{HostResult, OverlayStyle, SceneView};

/// Projections within this many pixels outside the canvas still count.
const EDGE_TOLERANCE_PX: f64 = 0.5;

/// A 3D camera pitched above this sees the horizon and has no footprint.
const HORIZON_PITCH: f64 = -FRAC_PI_4;

/// A camera command received by a [`FlatView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    SetView {
        target: CameraTarget,
        orientation: Orientation,
        duration_seconds: f64,
    },
    LookAt {
        target: Cartesian3,
        offset: Cartesian3,
    },
    Release,
}

/// An overlay quad as last drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRecord {
    pub style: OverlayStyle,
    pub rect: Option<BoundingRectangle>,
    pub visible: bool,
    /// Number of `update_overlay_rectangle` calls.
    pub draws: usize,
}

#[derive(Debug, Clone, Copy)]
struct CameraState {
    rect: GroundRectangle,
    /// Rectangle as of the last camera-changed notification.
    notified: GroundRectangle,
    mode: SceneMode,
    orientation: Orientation,
    percentage_changed: f64,
    controls_enabled: bool,
    look_at: Option<(Cartesian3, Cartesian3)>,
    destroyed: bool,
}

pub struct FlatView {
    name: String,
    canvas: (f64, f64),
    state: RefCell<CameraState>,
    camera_changed: Listeners<()>,
    pointer_moved: Listeners<Cartesian2>,
    commands: RefCell<Vec<CameraCommand>>,
    overlays: RefCell<Vec<(OverlayId, OverlayRecord)>>,
    fail_next: Cell<bool>,
    projector: RefCell<Option<Projector>>,
}

/// Custom canvas projection for [`FlatView::set_projector`].
pub type Projector = Box<dyn Fn(Cartographic) -> Option<Cartesian2>>;

impl FlatView {
    /// A 2D view of `rect` on a canvas of `width` x `height` pixels.
    pub fn new(name: impl Into<String>, width: f64, height: f64, rect: GroundRectangle) -> Self {
        Self {
            name: name.into(),
            canvas: (width, height),
            state: RefCell::new(CameraState {
                rect,
                notified: rect,
                mode: SceneMode::Scene2D,
                orientation: Orientation::top_down(),
                percentage_changed: 0.5,
                controls_enabled: true,
                look_at: None,
                destroyed: false,
            }),
            camera_changed: Listeners::new(),
            pointer_moved: Listeners::new(),
            commands: RefCell::new(Vec::new()),
            overlays: RefCell::new(Vec::new()),
            fail_next: Cell::new(false),
            projector: RefCell::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        self.canvas
    }

    pub fn rectangle(&self) -> GroundRectangle {
        self.state.borrow().rect
    }

    // -- user input -------------------------------------------------------

    /// Drag the map by the given offsets in radians. Ignored while the
    /// user camera controls are disabled.
    pub fn pan(&self, dlon: f64, dlat: f64) -> bool {
        if !self.camera_controls_enabled() {
            trace!(view = %self.name, "pan ignored: controls disabled");
            return false;
        }
        let r = self.rectangle();
        self.move_camera(GroundRectangle::new(
            r.west + dlon,
            r.south + dlat,
            r.east + dlon,
            r.north + dlat,
        ));
        true
    }

    /// Zoom about the center; `factor` > 1 zooms out.
    pub fn zoom(&self, factor: f64) -> bool {
        if !self.camera_controls_enabled() || factor <= 0.0 {
            return false;
        }
        let r = self.rectangle();
        let c = r.center();
        let half_w = r.width() * factor / 2.0;
        let half_h = r.height() * factor / 2.0;
        self.move_camera(GroundRectangle::new(
            c.longitude - half_w,
            c.latitude - half_h,
            c.longitude + half_w,
            c.latitude + half_h,
        ));
        true
    }

    /// Put the camera on `rect` as if the user had navigated there.
    pub fn set_rectangle(&self, rect: GroundRectangle) {
        self.move_camera(rect);
    }

    pub fn move_pointer(&self, position: Cartesian2) {
        if self.is_destroyed() {
            return;
        }
        self.pointer_moved.emit(position);
    }

    pub fn set_scene_mode(&self, mode: SceneMode) {
        self.state.borrow_mut().mode = mode;
    }

    pub fn set_pitch(&self, pitch: f64) {
        self.state.borrow_mut().orientation.pitch = pitch;
    }

    /// Tear the view down; listeners are dropped and later host calls fail.
    pub fn destroy(&self) {
        self.state.borrow_mut().destroyed = true;
        self.camera_changed.clear();
        self.pointer_moved.clear();
        self.overlays.borrow_mut().clear();
    }

    /// Make the next `set_camera_view` or `look_at` fail.
    pub fn fail_next_camera_command(&self) {
        self.fail_next.set(true);
    }

    /// Replace the canvas projection, e.g. to simulate a mirrored or warped
    /// display. `None` restores the equirectangular mapping.
    pub fn set_projector(&self, projector: Option<Projector>) {
        *self.projector.borrow_mut() = projector;
    }

    // -- inspection -------------------------------------------------------

    pub fn commands(&self) -> Vec<CameraCommand> {
        self.commands.borrow().clone()
    }

    pub fn clear_commands(&self) {
        self.commands.borrow_mut().clear();
    }

    pub fn look_at_lock(&self) -> Option<(Cartesian3, Cartesian3)> {
        self.state.borrow().look_at
    }

    pub fn overlay(&self, id: OverlayId) -> Option<OverlayRecord> {
        self.overlays
            .borrow()
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, record)| *record)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.borrow().len()
    }

    pub fn camera_listener_count(&self) -> usize {
        self.camera_changed.len()
    }

    pub fn pointer_listener_count(&self) -> usize {
        self.pointer_moved.len()
    }

    // -- internals --------------------------------------------------------

    fn destroyed_error(&self) -> HostError {
        HostError::new(format!("view {} is destroyed", self.name))
    }

    fn check_command(&self) -> HostResult<()> {
        if self.is_destroyed() {
            return Err(self.destroyed_error());
        }
        if self.fail_next.replace(false) {
            return Err(HostError::new(format!(
                "view {} rejected camera command",
                self.name
            )));
        }
        Ok(())
    }

    /// Move the camera and notify listeners once the change exceeds the
    /// view's sensitivity. No borrow is held while listeners run.
    fn move_camera(&self, rect: GroundRectangle) {
        let fire = {
            let mut state = self.state.borrow_mut();
            state.rect = rect;
            let changed = relative_change(&state.notified, &rect);
            if changed > state.percentage_changed {
                state.notified = rect;
                true
            } else {
                false
            }
        };
        if fire {
            trace!(view = %self.name, "camera changed");
            self.camera_changed.emit(());
        }
    }

    /// Rectangle centered on `carto` sized so the camera sits at `height`.
    fn rect_around(&self, carto: Cartographic, height: f64) -> GroundRectangle {
        let (w, h) = self.canvas;
        let half_w = (height / WGS84.radii.x).max(f64::EPSILON) / 2.0;
        let half_h = half_w * h / w;
        GroundRectangle::new(
            carto.longitude - half_w,
            carto.latitude - half_h,
            carto.longitude + half_w,
            carto.latitude + half_h,
        )
    }
}

/// Largest center shift or size change between two rectangles, as a
/// fraction of the first one's extent.
fn relative_change(from: &GroundRectangle, to: &GroundRectangle) -> f64 {
    let w = from.width().max(f64::EPSILON);
    let h = from.height().max(f64::EPSILON);
    let a = from.center();
    let b = to.center();
    let mut dlon = (b.longitude - a.longitude).abs();
    if dlon > PI {
        dlon = TAU - dlon;
    }
    [
        dlon / w,
        (b.latitude - a.latitude).abs() / h,
        (to.width() - from.width()).abs() / w,
        (to.height() - from.height()).abs() / h,
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

impl SceneView for FlatView {
    fn camera_pose(&self) -> CameraPose {
        let state = self.state.borrow();
        let center = state.rect.center();
        let height = state.rect.width() * WGS84.radii.x;
        CameraPose {
            position: Cartesian3::from_radians(center.longitude, center.latitude, height),
            orientation: state.orientation,
            height,
        }
    }

    fn scene_mode(&self) -> SceneMode {
        self.state.borrow().mode
    }

    fn compute_view_rectangle(&self) -> Option<GroundRectangle> {
        let state = self.state.borrow();
        match state.mode {
            SceneMode::Morphing => None,
            SceneMode::Scene3D if state.orientation.pitch > HORIZON_PITCH => None,
            _ => Some(state.rect),
        }
    }

    fn pick_center(&self) -> Option<Cartesian3> {
        let state = self.state.borrow();
        if state.mode == SceneMode::Morphing {
            return None;
        }
        Some(state.rect.center().to_cartesian())
    }

    fn set_camera_view(
        &self,
        target: CameraTarget,
        orientation: Orientation,
        duration_seconds: f64,
    ) -> HostResult<()> {
        self.check_command()?;
        self.commands.borrow_mut().push(CameraCommand::SetView {
            target,
            orientation,
            duration_seconds,
        });
        let rect = match target {
            CameraTarget::Rectangle(rect) => rect,
            CameraTarget::Position(position) => {
                let carto = Cartographic::from_cartesian(position).ok_or_else(|| {
                    HostError::new("camera position at the earth's center")
                })?;
                self.rect_around(carto, carto.height)
            }
        };
        self.state.borrow_mut().orientation = orientation;
        self.move_camera(rect);
        Ok(())
    }

    fn project_to_screen(&self, position: Cartesian3) -> Option<Cartesian2> {
        let carto = Cartographic::from_cartesian(position)?;
        if let Some(project) = self.projector.borrow().as_ref() {
            return project(carto);
        }
        let state = self.state.borrow();
        if state.mode == SceneMode::Morphing {
            return None;
        }
        let rect = state.rect;
        let (w, h) = self.canvas;

        let mut dlon = carto.longitude - rect.west;
        if dlon < -PI {
            dlon += TAU;
        }
        let x = dlon / rect.width() * w;
        let y = (rect.north - carto.latitude) / rect.height() * h;

        let inside = |v: f64, max: f64| v >= -EDGE_TOLERANCE_PX && v <= max + EDGE_TOLERANCE_PX;
        if x.is_finite() && y.is_finite() && inside(x, w) && inside(y, h) {
            Some(Cartesian2::new(x, y))
        } else {
            None
        }
    }

    fn look_at(&self, target: Cartesian3, offset: Cartesian3) -> HostResult<()> {
        self.check_command()?;
        let carto = Cartographic::from_cartesian(target)
            .ok_or_else(|| HostError::new("look-at target at the earth's center"))?;
        self.commands
            .borrow_mut()
            .push(CameraCommand::LookAt { target, offset });
        let rect = self.rect_around(carto, offset.z.abs());
        self.state.borrow_mut().look_at = Some((target, offset));
        self.move_camera(rect);
        Ok(())
    }

    fn release_look_at(&self) {
        if self.is_destroyed() {
            return;
        }
        let had_lock = self.state.borrow_mut().look_at.take().is_some();
        if had_lock {
            self.commands.borrow_mut().push(CameraCommand::Release);
        }
    }

    fn percentage_changed(&self) -> f64 {
        self.state.borrow().percentage_changed
    }

    fn set_percentage_changed(&self, value: f64) {
        self.state.borrow_mut().percentage_changed = value;
    }

    fn camera_controls_enabled(&self) -> bool {
        self.state.borrow().controls_enabled
    }

    fn set_camera_controls_enabled(&self, enabled: bool) {
        self.state.borrow_mut().controls_enabled = enabled;
    }

    fn on_camera_changed(&self, handler: Box<dyn Fn()>) -> SubscriptionId {
        self.camera_changed.add(Box::new(move |()| handler()))
    }

    fn off_camera_changed(&self, id: SubscriptionId) -> bool {
        self.camera_changed.remove(id)
    }

    fn on_pointer_move(&self, handler: Box<dyn Fn(Cartesian2)>) -> SubscriptionId {
        self.pointer_moved.add(handler)
    }

    fn off_pointer_move(&self, id: SubscriptionId) -> bool {
        self.pointer_moved.remove(id)
    }

    fn add_overlay_rectangle(&self, style: &OverlayStyle) -> HostResult<OverlayId> {
        if self.is_destroyed() {
            return Err(self.destroyed_error());
        }
        let id = OverlayId::new();
        self.overlays.borrow_mut().push((
            id,
            OverlayRecord {
                style: *style,
                rect: None,
                visible: false,
                draws: 0,
            },
        ));
        Ok(id)
    }

    fn update_overlay_rectangle(&self, id: OverlayId, rect: BoundingRectangle) -> HostResult<()> {
        let mut overlays = self.overlays.borrow_mut();
        let record = overlays
            .iter_mut()
            .find(|(oid, _)| *oid == id)
            .map(|(_, record)| record)
            .ok_or_else(|| HostError::new(format!("unknown {id}")))?;
        record.rect = Some(rect);
        record.draws += 1;
        Ok(())
    }

    fn set_overlay_visible(&self, id: OverlayId, visible: bool) {
        if let Some((_, record)) = self
            .overlays
            .borrow_mut()
            .iter_mut()
            .find(|(oid, _)| *oid == id)
        {
            record.visible = visible;
        }
    }

    fn remove_overlay(&self, id: OverlayId) -> bool {
        let mut overlays = self.overlays.borrow_mut();
        let before = overlays.len();
        overlays.retain(|(oid, _)| *oid != id);
        overlays.len() != before
    }

    fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }
}
