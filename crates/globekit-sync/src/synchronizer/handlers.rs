//! Per-tick synchronization logic and the host-event entry points.

use globekit_common::{CameraTarget, Cartesian3, SceneMode, SyncError};
use globekit_config::schema::{StaleOverlayPolicy, SyncMode};
use tracing::{trace, warn};

use crate::rectangle::{expand, overlay_from_corners, RectangleCorners};

use super::types::{Lifecycle, OverlayUpdate, Shared, Side, SkipReason, TickOutcome};

impl Shared {
    /// Camera-changed notification from the host.
    ///
    /// Errors cannot be returned through the host's callback, so they are
    /// logged and parked in `last_error`.
    pub(super) fn handle_camera_changed(&self, side: Side) {
        if self.is_destroyed() {
            return;
        }
        match self.tick(side) {
            Ok(outcome) => trace!(%side, ?outcome, "sync tick"),
            Err(e) => {
                warn!(%side, "sync tick failed: {e}");
                *self.last_error.borrow_mut() = Some(e);
            }
        }
    }

    /// Pointer-move notification from the host: `side` becomes active.
    ///
    /// Both views drop their look-at lock: the newly active one so the user
    /// gets free control, the other so the next mirrored update starts
    /// unconstrained. Morphing views are left alone.
    pub(super) fn handle_pointer_move(&self, side: Side) {
        if self.is_destroyed() {
            return;
        }
        let previous = self.active.replace(side);
        if previous != side {
            trace!(from = %previous, to = %side, "active side changed");
        }
        for view in [self.view(side.other()), self.view(side)] {
            if view.scene_mode() != SceneMode::Morphing {
                view.release_look_at();
            }
        }
    }

    /// Propagate a camera change on `side` to the other view.
    pub(super) fn tick(&self, side: Side) -> Result<TickOutcome, SyncError> {
        match self.lifecycle.get() {
            Lifecycle::Destroyed => return Err(SyncError::AlreadyDestroyed),
            Lifecycle::Created => return Ok(TickOutcome::Skipped(SkipReason::NotStarted)),
            Lifecycle::Started => {}
        }
        if !self.synchronous.get() {
            return Ok(TickOutcome::Skipped(SkipReason::Paused));
        }
        // Commanding one camera may echo a notification from the other;
        // only the side the user is driving may propagate.
        if self.active.get() != side {
            return Ok(TickOutcome::Skipped(SkipReason::InactiveSide));
        }

        match (self.config.mode, side) {
            (SyncMode::Overview, Side::Primary) => self.update_overview(),
            _ => self.lock_pose(side),
        }
    }

    fn update_overview(&self) -> Result<TickOutcome, SyncError> {
        let Some(rect) = self.primary.compute_view_rectangle() else {
            return Ok(TickOutcome::Skipped(SkipReason::NoGroundRectangle));
        };

        let framed = expand(
            &rect,
            self.config.expand_width_factor,
            self.config.expand_height_factor,
        );
        let orientation = self.primary.camera_pose().orientation;
        self.secondary
            .set_camera_view(CameraTarget::Rectangle(framed), orientation, 0.0)?;

        let corners = RectangleCorners::of(&rect);
        let projected = corners.project(|c| self.secondary.project_to_screen(c.to_cartesian()));
        let Some([wn, en, ws, es]) = projected else {
            trace!("footprint corner off screen, overlay unchanged");
            return Ok(TickOutcome::Framed(OverlayUpdate::Unprojectable));
        };

        match overlay_from_corners(wn, en, ws, es) {
            Some(bounds) => {
                if let Some(id) = self.overlay.get() {
                    self.secondary.update_overlay_rectangle(id, bounds)?;
                    self.secondary.set_overlay_visible(id, true);
                }
                self.last_overlay.set(Some(bounds));
                Ok(TickOutcome::Framed(OverlayUpdate::Drawn(bounds)))
            }
            None => {
                if self.config.stale_overlay == StaleOverlayPolicy::Hide {
                    if let Some(id) = self.overlay.get() {
                        self.secondary.set_overlay_visible(id, false);
                    }
                    self.last_overlay.set(None);
                }
                Ok(TickOutcome::Framed(OverlayUpdate::Degenerate))
            }
        }
    }

    /// Drive the other view from `side`: look-at lock around the screen
    /// center in 2D/Columbus views, full pose copy otherwise.
    fn lock_pose(&self, side: Side) -> Result<TickOutcome, SyncError> {
        let active = self.view(side);
        let other = self.view(side.other());
        let pose = active.camera_pose();

        match active.pick_center() {
            Some(center) if active.scene_mode() != SceneMode::Scene3D => {
                other.look_at(center, Cartesian3::new(0.0, 0.0, pose.height))?;
                Ok(TickOutcome::PoseLocked)
            }
            _ => {
                other.set_camera_view(
                    CameraTarget::Position(pose.position),
                    pose.orientation,
                    0.0,
                )?;
                Ok(TickOutcome::PoseCopied)
            }
        }
    }
}
