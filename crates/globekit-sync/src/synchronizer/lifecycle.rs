//! Construction, start/stop, and teardown.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use globekit_common::{BoundingRectangle, Color, OverlayId, SyncError};
use globekit_config::schema::{OverlayConfig, SyncConfig, SyncMode};
use tracing::{debug, info};

use crate::host::{OverlayStyle, SceneView};

use super::types::{
    Lifecycle, ListenerKind, OriginalSensitivity, Shared, Side, Subscription, TickOutcome,
};
use super::ViewportSynchronizer;

/// Builder for [`ViewportSynchronizer`]. Both views are required.
#[derive(Default)]
pub struct SyncBuilder {
    primary: Option<Rc<dyn SceneView>>,
    secondary: Option<Rc<dyn SceneView>>,
    config: SyncConfig,
    overlay_style: OverlayStyle,
}

impl SyncBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, view: Rc<dyn SceneView>) -> Self {
        self.primary = Some(view);
        self
    }

    pub fn secondary(mut self, view: Rc<dyn SceneView>) -> Self {
        self.secondary = Some(view);
        self
    }

    pub fn config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    pub fn overlay_style(mut self, style: OverlayStyle) -> Self {
        self.overlay_style = style;
        self
    }

    /// Take the overlay appearance from the `[overlay]` config section.
    pub fn overlay_config(mut self, overlay: &OverlayConfig) -> Result<Self, SyncError> {
        let color = Color::from_hex(&overlay.color).ok_or_else(|| {
            SyncError::InvalidArgument(format!("overlay color {:?} is not hex", overlay.color))
        })?;
        self.overlay_style = OverlayStyle {
            color,
            outline: overlay.outline,
        };
        Ok(self)
    }

    /// Validate inputs, borrow the views' change sensitivity, and create
    /// the overview quad. Nothing is touched on failure.
    pub fn build(self) -> Result<ViewportSynchronizer, SyncError> {
        let primary = self
            .primary
            .ok_or_else(|| SyncError::InvalidArgument("primary view can't be empty".into()))?;
        let secondary = self
            .secondary
            .ok_or_else(|| SyncError::InvalidArgument("secondary view can't be empty".into()))?;
        validate_config(&self.config)?;
        if primary.is_destroyed() || secondary.is_destroyed() {
            return Err(SyncError::InvalidArgument("view already destroyed".into()));
        }

        let overlay = if self.config.mode == SyncMode::Overview {
            let id = secondary.add_overlay_rectangle(&self.overlay_style)?;
            secondary.set_overlay_visible(id, false);
            Some(id)
        } else {
            None
        };

        let original_sensitivity = OriginalSensitivity {
            primary: primary.percentage_changed(),
            secondary: secondary.percentage_changed(),
        };
        primary.set_percentage_changed(self.config.percentage_changed);
        secondary.set_percentage_changed(self.config.percentage_changed);

        let original_controls =
            if self.config.mode == SyncMode::Overview && self.config.lock_overview_controls {
                let enabled = secondary.camera_controls_enabled();
                secondary.set_camera_controls_enabled(false);
                Some(enabled)
            } else {
                None
            };

        debug!(mode = ?self.config.mode, "viewport synchronizer created");

        Ok(ViewportSynchronizer {
            shared: Rc::new(Shared {
                primary,
                secondary,
                config: self.config,
                overlay_style: self.overlay_style,
                active: Cell::new(Side::Primary),
                synchronous: Cell::new(true),
                lifecycle: Cell::new(Lifecycle::Created),
                original_sensitivity,
                original_controls,
                subscriptions: RefCell::new(Vec::new()),
                overlay: Cell::new(overlay),
                last_overlay: Cell::new(None),
                last_error: RefCell::new(None),
            }),
        })
    }
}

fn validate_config(config: &SyncConfig) -> Result<(), SyncError> {
    if !(config.percentage_changed > 0.0 && config.percentage_changed <= 1.0) {
        return Err(SyncError::InvalidArgument(format!(
            "percentage_changed = {} is out of range (0, 1]",
            config.percentage_changed
        )));
    }
    for (name, factor) in [
        ("expand_width_factor", config.expand_width_factor),
        ("expand_height_factor", config.expand_height_factor),
    ] {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(SyncError::InvalidArgument(format!(
                "{name} = {factor} must be positive"
            )));
        }
    }
    Ok(())
}

impl ViewportSynchronizer {
    pub fn builder() -> SyncBuilder {
        SyncBuilder::new()
    }

    /// Fails with `InvalidArgument` when a view is missing or `config` is
    /// out of range.
    pub fn new(
        primary: Option<Rc<dyn SceneView>>,
        secondary: Option<Rc<dyn SceneView>>,
        config: SyncConfig,
    ) -> Result<Self, SyncError> {
        SyncBuilder {
            primary,
            secondary,
            config,
            overlay_style: OverlayStyle::default(),
        }
        .build()
    }

    /// Register listeners and begin synchronizing.
    ///
    /// Pointer-move on both views, camera-changed on the primary. The
    /// secondary camera is also watched in mirror mode, and in overview
    /// mode when its controls are left unlocked. Calling `start` while
    /// already started does nothing.
    pub fn start(&self) -> Result<(), SyncError> {
        let shared = &self.shared;
        match shared.lifecycle.get() {
            Lifecycle::Destroyed => return Err(SyncError::AlreadyDestroyed),
            Lifecycle::Started => {
                debug!("start ignored: already started");
                return Ok(());
            }
            Lifecycle::Created => {}
        }

        let watch_secondary = shared.config.mode == SyncMode::Mirror
            || shared.original_controls.is_none();

        let mut subs = Vec::with_capacity(4);
        for side in [Side::Primary, Side::Secondary] {
            subs.push(self.listen_pointer(side));
        }
        subs.push(self.listen_camera(Side::Primary));
        if watch_secondary {
            subs.push(self.listen_camera(Side::Secondary));
        }
        shared.subscriptions.borrow_mut().extend(subs);

        shared.lifecycle.set(Lifecycle::Started);
        info!(mode = ?shared.config.mode, watch_secondary, "synchronization started");
        Ok(())
    }

    /// Unregister all listeners. The overlay and sensitivity stay as they
    /// are and `start` may be called again.
    pub fn stop(&self) -> Result<(), SyncError> {
        match self.shared.lifecycle.get() {
            Lifecycle::Destroyed => Err(SyncError::AlreadyDestroyed),
            Lifecycle::Created => Ok(()),
            Lifecycle::Started => {
                self.unregister_all();
                self.shared.lifecycle.set(Lifecycle::Created);
                debug!("synchronization stopped");
                Ok(())
            }
        }
    }

    /// Pause or resume propagation without touching listeners. The flag
    /// survives `stop` and `start`.
    pub fn set_synchronous(&self, synchronous: bool) -> Result<(), SyncError> {
        if self.shared.is_destroyed() {
            return Err(SyncError::AlreadyDestroyed);
        }
        self.shared.synchronous.set(synchronous);
        debug!(synchronous, "synchronous toggled");
        Ok(())
    }

    /// Restore the views to their pre-construction state and release every
    /// resource. Views the host already destroyed are skipped.
    pub fn destroy(&self) -> Result<(), SyncError> {
        if self.shared.is_destroyed() {
            return Err(SyncError::AlreadyDestroyed);
        }
        self.teardown();
        info!("synchronizer destroyed");
        Ok(())
    }

    /// Run one synchronization step for a camera change on `side`, as the
    /// registered listener would, returning host errors to the caller.
    pub fn tick(&self, side: Side) -> Result<TickOutcome, SyncError> {
        self.shared.tick(side)
    }

    /// Mark `side` as the one the user is driving, as a pointer move would.
    pub fn activate(&self, side: Side) -> Result<(), SyncError> {
        if self.shared.is_destroyed() {
            return Err(SyncError::AlreadyDestroyed);
        }
        self.shared.handle_pointer_move(side);
        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.shared.lifecycle.get()
    }

    pub fn is_destroyed(&self) -> bool {
        self.shared.is_destroyed()
    }

    pub fn is_synchronous(&self) -> bool {
        self.shared.synchronous.get()
    }

    pub fn active_side(&self) -> Side {
        self.shared.active.get()
    }

    pub fn mode(&self) -> SyncMode {
        self.shared.config.mode
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        self.shared.overlay_style
    }

    pub fn overlay_id(&self) -> Option<OverlayId> {
        self.shared.overlay.get()
    }

    /// The footprint most recently drawn on the secondary view.
    pub fn last_overlay(&self) -> Option<BoundingRectangle> {
        self.shared.last_overlay.get()
    }

    /// The last error raised inside a host callback, if any.
    pub fn take_last_error(&self) -> Option<SyncError> {
        self.shared.last_error.borrow_mut().take()
    }

    pub fn primary(&self) -> &Rc<dyn SceneView> {
        &self.shared.primary
    }

    pub fn secondary(&self) -> &Rc<dyn SceneView> {
        &self.shared.secondary
    }

    fn listen_pointer(&self, side: Side) -> Subscription {
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let id = self
            .shared
            .view(side)
            .on_pointer_move(Box::new(move |_position| {
                if let Some(shared) = weak.upgrade() {
                    shared.handle_pointer_move(side);
                }
            }));
        Subscription {
            side,
            kind: ListenerKind::Pointer,
            id,
        }
    }

    fn listen_camera(&self, side: Side) -> Subscription {
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let id = self.shared.view(side).on_camera_changed(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.handle_camera_changed(side);
            }
        }));
        Subscription {
            side,
            kind: ListenerKind::Camera,
            id,
        }
    }

    fn unregister_all(&self) {
        // Taken out first so no borrow is held while the host runs.
        let subs = std::mem::take(&mut *self.shared.subscriptions.borrow_mut());
        for sub in subs {
            let view = self.shared.view(sub.side);
            if view.is_destroyed() {
                continue;
            }
            match sub.kind {
                ListenerKind::Camera => view.off_camera_changed(sub.id),
                ListenerKind::Pointer => view.off_pointer_move(sub.id),
            };
        }
    }

    fn teardown(&self) {
        let shared = &self.shared;
        shared.synchronous.set(false);
        self.unregister_all();

        let original = shared.original_sensitivity;
        if !shared.primary.is_destroyed() {
            shared.primary.set_percentage_changed(original.primary);
        }
        if !shared.secondary.is_destroyed() {
            shared.secondary.set_percentage_changed(original.secondary);
            if let Some(enabled) = shared.original_controls {
                shared.secondary.set_camera_controls_enabled(enabled);
            }
            if let Some(id) = shared.overlay.take() {
                shared.secondary.remove_overlay(id);
            }
        }
        shared.last_overlay.set(None);
        shared.lifecycle.set(Lifecycle::Destroyed);
    }
}

impl Drop for ViewportSynchronizer {
    fn drop(&mut self) {
        if !self.shared.is_destroyed() {
            self.teardown();
        }
    }
}
