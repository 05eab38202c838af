//! Core types for ViewportSynchronizer.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use globekit_common::{BoundingRectangle, OverlayId, SubscriptionId, SyncError};
use globekit_config::schema::SyncConfig;

use crate::host::{OverlayStyle, SceneView};

/// One of the two synchronized views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Primary => write!(f, "primary"),
            Side::Secondary => write!(f, "secondary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed (or stopped); no listeners registered.
    Created,
    Started,
    /// Terminal.
    Destroyed,
}

/// Why a tick did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotStarted,
    /// `synchronous` is off.
    Paused,
    /// The notification came from the side the user is not driving.
    InactiveSide,
    /// The primary view has no computable ground footprint.
    NoGroundRectangle,
}

/// What happened to the footprint overlay during an overview tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayUpdate {
    Drawn(BoundingRectangle),
    /// A corner did not project into the secondary view.
    Unprojectable,
    /// Projected width or height was not positive.
    Degenerate,
}

/// Result of one synchronization tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Skipped(SkipReason),
    /// The secondary camera framed the expanded footprint.
    Framed(OverlayUpdate),
    /// The other view was locked onto the active view's center.
    PoseLocked,
    /// The other view received a copy of the active camera pose.
    PoseCopied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListenerKind {
    Camera,
    Pointer,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Subscription {
    pub side: Side,
    pub kind: ListenerKind,
    pub id: SubscriptionId,
}

/// Sensitivity values captured before the synchronizer touched the views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct OriginalSensitivity {
    pub primary: f64,
    pub secondary: f64,
}

/// State shared between the synchronizer and the listener closures it
/// registers with the host. Closures hold a `Weak` to this.
///
/// Every field is a `Cell` or a briefly borrowed `RefCell`: no borrow is
/// ever held across a call into a `SceneView`.
pub(super) struct Shared {
    pub primary: Rc<dyn SceneView>,
    pub secondary: Rc<dyn SceneView>,
    pub config: SyncConfig,
    pub overlay_style: OverlayStyle,
    pub active: Cell<Side>,
    pub synchronous: Cell<bool>,
    pub lifecycle: Cell<Lifecycle>,
    pub original_sensitivity: OriginalSensitivity,
    /// Secondary camera-control state before it was locked, if it was.
    pub original_controls: Option<bool>,
    pub subscriptions: RefCell<Vec<Subscription>>,
    pub overlay: Cell<Option<OverlayId>>,
    pub last_overlay: Cell<Option<BoundingRectangle>>,
    pub last_error: RefCell<Option<SyncError>>,
}

impl Shared {
    pub fn view(&self, side: Side) -> &Rc<dyn SceneView> {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle.get() == Lifecycle::Destroyed
    }
}
