//! Two-view camera synchronization.
//!
//! A [`ViewportSynchronizer`] ties a primary and a secondary [`SceneView`]
//! together. In overview mode the secondary frames a widened copy of the
//! primary's ground footprint and outlines that footprint with an overlay
//! quad. In mirror mode whichever view the user is driving locks the other
//! onto the same point.
//!
//! Lifecycle: `Created -> Started -> Destroyed`, with `stop` returning a
//! started synchronizer to `Created`.
//!
//! [`SceneView`]: crate::host::SceneView

mod handlers;
mod lifecycle;
mod types;


use std::rc::Rc;

pub use lifecycle::SyncBuilder;
pub use types::{Lifecycle, OverlayUpdate, Side, SkipReason, TickOutcome};

/// Keeps two scene views' cameras in step.
///
/// Dropping a synchronizer that was never destroyed tears it down the same
/// way `destroy` does.
pub struct ViewportSynchronizer {
    shared: Rc<types::Shared>,
}
