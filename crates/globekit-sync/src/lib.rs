//! Camera synchronization between two globe viewports.
//!
//! The host toolkit is reached only through [`SceneView`]; everything in
//! this crate is single-threaded and runs inside the host's update loop.

pub mod host;
pub mod rectangle;
pub mod sim;
pub mod synchronizer;

pub use host::{HostResult, OverlayStyle, SceneView};
pub use rectangle::{corners, expand, overlay_from_corners, RectangleCorners};
pub use sim::FlatView;
pub use synchronizer::{
    Lifecycle, OverlayUpdate, Side, SkipReason, SyncBuilder, TickOutcome, ViewportSynchronizer,
};
