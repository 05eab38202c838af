pub mod errors;
pub mod events;
pub mod geo;
pub mod id;
pub mod types;

pub use errors::{ConfigError, GlobeError, HostError, MeasureError, SyncError};
pub use events::Listeners;
pub use geo::{Cartesian3, Cartographic, EastNorthUp, GroundRectangle, WGS84};
pub use id::{OverlayId, SubscriptionId};
pub use types::{
    BoundingRectangle, CameraPose, CameraTarget, Cartesian2, Color, Orientation, SceneMode,
};

pub type Result<T> = std::result::Result<T, GlobeError>;
