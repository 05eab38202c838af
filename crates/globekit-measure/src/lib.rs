//! Interactive measurement on the globe: distances, bearings, triangle
//! heights and areas, with label text ready for display.

pub mod drawer;
pub mod geometry;
pub mod locale;
pub mod measure;
pub mod units;

pub use drawer::{DrawStyle, Drawer, Shape, ShapeKind};
pub use locale::MeasureLocale;
pub use measure::{labels, Label, Measure, MeasureKind, MeasureResult};
pub use units::{convert_area, convert_length, MeasureUnits};
