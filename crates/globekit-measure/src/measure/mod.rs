//! Measurement sessions and their labels.

mod labels;
mod session;
mod types;

pub use labels::labels;
pub use session::Measure;
pub use types::*;
