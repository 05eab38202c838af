mod camera;
mod color;
mod screen;

pub use camera::*;
pub use color::*;
pub use screen::*;
