mod error;
mod transform;

pub use error::{Result, ViewportError};
pub use transform::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ViewportTransform, Zoom};
