mod engine;
mod error;
mod spec;


pub use engine::{BrushEngine, erase_mask_alpha};
pub use error::{BrushError, Result};
pub use spec::{BrushMode, BrushSpec};
