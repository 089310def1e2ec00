mod editor;
mod error;
mod io;

pub use editor::EditorConfig;
pub use error::{ConfigError, Result};
pub use io::load_config;
