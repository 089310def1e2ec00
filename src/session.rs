mod editor;
mod error;
mod render;


pub use editor::{AppliedEdit, BrushCursor, EditorSession};
pub use error::{Asset, Result, SessionError};
pub use render::{render_frame, source_over};
