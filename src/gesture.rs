mod events;
mod router;
mod state;

#[cfg(test)]
mod tests;

pub use events::{InputEvent, Modifiers, PointerButton};
pub use router::{GestureAction, GestureRouter, MIN_PINCH_DISTANCE};
pub use state::GestureState;
