//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! keyboard selection cursor. Mouse clicks are resolved against the rendered
//! layout by the term crate, not here.

pub mod cursor;
pub mod map;

pub use lights_out_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
