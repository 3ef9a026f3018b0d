//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a plain framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep rendering pure so views can be asserted on in tests
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lights_out_core as core;
pub use lights_out_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
