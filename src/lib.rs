//! Lights Out (workspace facade crate).
//!
//! Re-exports the workspace crates as `lights_out::{core, input, term, types}`
//! and holds the command-line configuration shared by the binary and tests.

pub mod config;

pub use lights_out_core as core;
pub use lights_out_input as input;
pub use lights_out_term as term;
pub use lights_out_types as types;
