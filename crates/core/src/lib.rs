//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Lights Out rules and session state. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted random source) produces identical boards
//! - **Testable**: Every rule is a plain function over a [`Grid`]
//! - **Portable**: Can be driven by a terminal, a GUI, or a test harness
//!
//! # Module Structure
//!
//! - [`grid`]: `rows x cols` board of lights
//! - [`rules`]: board generation, neighbour toggling, win detection
//! - [`game_state`]: one session: grid, status, move counter, restarts
//! - [`rng`]: injectable random source and the seeded default
//! - [`snapshot`]: read-only copy of a session for rendering
//!
//! # Game Rules
//!
//! - Each cell starts lit independently with the configured probability
//! - Toggling a cell flips it and its up/down/left/right neighbours;
//!   neighbours off the board are skipped
//! - The game is won when every light is off; a won game ignores toggles
//!   until restarted
//!
//! # Example
//!
//! ```
//! use lights_out_core::{GameState, Grid};
//! use lights_out_types::{Coord, GameConfig, GameStatus};
//!
//! // Every draw is below p, so the whole 3x3 board starts lit
//! let mut game = GameState::with_rng(GameConfig::new(3, 3, 0.5), || 0.0);
//! assert_eq!(game.lit_count(), 9);
//!
//! // Toggle the centre: the plus shape goes dark
//! game.toggle_around(Coord::new(1, 1)).unwrap();
//! assert_eq!(game.lit_count(), 4);
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // The pure rules work without a session too
//! let mut grid = Grid::new(1, 1);
//! lights_out_core::toggle_around(&mut grid, Coord::new(0, 0)).unwrap();
//! assert!(!lights_out_core::has_won(&grid));
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use lights_out_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::{RandomSource, SimpleRng};
pub use rules::{has_won, initialize, neighborhood, toggle_around, Flipped, MAX_FLIPPED};
pub use snapshot::GameSnapshot;
