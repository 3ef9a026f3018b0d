//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, tests).
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`, 0-indexed from the top-left corner.
//! A coordinate is only meaningful relative to a grid; bounds are checked by
//! the core, not here.
//!
//! # Game Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 5 | Grid height |
//! | `DEFAULT_COLS` | 5 | Grid width |
//! | `DEFAULT_LIT_PROBABILITY` | 0.25 | Chance each cell starts lit |
//!
//! # Examples
//!
//! ```
//! use lights_out_types::{Coord, GameAction, GameConfig, DEFAULT_ROWS};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.rows, DEFAULT_ROWS);
//!
//! // Actions carry a short label for logging
//! assert_eq!(GameAction::Toggle(Coord::new(0, 0)).as_str(), "toggle");
//!
//! // Coordinates convert from (row, col) tuples
//! let c: Coord = (1, 2).into();
//! assert_eq!(c, Coord::new(1, 2));
//! ```

use std::fmt;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 5;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 5;

/// Default probability that a cell starts lit
pub const DEFAULT_LIT_PROBABILITY: f64 = 0.25;


/// A cell position on the grid, `(row, col)` from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta.
    ///
    /// Returns `None` when either component would go negative. The upper
    /// bound depends on the grid and is left to the caller.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parameters for generating a new board.
///
/// Values are trusted by the core. Range checks belong to whoever builds the
/// config (the CLI layer does this).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that any given cell starts lit
    pub lit_probability: f64,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, lit_probability: f64) -> Self {
        Self {
            rows,
            cols,
            lit_probability,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            lit_probability: DEFAULT_LIT_PROBABILITY,
        }
    }
}

/// Whether the current game is still in progress.
///
/// - **Playing**: at least one light is on
/// - **Won**: every light is off; terminal until a new game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
}

impl GameStatus {
    pub fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won)
    }
}

/// Actions produced by the input layer.
///
/// Cursor movement is presentation state; only `Toggle` and `Restart` change
/// the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one row up
    CursorUp,
    /// Move the selection cursor one row down
    CursorDown,
    /// Move the selection cursor one column left
    CursorLeft,
    /// Move the selection cursor one column right
    CursorRight,
    /// Toggle the cell under the cursor
    ToggleCursor,
    /// Toggle a specific cell (mouse click)
    Toggle(Coord),
    /// Discard the board and start a new game
    Restart,
}

impl GameAction {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursor up",
            GameAction::CursorDown => "cursor down",
            GameAction::CursorLeft => "cursor left",
            GameAction::CursorRight => "cursor right",
            GameAction::ToggleCursor | GameAction::Toggle(_) => "toggle",
            GameAction::Restart => "restart",
        }
    }
}
