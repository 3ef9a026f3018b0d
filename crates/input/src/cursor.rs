//! Keyboard selection cursor.
//!
//! The cursor is presentation state: it lives beside the game, clamps to the
//! grid and never wraps.

use crate::types::{Coord, GameAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Coord,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Cursor at the top-left cell of a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Coord::default(),
            rows,
            cols,
        }
    }

    pub fn position(&self) -> Coord {
        self.pos
    }

    /// Jump to `coord`. Off-grid targets are ignored.
    pub fn move_to(&mut self, coord: Coord) -> bool {
        if coord.row < self.rows && coord.col < self.cols {
            self.pos = coord;
            true
        } else {
            false
        }
    }

    /// Step by one cell, stopping at the edges.
    pub fn step(&mut self, d_row: isize, d_col: isize) -> bool {
        match self.pos.offset(d_row, d_col) {
            Some(next) => self.move_to(next),
            None => false,
        }
    }

    /// Apply a cursor action.
    ///
    /// `ToggleCursor` resolves to `Toggle` at the current position; other
    /// cursor moves are consumed (`None`). Non-cursor actions pass through.
    pub fn resolve(&mut self, action: GameAction) -> Option<GameAction> {
        match action {
            GameAction::CursorUp => {
                self.step(-1, 0);
                None
            }
            GameAction::CursorDown => {
                self.step(1, 0);
                None
            }
            GameAction::CursorLeft => {
                self.step(0, -1);
                None
            }
            GameAction::CursorRight => {
                self.step(0, 1);
                None
            }
            GameAction::ToggleCursor => Some(GameAction::Toggle(self.pos)),
            GameAction::Toggle(coord) => {
                self.move_to(coord);
                Some(action)
            }
            GameAction::Restart => Some(action),
        }
    }
}
