use crate::types::{Coord, GameStatus};

/// Read-only copy of a game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major lights, `true` = lit
    pub cells: Vec<bool>,
    pub lit_count: usize,
    pub moves: u32,
    pub episode_id: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn is_lit(&self, coord: Coord) -> bool {
        if coord.row >= self.rows || coord.col >= self.cols {
            return false;
        }
        self.cells[coord.row * self.cols + coord.col]
    }

    pub fn won(&self) -> bool {
        self.status.is_won()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            lit_count: 0,
            moves: 0,
            episode_id: 0,
            status: GameStatus::Won,
        }
    }
}
