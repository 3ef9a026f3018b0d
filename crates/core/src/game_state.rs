//! Game state module - one Lights Out session
//!
//! Owns the grid, the random source used to generate it, and the
//! `Playing`/`Won` status. Status is re-evaluated after every toggle; once
//! won, toggles are ignored until [`GameState::restart`].

use log::{debug, info};

use crate::error::CoreError;
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::rules::{has_won, initialize, toggle_around};
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, GameAction, GameConfig, GameStatus};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    status: GameStatus,
    /// Toggles applied in the current game.
    moves: u32,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing its board from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let grid = initialize(config.rows, config.cols, config.lit_probability, &mut rng);
        Self::assemble(config, grid, rng)
    }

    /// Start from an existing board.
    ///
    /// Later restarts generate boards of the same size using the default lit
    /// probability.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let config = GameConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            ..GameConfig::default()
        };
        Self::assemble(config, grid, rng)
    }

    fn assemble(config: GameConfig, grid: Grid, rng: R) -> Self {
        let status = status_of(&grid);
        Self {
            config,
            grid,
            rng,
            status,
            moves: 0,
            episode_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn lit_count(&self) -> usize {
        self.grid.lit_count()
    }

    /// True iff every light is off.
    pub fn has_won(&self) -> bool {
        has_won(&self.grid)
    }

    /// Throw the board away and generate a new one from the same config.
    pub fn restart(&mut self) {
        self.grid = initialize(
            self.config.rows,
            self.config.cols,
            self.config.lit_probability,
            &mut self.rng,
        );
        self.status = status_of(&self.grid);
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(
            "game {} started, {} lit",
            self.episode_id,
            self.grid.lit_count()
        );
    }

    /// Toggle `coord` and its neighbours.
    ///
    /// Returns `Ok(true)` when the board changed and `Ok(false)` when the game
    /// is already won. An off-grid `coord` is an error even after a win.
    pub fn toggle_around(&mut self, coord: Coord) -> Result<bool, CoreError> {
        if !self.grid.contains(coord) {
            return Err(CoreError::InvalidCoordinate {
                coord,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }
        if self.status.is_won() {
            return Ok(false);
        }

        let flipped = toggle_around(&mut self.grid, coord)?;
        self.moves = self.moves.saturating_add(1);
        self.status = status_of(&self.grid);
        debug!("toggled {coord}: {} cells flipped", flipped.len());

        if self.status.is_won() {
            info!(
                "game {} won in {} moves",
                self.episode_id, self.moves
            );
        }
        Ok(true)
    }

    /// Apply an input action.
    ///
    /// Cursor actions never reach the core (the input layer resolves
    /// `ToggleCursor` into `Toggle`), so they report no change.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, CoreError> {
        match action {
            GameAction::Toggle(coord) => self.toggle_around(coord),
            GameAction::Restart => {
                self.restart();
                Ok(true)
            }
            GameAction::CursorUp
            | GameAction::CursorDown
            | GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::ToggleCursor => Ok(false),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.lit_count = self.grid.lit_count();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn status_of(grid: &Grid) -> GameStatus {
    if has_won(grid) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_rng() -> impl FnMut() -> f64 {
        || 0.0
    }

    #[test]
    fn test_fully_lit_board_is_playing() {
        let game = GameState::with_rng(GameConfig::new(2, 3, 1.0), lit_rng());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.lit_count(), 6);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_dark_board_starts_won() {
        let game = GameState::new(GameConfig::new(4, 4, 0.0), 3);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.has_won());
    }

    #[test]
    fn test_toggle_counts_moves() {
        let mut game = GameState::with_rng(GameConfig::new(3, 3, 1.0), lit_rng());
        assert_eq!(game.toggle_around(Coord::new(1, 1)), Ok(true));
        assert_eq!(game.toggle_around(Coord::new(0, 0)), Ok(true));
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_invalid_toggle_does_not_count() {
        let mut game = GameState::with_rng(GameConfig::new(3, 3, 1.0), lit_rng());
        assert!(game.toggle_around(Coord::new(3, 0)).is_err());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.lit_count(), 9);
    }

    #[test]
    fn test_restart_bumps_episode_and_resets_moves() {
        let mut game = GameState::with_rng(GameConfig::new(3, 3, 1.0), lit_rng());
        game.toggle_around(Coord::new(1, 1)).unwrap();
        game.restart();
        assert_eq!(game.episode_id(), 1);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.lit_count(), 9);
    }

    #[test]
    fn test_cursor_actions_are_not_core_state() {
        let mut game = GameState::with_rng(GameConfig::new(2, 2, 1.0), lit_rng());
        for action in [
            GameAction::CursorUp,
            GameAction::CursorDown,
            GameAction::CursorLeft,
            GameAction::CursorRight,
            GameAction::ToggleCursor,
        ] {
            assert_eq!(game.apply_action(action), Ok(false));
        }
        assert_eq!(game.lit_count(), 4);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let game = GameState::with_rng(GameConfig::new(2, 2, 1.0), lit_rng());
        let mut snap = GameSnapshot::default();
        snap.cells.reserve(16);
        let cap = snap.cells.capacity();
        game.snapshot_into(&mut snap);
        assert_eq!(snap.cells.capacity(), cap);
        assert_eq!(snap.cells, vec![true; 4]);
        assert_eq!(snap.lit_count, 4);
        assert!(!snap.won());
    }
}
