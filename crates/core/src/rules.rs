//! Rules module - board generation, toggling and the win check
//!
//! These are free functions over [`Grid`] so any front end (or a test) can
//! drive them without a [`crate::GameState`].

use arrayvec::ArrayVec;
use log::debug;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::Coord;

/// Centre plus the four orthogonal neighbours.
pub const MAX_FLIPPED: usize = 5;

/// Offsets toggled around a selected cell: centre, left, right, up, down.
const PLUS_OFFSETS: [(isize, isize); MAX_FLIPPED] = [(0, 0), (0, -1), (0, 1), (-1, 0), (1, 0)];

/// Cells flipped by one toggle, stack allocated.
pub type Flipped = ArrayVec<Coord, MAX_FLIPPED>;

/// Generate a `rows x cols` grid where each cell is lit with probability
/// `lit_probability`.
///
/// A cell is lit iff its draw `u` satisfies `u < lit_probability`, so `0.0`
/// yields a dark board and `1.0` a fully lit one.
pub fn initialize<R>(rows: usize, cols: usize, lit_probability: f64, rng: &mut R) -> Grid
where
    R: RandomSource + ?Sized,
{
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.next_unit() < lit_probability {
                grid.set(Coord::new(row, col), true);
            }
        }
    }
    debug!(
        "generated {rows}x{cols} board with {} lit (p={lit_probability})",
        grid.lit_count()
    );
    grid
}

/// The in-bounds cells a toggle at `center` affects.
///
/// Off-grid neighbours are dropped. The centre itself must be on the grid.
pub fn neighborhood(grid: &Grid, center: Coord) -> Result<Flipped, CoreError> {
    if !grid.contains(center) {
        return Err(CoreError::InvalidCoordinate {
            coord: center,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    Ok(PLUS_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| center.offset(dr, dc))
        .filter(|&c| grid.contains(c))
        .collect())
}

/// Flip `center` and its orthogonal neighbours in place.
///
/// Returns the cells that were flipped: 5 in the interior, 4 on an edge, 3 in
/// a corner. On error the grid is untouched.
pub fn toggle_around(grid: &mut Grid, center: Coord) -> Result<Flipped, CoreError> {
    let cells = neighborhood(grid, center)?;
    for &c in &cells {
        grid.flip(c);
    }
    Ok(cells)
}

/// True iff no light is on.
pub fn has_won(grid: &Grid) -> bool {
    grid.is_dark()
}
