//! Grid module - the lights
//!
//! A `rows x cols` board of booleans, `true` = lit. Uses a flat row-major
//! vector; dimensions are fixed for the lifetime of the grid.
//! Coordinates: `(row, col)` where row 0 is the top and col 0 the left edge.

use std::fmt;

use crate::types::Coord;

/// A rectangular board of lights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of lights, row-major order (row * cols + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every light off
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build from nested rows.
    ///
    /// Returns `None` for an empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let n_rows = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Some(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    /// Convert to nested rows, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols.max(1)).map(<[bool]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        Some(coord.row * self.cols + coord.col)
    }

    /// Check if the coordinate lies on the grid
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Get light at `coord`.
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set light at `coord`.
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, lit: bool) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = lit;
                true
            }
            None => false,
        }
    }

    /// Invert one light.
    /// Returns false (and changes nothing) if out of bounds
    pub fn flip(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = !self.cells[idx];
                true
            }
            None => false,
        }
    }

    /// Row-major view of every light
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Coordinates of lit cells in row-major order.
    ///
    /// Computed from the cells on every call, so it can never go stale.
    pub fn lit_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &lit)| lit)
            .map(move |(idx, _)| Coord::new(idx / cols, idx % cols))
    }

    /// True when every light is off
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }
}

/// Renders `O` for lit and `.` for unlit, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.index(Coord::new(0, 0)), Some(0));
        assert_eq!(grid.index(Coord::new(0, 3)), Some(3));
        assert_eq!(grid.index(Coord::new(1, 0)), Some(4));
        assert_eq!(grid.index(Coord::new(2, 3)), Some(11));
        assert_eq!(grid.index(Coord::new(3, 0)), None);
        assert_eq!(grid.index(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(2, 3);
        grid.set(Coord::new(1, 2), true);
        assert_eq!(grid.cells, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_flip_out_of_bounds_is_noop() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.flip(Coord::new(2, 0)));
        assert!(grid.is_dark());
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert!(Grid::from_rows(vec![]).is_none());
        assert!(Grid::from_rows(vec![vec![]]).is_none());
        assert!(Grid::from_rows(vec![vec![true, false], vec![true]]).is_none());
    }

    #[test]
    fn test_display_matches_row_layout() {
        let grid = Grid::from_rows(vec![
            vec![false, false, false],
            vec![true, true, false],
            vec![false, false, false],
        ])
        .unwrap();
        assert_eq!(grid.to_string(), "...\nOO.\n...");
    }
}
