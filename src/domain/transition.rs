//! Generational transition for a bounded (non-wrapping) universe.
//!
//! Every function here reads one immutable snapshot and builds a new grid,
//! so no cell ever sees a neighbor that was already updated this generation.

use super::{Cell, Grid};
use rayon::prelude::*;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live cells among the 8 neighbors; off-grid neighbors count as dead
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (r, c) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.get(r + dr, c + dc).is_alive())
        .count() as u8
}

fn next_cell(grid: &Grid, index: usize) -> Cell {
    let cols = grid.cols();
    let (row, col) = (index / cols, index % cols);
    grid.cells()[index].evolve(live_neighbors(grid, row, col))
}

/// Compute the next generation serially
pub fn next_grid(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = (0..rows * cols).map(|i| next_cell(grid, i)).collect();
    Grid::from_cells(rows, cols, cells)
}

/// Compute the next generation with rayon, one task per cell range.
/// Produces exactly the same grid as [`next_grid`].
pub fn next_grid_parallel(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells: Vec<Cell> = (0..rows * cols)
        .into_par_iter()
        .map(|i| next_cell(grid, i))
        .collect();
    Grid::from_cells(rows, cols, cells)
}
