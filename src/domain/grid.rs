use super::{Cell, LifeError, Result};
use rand::Rng;

/// Grid holds a fixed `rows × cols` matrix of cells in row-major order.
/// Dimensions never change after construction; generations produce a
/// fresh grid instead of mutating this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where each cell is independently alive with `probability`.
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn random(rows: usize, cols: usize, probability: f64) -> Self {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        let mut rng = rand::rng();
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random_bool(p)))
            .collect();
        Self { rows, cols, cells }
    }

    /// Assemble a grid from row-major cells produced by the transition engine
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Read a cell. Anything outside the grid is dead, never an error,
    /// which is what keeps edge neighbor counting bounded.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        if row < 0 || col < 0 {
            return Cell::Dead;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    /// Write a cell; out-of-bounds coordinates are rejected
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.check(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.check(row, col)?;
        let next = self.cells[idx].toggle();
        self.cells[idx] = next;
        Ok(next)
    }

    /// Row-major copy of every cell, for renderers
    pub fn flatten(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Borrow the row-major cells without copying
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their `(row, col)` positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Coordinates of every live cell, row-major
    pub fn alive_coordinates(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_grid_is_dead() {
        let grid = Grid::blank(30, 50);
        assert_eq!(grid.dimensions(), (30, 50));
        assert_eq!(grid.population(), 0);
        assert!(grid.cells().iter().all(|c| *c == Cell::Dead));
    }

    #[test]
    fn test_out_of_bounds_reads_are_dead() {
        let mut grid = Grid::blank(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, Cell::Alive).unwrap();
            }
        }
        assert_eq!(grid.get(-1, -1), Cell::Dead);
        assert_eq!(grid.get(-1, 0), Cell::Dead);
        assert_eq!(grid.get(0, 3), Cell::Dead);
        assert_eq!(grid.get(3, 0), Cell::Dead);
        assert_eq!(grid.get(isize::MAX, isize::MAX), Cell::Dead);
        assert_eq!(grid.get(1, 1), Cell::Alive);
    }

    #[test]
    fn test_set_rejects_out_of_bounds() {
        let mut grid = Grid::blank(30, 50);
        let err = grid.set(30, 0, Cell::Alive).unwrap_err();
        assert_eq!(
            err,
            LifeError::InvalidCoordinate { row: 30, col: 0, rows: 30, cols: 50 }
        );
        assert!(grid.set(0, 50, Cell::Alive).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_toggle_flips_one_cell() {
        let mut grid = Grid::blank(5, 5);
        assert_eq!(grid.toggle(2, 3).unwrap(), Cell::Alive);
        assert_eq!(grid.alive_coordinates(), vec![(2, 3)]);
        assert_eq!(grid.toggle(2, 3).unwrap(), Cell::Dead);
        assert_eq!(grid.population(), 0);
        assert!(grid.toggle(5, 0).is_err());
    }

    #[test]
    fn test_flatten_is_row_major() {
        let mut grid = Grid::blank(2, 3);
        grid.set(0, 2, Cell::Alive).unwrap();
        grid.set(1, 0, Cell::Alive).unwrap();
        let flat = grid.flatten();
        assert_eq!(flat.len(), 6);
        assert_eq!(
            flat,
            vec![Cell::Dead, Cell::Dead, Cell::Alive, Cell::Alive, Cell::Dead, Cell::Dead]
        );
    }

    #[test]
    fn test_random_extremes_and_density() {
        assert_eq!(Grid::random(10, 10, 0.0).population(), 0);
        assert_eq!(Grid::random(10, 10, 1.0).population(), 100);
        assert_eq!(Grid::random(10, 10, 7.5).population(), 100);

        // 10k cells at p=0.5: the count sits far inside these bounds
        let grid = Grid::random(100, 100, 0.5);
        let alive = grid.population();
        assert!(alive > 4000 && alive < 6000, "alive = {}", alive);
        assert_eq!(grid.flatten().len(), 100 * 100);
    }
}
