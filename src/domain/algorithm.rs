//! Algorithm enum for selecting the transition implementation.

use super::{Grid, transition};

/// Available transition implementations.
/// Both produce identical grids; they only differ in how cells are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Cell-by-cell spread across the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the next generation with this implementation
    pub fn next_grid(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => transition::next_grid(grid),
            Algorithm::Parallel => transition::next_grid_parallel(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_all_algorithms_agree_on_blinker() {
        let mut grid = Grid::blank(6, 6);
        for col in 1..4 {
            grid.set(2, col, Cell::Alive).unwrap();
        }
        let results: Vec<_> = Algorithm::all().iter().map(|a| a.next_grid(&grid)).collect();
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(results[0].alive_coordinates(), vec![(1, 2), (2, 2), (3, 2)]);
    }
}
