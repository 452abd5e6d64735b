mod cell;
mod error;
mod grid;
mod algorithm;
pub mod patterns;
pub mod transition;

pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{Pattern, PATTERNS, LOAD_DEFAULT, DEFAULT_PATTERN};
pub use algorithm::Algorithm;
pub use transition::{next_grid, next_grid_parallel, live_neighbors};
