// Domain layer - grid, rule, patterns, transition
pub mod domain;

// Application layer - simulation lifecycle and scheduling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Algorithm, LifeError, Result, patterns};
pub use application::{Simulation, SimulationConfig, Snapshot, RunState};
