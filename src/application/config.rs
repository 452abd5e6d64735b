use std::time::Duration;
use crate::domain::{Algorithm, DEFAULT_PATTERN};

/// Fastest tick the scheduler accepts
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Slowest tick the scheduler accepts
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Settings for a [`Simulation`](super::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Time between generations while running
    pub tick_interval: Duration,
    /// Delay before auto-resuming after randomize or reset
    pub resume_delay: Duration,
    /// Chance that a cell starts alive on randomize
    pub random_density: f64,
    /// Pattern the board starts from and returns to on reset
    pub initial_pattern: String,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 50,
            tick_interval: Duration::from_millis(100),
            resume_delay: Duration::from_millis(100),
            random_density: 0.5,
            initial_pattern: DEFAULT_PATTERN.to_string(),
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = clamp_interval(interval);
        self
    }

    pub fn with_resume_delay(mut self, delay: Duration) -> Self {
        self.resume_delay = delay;
        self
    }

    pub fn with_random_density(mut self, density: f64) -> Self {
        self.random_density = density;
        self
    }

    pub fn with_initial_pattern(mut self, name: impl Into<String>) -> Self {
        self.initial_pattern = name.into();
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Keep tick intervals inside the range the scheduler supports
pub fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL)
}
