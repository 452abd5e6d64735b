use std::time::Duration;
use log::{debug, info};

use crate::domain::{Algorithm, Cell, Grid, Result, patterns, LOAD_DEFAULT};
use super::config::{SimulationConfig, clamp_interval};
use super::schedule::{ResumeDelay, TickSchedule};

/// Externally visible run state of the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Constructed, never started
    Idle,
    /// Tick schedule active
    Running,
    /// Tick schedule cancelled; grid and generation retained
    Paused,
}

/// Internal phase. Holding the schedule inside `Running` means the
/// simulation is running exactly when a schedule exists, and never
/// holds more than one.
#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Running(TickSchedule),
    Paused { pending_resume: Option<ResumeDelay> },
}

/// Read-only view of the simulation handed to renderers
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells, `rows * cols` long
    pub cells: Vec<Cell>,
    pub generation: u64,
    pub running: bool,
    pub state: RunState,
}

impl Snapshot {
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

/// Simulation owns the authoritative grid, the generation counter and the
/// run state, and advances generations on a cooperative tick schedule.
pub struct Simulation {
    config: SimulationConfig,
    initial: Grid,
    grid: Grid,
    generation: u64,
    phase: Phase,
}

impl Simulation {
    /// Build a simulation seeded with the configured initial pattern.
    /// Fails if the pattern is unknown or does not fit the grid.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut config = config;
        config.tick_interval = clamp_interval(config.tick_interval);
        let initial = patterns::find(&config.initial_pattern)?.stamp(config.rows, config.cols)?;
        info!(
            "simulation ready: {}x{} grid seeded with '{}'",
            config.rows, config.cols, config.initial_pattern
        );
        Ok(Self {
            grid: initial.clone(),
            initial,
            generation: 0,
            phase: Phase::Idle,
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        match self.phase {
            Phase::Idle => RunState::Idle,
            Phase::Running(_) => RunState::Running,
            Phase::Paused { .. } => RunState::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// True while paused with an automatic resume still pending
    pub fn resume_pending(&self) -> bool {
        matches!(self.phase, Phase::Paused { pending_resume: Some(_) })
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Pattern names a user may pick, ending with the reload entry
    pub fn pattern_names(&self) -> Vec<&'static str> {
        patterns::names()
    }

    pub fn snapshot(&self) -> Snapshot {
        let (rows, cols) = self.grid.dimensions();
        Snapshot {
            rows,
            cols,
            cells: self.grid.flatten(),
            generation: self.generation,
            running: self.is_running(),
            state: self.run_state(),
        }
    }

    /// Begin ticking. No-op while already running.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("start ignored: already running");
            return;
        }
        self.phase = Phase::Running(TickSchedule::every(self.config.tick_interval));
        info!("simulation started at generation {}", self.generation);
    }

    /// Replace the grid with its successor and count the generation.
    /// Used by the schedule and for single-stepping; run state is untouched.
    pub fn advance(&mut self) {
        self.grid = self.config.algorithm.next_grid(&self.grid);
        self.generation += 1;
        debug!("generation {}: {} alive", self.generation, self.grid.population());
    }

    /// Single-step one generation
    pub fn step(&mut self) {
        self.advance();
    }

    /// One control for both pause and resume
    pub fn pause_or_resume(&mut self) {
        if self.is_running() {
            self.cancel(false);
            info!("simulation paused at generation {}", self.generation);
        } else {
            self.start();
        }
    }

    /// Fresh random board, then resume once the resume delay has passed
    pub fn randomize(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.replace_grid(Grid::random(rows, cols, self.config.random_density), true);
        info!("board randomized");
    }

    /// Back to the initial board, then resume once the resume delay has passed
    pub fn reset(&mut self) {
        self.replace_grid(self.initial.clone(), true);
        info!("board reset to '{}'", self.config.initial_pattern);
    }

    /// Empty board; stays paused
    pub fn clear_board(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.replace_grid(Grid::blank(rows, cols), false);
        info!("board cleared");
    }

    /// Flip one cell in any run state without advancing the generation
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell> {
        let cell = self.grid.toggle(row, col)?;
        debug!("cell ({}, {}) toggled to {:?}", row, col, cell);
        Ok(cell)
    }

    /// Load a named pattern, or the initial board for [`LOAD_DEFAULT`].
    /// Stays paused. Nothing changes if the name or stamp is rejected.
    pub fn load_pattern(&mut self, name: &str) -> Result<()> {
        let grid = if name == LOAD_DEFAULT {
            self.initial.clone()
        } else {
            let (rows, cols) = self.grid.dimensions();
            patterns::find(name)?.stamp(rows, cols)?
        };
        self.replace_grid(grid, false);
        info!("pattern '{}' loaded", name);
        Ok(())
    }

    /// Change the tick interval; applies to a running schedule immediately
    pub fn set_tick_interval(&mut self, interval: Duration) {
        let interval = clamp_interval(interval);
        self.config.tick_interval = interval;
        if let Phase::Running(schedule) = &mut self.phase {
            schedule.set_interval(interval);
        }
    }

    /// Speed up or slow down by `delta` generations per second
    pub fn adjust_speed(&mut self, delta: f64) {
        let current = 1.0 / self.config.tick_interval.as_secs_f64();
        let target = (current + delta).max(1.0);
        self.set_tick_interval(Duration::from_secs_f64(1.0 / target));
    }

    /// Generations per second at the current tick interval
    pub fn generations_per_second(&self) -> f64 {
        1.0 / self.config.tick_interval.as_secs_f64()
    }

    /// Drive the schedule with elapsed time. Returns the number of
    /// generations advanced.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        match &mut self.phase {
            Phase::Running(schedule) => {
                let due = schedule.poll(delta);
                for _ in 0..due {
                    self.advance();
                }
                due
            }
            Phase::Paused { pending_resume: Some(delay) } => {
                if delay.poll(delta) {
                    self.start();
                }
                0
            }
            Phase::Idle | Phase::Paused { pending_resume: None } => 0,
        }
    }

    fn cancel(&mut self, resume: bool) {
        let pending_resume = resume.then(|| ResumeDelay::new(self.config.resume_delay));
        self.phase = Phase::Paused { pending_resume };
    }

    /// Cancel first so no stale tick can advance the replacement board
    fn replace_grid(&mut self, grid: Grid, resume: bool) {
        self.cancel(resume);
        self.grid = grid;
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeError, DEFAULT_PATTERN};

    const TICK: Duration = Duration::from_millis(100);

    fn simulation() -> Simulation {
        Simulation::new(SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_new_is_idle_with_default_board() {
        let sim = simulation();
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.generation(), 0);
        let expected = patterns::find(DEFAULT_PATTERN).unwrap().stamp(30, 50).unwrap();
        assert_eq!(sim.grid(), &expected);
    }

    #[test]
    fn test_new_rejects_bad_initial_pattern() {
        let unknown = SimulationConfig::default().with_initial_pattern("Nope");
        assert!(matches!(Simulation::new(unknown), Err(LifeError::UnknownPattern(_))));

        let small = SimulationConfig::default().with_dimensions(10, 10);
        assert!(matches!(
            Simulation::new(small),
            Err(LifeError::PatternOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut sim = simulation();
        sim.start();
        sim.tick(Duration::from_millis(60));
        sim.start();
        assert!(sim.is_running());

        // The second start must not restart the schedule's progress
        assert_eq!(sim.tick(Duration::from_millis(40)), 1);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.tick(TICK), 1);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_ticks_only_advance_while_running() {
        let mut sim = simulation();
        assert_eq!(sim.tick(TICK * 3), 0);
        assert_eq!(sim.generation(), 0);

        sim.start();
        assert_eq!(sim.tick(TICK * 3), 3);
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_advance_matches_transition() {
        let mut sim = simulation();
        let expected = crate::domain::next_grid(sim.grid());
        sim.step();
        assert_eq!(sim.grid(), &expected);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.run_state(), RunState::Idle);
    }

    #[test]
    fn test_pause_or_resume_toggles() {
        let mut sim = simulation();
        sim.pause_or_resume();
        assert_eq!(sim.run_state(), RunState::Running);
        sim.tick(TICK);
        sim.pause_or_resume();
        assert_eq!(sim.run_state(), RunState::Paused);

        let before = sim.snapshot();
        assert_eq!(sim.tick(TICK * 10), 0);
        assert_eq!(sim.snapshot(), before);

        sim.pause_or_resume();
        assert_eq!(sim.run_state(), RunState::Running);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_clear_board_stays_paused() {
        let mut sim = simulation();
        sim.start();
        sim.tick(TICK * 2);
        sim.clear_board();

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.grid().population(), 0);
        assert!(!sim.resume_pending());

        sim.tick(Duration::from_secs(1));
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_randomize_resets_then_resumes() {
        let config = SimulationConfig::default().with_random_density(1.0);
        let mut sim = Simulation::new(config).unwrap();
        sim.start();
        sim.tick(TICK * 2);
        sim.randomize();

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert!(sim.resume_pending());
        assert_eq!(sim.grid().population(), 30 * 50);

        // The resume fires first; generations follow on later ticks
        assert_eq!(sim.tick(TICK), 0);
        assert_eq!(sim.run_state(), RunState::Running);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.tick(TICK), 1);
    }

    #[test]
    fn test_reset_restores_initial_board_and_resumes() {
        let mut sim = simulation();
        let initial = sim.grid().clone();
        sim.start();
        sim.tick(TICK * 4);
        assert_ne!(sim.grid(), &initial);

        sim.reset();
        assert_eq!(sim.grid(), &initial);
        assert_eq!(sim.generation(), 0);
        assert!(sim.resume_pending());

        sim.tick(TICK);
        assert!(sim.is_running());
    }

    #[test]
    fn test_pause_cancels_pending_resume() {
        let mut sim = simulation();
        sim.reset();
        sim.pause_or_resume();
        assert!(sim.is_running());
        sim.pause_or_resume();
        assert!(!sim.resume_pending());
        sim.tick(Duration::from_secs(1));
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn test_toggle_cell_flips_exactly_one_cell() {
        let mut sim = simulation();
        sim.start();
        sim.tick(TICK * 3);
        let before = sim.grid().clone();
        let generation = sim.generation();

        let cell = sim.toggle_cell(15, 0).unwrap();
        assert_eq!(cell, before.get(15, 0).toggle());
        assert_eq!(sim.generation(), generation);
        assert!(sim.is_running());

        let differing: Vec<_> = before
            .cells()
            .iter()
            .zip(sim.grid().cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(differing, vec![15 * 50]);
    }

    #[test]
    fn test_toggle_cell_rejects_invalid_coordinate() {
        let mut sim = simulation();
        let before = sim.snapshot();
        assert!(matches!(
            sim.toggle_cell(30, 0),
            Err(LifeError::InvalidCoordinate { row: 30, col: 0, .. })
        ));
        assert!(sim.toggle_cell(0, 50).is_err());
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_load_pattern_pauses_without_resume() {
        let mut sim = simulation();
        sim.start();
        sim.tick(TICK * 2);
        sim.load_pattern("Pulsar").unwrap();

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert!(!sim.resume_pending());
        assert_eq!(sim.grid(), &patterns::find("Pulsar").unwrap().stamp(30, 50).unwrap());
    }

    #[test]
    fn test_load_default_restores_initial_board() {
        let mut sim = simulation();
        let initial = sim.grid().clone();
        sim.clear_board();
        sim.load_pattern(LOAD_DEFAULT).unwrap();
        assert_eq!(sim.grid(), &initial);
    }

    #[test]
    fn test_unknown_pattern_leaves_state_unchanged() {
        let mut sim = simulation();
        sim.start();
        sim.tick(TICK * 2);
        let before = sim.snapshot();

        assert_eq!(
            sim.load_pattern("Spaceship"),
            Err(LifeError::UnknownPattern("Spaceship".to_string()))
        );
        assert_eq!(sim.snapshot(), before);
        assert!(sim.is_running());
    }

    #[test]
    fn test_snapshot_reports_state() {
        let mut sim = simulation();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.cells.len(), 30 * 50);
        assert_eq!(snapshot.population(), sim.grid().population());
        assert!(!snapshot.running);
        assert_eq!(snapshot.state, RunState::Idle);

        sim.start();
        let snapshot = sim.snapshot();
        assert!(snapshot.running);
        assert_eq!(snapshot.state, RunState::Running);
    }

    #[test]
    fn test_adjust_speed_updates_running_schedule() {
        let mut sim = simulation();
        sim.start();
        sim.adjust_speed(10.0);
        assert_eq!(sim.tick_interval(), Duration::from_millis(50));
        assert_eq!(sim.tick(Duration::from_millis(50)), 1);

        sim.adjust_speed(-100.0);
        assert_eq!(sim.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_parallel_algorithm_advances_identically() {
        let mut serial = simulation();
        let mut parallel = Simulation::new(
            SimulationConfig::default().with_algorithm(Algorithm::Parallel),
        )
        .unwrap();
        for _ in 0..20 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }
}
