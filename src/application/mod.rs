mod config;
mod schedule;
mod simulation;

pub use config::{SimulationConfig, MIN_TICK_INTERVAL, MAX_TICK_INTERVAL};
pub use schedule::{TickSchedule, ResumeDelay, MAX_CATCH_UP};
pub use simulation::{Simulation, Snapshot, RunState};
