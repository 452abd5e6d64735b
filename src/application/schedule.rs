use std::time::Duration;

/// Most generations a single `poll` will report, so a long frame stall
/// does not turn into a burst of catch-up generations.
pub const MAX_CATCH_UP: u32 = 4;

/// Handle for the periodic tick that drives generations while running.
/// Dropping the handle cancels the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    elapsed: Duration,
}

impl TickSchedule {
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the period without losing progress toward the next tick
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Feed elapsed time and return how many ticks fell due
    pub fn poll(&mut self, delta: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += delta;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        if due > MAX_CATCH_UP {
            self.elapsed = Duration::ZERO;
            due = MAX_CATCH_UP;
        }
        due
    }
}

/// One-shot delay before an automatic resume
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeDelay {
    remaining: Duration,
}

impl ResumeDelay {
    pub fn new(delay: Duration) -> Self {
        Self { remaining: delay }
    }

    /// Returns true once the whole delay has elapsed
    pub fn poll(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.remaining.is_zero()
    }
}
