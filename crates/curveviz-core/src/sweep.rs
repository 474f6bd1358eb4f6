//! Timed progress sweep driven by an external interval timer.

/// Outcome of one sweep step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepTick {
    /// The sweep advanced and wants another tick.
    Continue(f64),
    /// The sweep reached its maximum and stopped; the timer can be dropped.
    Finished(f64),
    /// No sweep was running.
    Idle,
}

/// Animates a progress value from 0 up to `max` by `step` per tick.
///
/// The sweep does not own the progress value. Each tick advances whatever
/// the caller currently holds, so edits made between ticks carry over.
#[derive(Debug, Clone)]
pub struct ProgressSweep {
    max: f64,
    step: f64,
    active: bool,
    generation: u64,
}

impl ProgressSweep {
    pub fn new(max: f64, step: f64) -> Self {
        Self {
            max,
            step,
            active: false,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Identifies the current run. Each `start` bumps it, so a timer can tell
    /// whether it still belongs to the active sweep.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restarts from 0, superseding any running sweep. Returns the new
    /// generation and the starting progress.
    pub fn start(&mut self) -> (u64, f64) {
        if self.active {
            tracing::debug!(generation = self.generation, "sweep superseded");
        }
        self.generation += 1;
        self.active = true;
        (self.generation, 0.0)
    }

    /// Advances `current` by one step, capped at the maximum.
    pub fn tick(&mut self, current: f64) -> SweepTick {
        if !self.active {
            return SweepTick::Idle;
        }
        let next = (current + self.step).min(self.max);
        if next >= self.max {
            self.active = false;
            tracing::debug!(generation = self.generation, "sweep finished");
            SweepTick::Finished(self.max)
        } else {
            SweepTick::Continue(next)
        }
    }

    /// Stops the sweep, leaving the last reported progress in place.
    pub fn cancel(&mut self) {
        if std::mem::take(&mut self.active) {
            tracing::debug!(generation = self.generation, "sweep cancelled");
        }
    }
}
