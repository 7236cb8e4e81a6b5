use serde::Serialize;

use super::config::{RunConfig, ITERATION_STEP};
use crate::catalog::DatasetId;

/// Iteration every run starts from. Also the lowest one it can be scrubbed back to.
pub const FIRST_ITERATION: u32 = ITERATION_STEP;

/// High-level lifecycle states of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    NotStarted,
    Paused,
    Playing,
    Completed,
}

/// The mutable state of one simulated training run.
///
/// Invariants: `current_iteration` is a multiple of 10 within
/// `[10, total_iterations]`, and `is_playing` is false once the run is complete.
#[derive(Debug, Clone)]
pub struct TrainingRun {
    config: RunConfig,
    current_iteration: u32,
    is_playing: bool,
    noise_seed: u64,
}

impl TrainingRun {
    pub(crate) fn new(config: RunConfig, noise_seed: u64) -> Self {
        Self {
            config,
            current_iteration: FIRST_ITERATION,
            is_playing: false,
            noise_seed,
        }
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    pub fn dataset(&self) -> DatasetId {
        self.config.dataset()
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate()
    }

    pub fn total_iterations(&self) -> u32 {
        self.config.total_iterations()
    }

    pub fn current_iteration(&self) -> u32 {
        self.current_iteration
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn noise_seed(&self) -> u64 {
        self.noise_seed
    }

    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.current_iteration) / f64::from(self.total_iterations())
    }

    pub fn is_complete(&self) -> bool {
        self.current_iteration >= self.total_iterations()
    }

    pub fn phase(&self) -> RunPhase {
        if self.is_complete() {
            RunPhase::Completed
        } else if self.is_playing {
            RunPhase::Playing
        } else {
            RunPhase::Paused
        }
    }

    /// Starts auto-advance unless the run is already complete.
    ///
    /// # Returns
    /// Whether the run is playing afterwards.
    pub(crate) fn play(&mut self) -> bool {
        if !self.is_complete() {
            self.is_playing = true;
        }
        self.is_playing
    }

    pub(crate) fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Moves one step forward, stopping playback when the last iteration is reached.
    ///
    /// # Returns
    /// Whether the iteration changed.
    pub(crate) fn step_forward(&mut self) -> bool {
        let before = self.current_iteration;
        self.current_iteration = (before + ITERATION_STEP).min(self.total_iterations());
        if self.is_complete() {
            self.is_playing = false;
        }
        self.current_iteration != before
    }

    /// Moves one step back, never below the first iteration.
    ///
    /// # Returns
    /// Whether the iteration changed.
    pub(crate) fn step_backward(&mut self) -> bool {
        let before = self.current_iteration;
        self.current_iteration = before
            .saturating_sub(ITERATION_STEP)
            .max(FIRST_ITERATION);
        self.current_iteration != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(total: u32) -> TrainingRun {
        TrainingRun::new(RunConfig::new(DatasetId::Sales, 0.05, total), 0)
    }

    #[test]
    fn starts_paused_at_first_iteration() {
        let r = run(100);
        assert_eq!(r.current_iteration(), 10);
        assert_eq!(r.phase(), RunPhase::Paused);
        assert_eq!(r.progress_ratio(), 0.1);
    }

    #[test]
    fn step_forward_reaches_total_exactly_for_every_budget() {
        for total in (50..=500).step_by(10) {
            let mut r = run(total);
            let steps = (total - 10) / 10;
            for _ in 0..steps {
                assert!(r.step_forward());
                assert!(r.current_iteration() <= total);
            }
            assert_eq!(r.current_iteration(), total);
            assert!(!r.step_forward());
            assert_eq!(r.current_iteration(), total);
        }
    }

    #[test]
    fn step_backward_never_goes_below_first_iteration() {
        let mut r = run(50);
        assert!(!r.step_backward());
        r.step_forward();
        r.step_forward();
        assert!(r.step_backward());
        assert!(r.step_backward());
        assert!(!r.step_backward());
        assert_eq!(r.current_iteration(), FIRST_ITERATION);
    }

    #[test]
    fn completing_forces_pause() {
        let mut r = run(50);
        assert!(r.play());
        for _ in 0..4 {
            r.step_forward();
        }
        assert!(!r.is_playing());
        assert_eq!(r.phase(), RunPhase::Completed);
        assert!(!r.play());
    }

    #[test]
    fn completed_is_not_a_dead_end() {
        let mut r = run(50);
        for _ in 0..4 {
            r.step_forward();
        }
        r.step_backward();
        assert_eq!(r.phase(), RunPhase::Paused);
        assert!(r.play());
        assert_eq!(r.phase(), RunPhase::Playing);
    }
}
