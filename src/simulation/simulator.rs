use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    config::RunConfig,
    run::{RunPhase, TrainingRun},
    snapshot::Snapshot,
};
use crate::catalog::DatasetId;

/// What a timer firing did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run, or the run is paused. Nothing changed.
    Idle,
    /// Advanced one step and keeps playing.
    Advanced,
    /// Reached the last iteration; playback stopped.
    Completed,
}

impl TickOutcome {
    /// Returns true if the timer should keep firing.
    pub fn keep_ticking(self) -> bool {
        matches!(self, TickOutcome::Advanced)
    }
}

/// Simulates the passage of training iterations over a fixed budget.
///
/// Every operation is total: calls that make no sense in the current state
/// (stepping with no run, playing a finished run, ...) are no-ops.
#[derive(Debug)]
pub struct TrainingProgressSimulator {
    config: RunConfig,
    run: Option<TrainingRun>,
    rng: StdRng,
}

impl TrainingProgressSimulator {
    /// Creates a new simulator with the default configuration and no run.
    ///
    /// # Args
    /// * `seed` - Seed for the cost-curve noise. `None` draws from OS entropy.
    ///
    /// # Returns
    /// A simulator in the `NotStarted` phase.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            config: RunConfig::default(),
            run: None,
            rng: Self::generate_rng(seed),
        }
    }

    fn generate_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Stores the configuration used by the next `start()`.
    ///
    /// Values are clamped; an active run keeps the configuration it started with.
    ///
    /// # Returns
    /// The clamped configuration.
    pub fn configure(
        &mut self,
        dataset: DatasetId,
        learning_rate: f64,
        total_iterations: u32,
    ) -> RunConfig {
        self.configure_with(RunConfig::new(dataset, learning_rate, total_iterations));
        self.config
    }

    pub fn configure_with(&mut self, config: RunConfig) {
        debug!(
            dataset = config.dataset().key(),
            learning_rate = config.learning_rate(),
            iterations = config.total_iterations();
            "configured"
        );
        self.config = config;
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    pub fn run(&self) -> Option<&TrainingRun> {
        self.run.as_ref()
    }

    pub fn phase(&self) -> RunPhase {
        self.run
            .as_ref()
            .map_or(RunPhase::NotStarted, TrainingRun::phase)
    }

    pub fn is_playing(&self) -> bool {
        self.run.as_ref().is_some_and(TrainingRun::is_playing)
    }

    /// Starts a new run from the stored configuration, replacing any prior one.
    pub fn start(&mut self) {
        let noise_seed = self.rng.random();
        let run = TrainingRun::new(self.config, noise_seed);
        info!(
            dataset = run.dataset().key(),
            iterations = run.total_iterations();
            "run started"
        );
        self.run = Some(run);
    }

    /// Discards the current run.
    pub fn reset(&mut self) {
        if self.run.take().is_some() {
            info!("run reset");
        }
    }

    /// Starts auto-advance if there is an unfinished run.
    ///
    /// # Returns
    /// Whether the run is playing afterwards.
    pub fn play(&mut self) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let playing = run.play();
        if playing {
            debug!(iteration = run.current_iteration(); "playing");
        }
        playing
    }

    pub fn pause(&mut self) {
        if let Some(run) = self.run.as_mut() {
            if run.is_playing() {
                debug!(iteration = run.current_iteration(); "paused");
            }
            run.pause();
        }
    }

    /// Flips between playing and paused, like a single play/pause button.
    ///
    /// # Returns
    /// Whether the run is playing afterwards.
    pub fn toggle_playback(&mut self) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    pub fn step_forward(&mut self) {
        if let Some(run) = self.run.as_mut() {
            run.step_forward();
        }
    }

    pub fn step_backward(&mut self) {
        if let Some(run) = self.run.as_mut() {
            run.step_backward();
        }
    }

    /// Timer-driven advance: one step forward while playing.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };
        if !run.is_playing() {
            return TickOutcome::Idle;
        }

        run.step_forward();
        trace!(
            iteration = run.current_iteration(),
            total = run.total_iterations();
            "tick"
        );

        if run.is_complete() {
            info!(iterations = run.total_iterations(); "run completed");
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// Returns the derived view of the current run, or `None` without one.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.run.as_ref().map(Snapshot::capture)
    }
}

impl Default for TrainingProgressSimulator {
    fn default() -> Self {
        Self::new(None)
    }
}
