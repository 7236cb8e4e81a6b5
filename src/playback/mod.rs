//! Timer-driven auto-advance for a simulator.

mod ticker;

use std::{sync::Arc, time::Duration};

use log::debug;
use parking_lot::Mutex;
use tokio::{runtime::Handle, sync::watch};

use crate::{
    catalog::DatasetId,
    error::{LabErr, Result},
    simulation::{RunConfig, RunPhase, Snapshot, TrainingProgressSimulator},
};
use ticker::{SharedSimulator, SnapshotTx, Ticker};

/// Interval between two automatic steps while playing.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(500);

/// Owns a simulator together with the repeating timer that advances it.
///
/// Every operation publishes the resulting snapshot to subscribers. The timer
/// only exists while the run is playing: pausing, resetting, starting over,
/// reaching the last iteration or dropping the `Playback` all cancel it.
pub struct Playback {
    simulator: SharedSimulator,
    updates: SnapshotTx,
    ticker: Option<Ticker>,
    runtime: Handle,
    period: Duration,
}

impl Playback {
    /// Creates a new `Playback` bound to the current tokio runtime.
    ///
    /// # Args
    /// * `simulator` - The simulator to drive. Ownership moves into the playback.
    /// * `period` - Interval between automatic steps.
    ///
    /// # Errors
    /// Returns `LabErr::NoRuntime` if called outside a tokio runtime.
    pub fn new(simulator: TrainingProgressSimulator, period: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| LabErr::NoRuntime)?;
        let (updates, _) = watch::channel(simulator.snapshot());

        Ok(Self {
            simulator: Arc::new(Mutex::new(simulator)),
            updates: Arc::new(updates),
            ticker: None,
            runtime,
            period,
        })
    }

    /// Returns a receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.simulator.lock().snapshot()
    }

    pub fn phase(&self) -> RunPhase {
        self.simulator.lock().phase()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true while a timer is armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_active)
    }

    pub fn configure(
        &mut self,
        dataset: DatasetId,
        learning_rate: f64,
        total_iterations: u32,
    ) -> RunConfig {
        self.simulator
            .lock()
            .configure(dataset, learning_rate, total_iterations)
    }

    pub fn configure_with(&mut self, config: RunConfig) {
        self.simulator.lock().configure_with(config);
    }

    pub fn start(&mut self) {
        self.update(TrainingProgressSimulator::start);
    }

    pub fn reset(&mut self) {
        self.update(TrainingProgressSimulator::reset);
    }

    /// # Returns
    /// Whether the run is playing afterwards.
    pub fn play(&mut self) -> bool {
        self.update(TrainingProgressSimulator::play)
    }

    pub fn pause(&mut self) {
        self.update(TrainingProgressSimulator::pause);
    }

    /// # Returns
    /// Whether the run is playing afterwards.
    pub fn toggle_playback(&mut self) -> bool {
        self.update(TrainingProgressSimulator::toggle_playback)
    }

    pub fn step_forward(&mut self) {
        self.update(TrainingProgressSimulator::step_forward);
    }

    pub fn step_backward(&mut self) {
        self.update(TrainingProgressSimulator::step_backward);
    }

    /// Cancels the timer and waits for its task to finish.
    pub async fn shutdown(mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop().await;
        }
        debug!("playback shut down");
    }

    /// Applies `op` under the simulator lock, then arms or cancels the timer
    /// to match the resulting playing state and publishes the new snapshot.
    fn update<T>(&mut self, op: impl FnOnce(&mut TrainingProgressSimulator) -> T) -> T {
        let mut sim = self.simulator.lock();
        let was_playing = sim.is_playing();
        let out = op(&mut *sim);

        if sim.is_playing() {
            // A ticker that saw the run stop may still be winding down, so
            // every transition into playing gets a fresh one.
            if !was_playing || self.ticker.is_none() {
                self.ticker = Some(Ticker::spawn(
                    &self.runtime,
                    self.period,
                    Arc::clone(&self.simulator),
                    Arc::clone(&self.updates),
                ));
            }
        } else if self.ticker.take().is_some() {
            debug!("ticker cancelled");
        }

        let next = sim.snapshot();
        self.updates.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        out
    }
}
