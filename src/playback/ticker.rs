use std::{sync::Arc, time::Duration};

use log::{debug, trace};
use parking_lot::Mutex;
use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::simulation::{Snapshot, TrainingProgressSimulator};

pub(super) type SharedSimulator = Arc<Mutex<TrainingProgressSimulator>>;
pub(super) type SnapshotTx = Arc<watch::Sender<Option<Snapshot>>>;

/// A repeating timer driving `tick()` on one simulator.
///
/// Dropping the ticker cancels it.
pub(super) struct Ticker {
    token: CancellationToken,
    _guard: DropGuard,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns the timer task. The first firing happens one `period` from now.
    pub fn spawn(
        runtime: &Handle,
        period: Duration,
        simulator: SharedSimulator,
        updates: SnapshotTx,
    ) -> Self {
        let token = CancellationToken::new();
        let handle = runtime.spawn(run(period, simulator, updates, token.clone()));
        debug!(period_ms = period.as_millis() as u64; "ticker spawned");

        Self {
            _guard: token.clone().drop_guard(),
            token,
            handle,
        }
    }

    /// Returns true while the task is alive and not cancelled.
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled() && !self.handle.is_finished()
    }

    /// Cancels the task and waits for it to exit.
    pub async fn stop(self) {
        let Self {
            token,
            _guard,
            handle,
        } = self;
        token.cancel();
        if let Err(e) = handle.await {
            debug!("ticker task ended abnormally: {e}");
        }
    }
}

async fn run(
    period: Duration,
    simulator: SharedSimulator,
    updates: SnapshotTx,
    token: CancellationToken,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {}
        }

        let keep_ticking = {
            let mut sim = simulator.lock();
            // Cancellation happens under this lock, so a firing that raced a
            // pause or reset is dropped here.
            if token.is_cancelled() {
                false
            } else {
                let outcome = sim.tick();
                trace!("tick outcome {outcome:?}");
                updates.send_replace(sim.snapshot());
                outcome.keep_ticking()
            }
        };

        if !keep_ticking {
            break;
        }
    }

    debug!("ticker stopped");
}
