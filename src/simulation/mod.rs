//! The training-progress simulator and everything derived from a run.

pub mod config;
pub mod curves;
mod guidance;
mod run;
mod simulator;
mod snapshot;

pub use config::RunConfig;
pub use guidance::ConvergenceProfile;
pub use run::{RunPhase, TrainingRun, FIRST_ITERATION};
pub use simulator::{TickOutcome, TrainingProgressSimulator};
pub use snapshot::Snapshot;
