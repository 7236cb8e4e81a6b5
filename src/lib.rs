//! # regression_lab
//!
//! A simulated "build a linear regression model" walkthrough: a fixed catalog
//! of datasets with known target lines, a training-progress simulator that
//! interpolates toward the target as iterations pass, and the timer that
//! plays it back.
//!
//! - [`catalog`] - the three datasets and their target lines
//! - [`simulation`] - run configuration, the simulator state machine, derived curves
//! - [`playback`] - cancellable auto-advance on a tokio timer
//! - [`explorer`] - manual intercept/slope fitting with an MSE readout
//! - [`config`] - JSON settings for the driver binary
//! - [`error`] - the crate error type

pub mod catalog;
pub mod config;
pub mod error;
pub mod explorer;
pub mod playback;
pub mod simulation;

pub use catalog::{Dataset, DatasetId, Point, TargetModel};
pub use config::AppConfig;
pub use error::{LabErr, Result};
pub use playback::Playback;
pub use simulation::{RunConfig, RunPhase, Snapshot, TickOutcome, TrainingProgressSimulator};
