use crate::catalog::DatasetId;

pub const MIN_LEARNING_RATE: f64 = 0.001;
pub const MAX_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

pub const MIN_ITERATIONS: u32 = 50;
pub const MAX_ITERATIONS: u32 = 500;
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Distance between two consecutive iterations a run can sit on.
pub const ITERATION_STEP: u32 = 10;

/// Immutable settings for the next training run.
///
/// Every field is clamped on construction, so a `RunConfig` is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    dataset: DatasetId,
    learning_rate: f64,
    total_iterations: u32,
}

impl RunConfig {
    /// Creates a new run configuration.
    ///
    /// # Args
    /// * `dataset` - The dataset the run will be bound to.
    /// * `learning_rate` - Clamped to `[0.001, 0.1]`; non-finite values fall back to the default.
    /// * `total_iterations` - Clamped to `[50, 500]` and snapped to the nearest multiple of 10.
    ///
    /// # Returns
    /// A `RunConfig` instance.
    pub fn new(dataset: DatasetId, learning_rate: f64, total_iterations: u32) -> Self {
        Self {
            dataset,
            learning_rate: clamp_learning_rate(learning_rate),
            total_iterations: snap_iterations(total_iterations),
        }
    }

    pub fn dataset(&self) -> DatasetId {
        self.dataset
    }

    /// Display-only: nothing derived from a run depends on it.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn total_iterations(&self) -> u32 {
        self.total_iterations
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DatasetId::Sales, DEFAULT_LEARNING_RATE, DEFAULT_ITERATIONS)
    }
}

fn clamp_learning_rate(lr: f64) -> f64 {
    if lr.is_finite() {
        lr.clamp(MIN_LEARNING_RATE, MAX_LEARNING_RATE)
    } else {
        DEFAULT_LEARNING_RATE
    }
}

fn snap_iterations(n: u32) -> u32 {
    let clamped = n.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    (clamped + ITERATION_STEP / 2) / ITERATION_STEP * ITERATION_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterations_are_clamped_and_snapped() {
        let it = |n| RunConfig::new(DatasetId::Sales, 0.05, n).total_iterations();
        assert_eq!(it(5), 50);
        assert_eq!(it(999), 500);
        assert_eq!(it(123), 120);
        assert_eq!(it(125), 130);
        assert_eq!(it(500), 500);
    }

    #[test]
    fn learning_rate_is_clamped() {
        let lr = |v| RunConfig::new(DatasetId::Sales, v, 100).learning_rate();
        assert_eq!(lr(1.0), MAX_LEARNING_RATE);
        assert_eq!(lr(0.0), MIN_LEARNING_RATE);
        assert_eq!(lr(0.02), 0.02);
        assert_eq!(lr(f64::NAN), DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn default_matches_initial_form_state() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.dataset(), DatasetId::Sales);
        assert_eq!(cfg.learning_rate(), 0.05);
        assert_eq!(cfg.total_iterations(), 100);
    }
}
