use serde::Serialize;

use super::DatasetId;

/// A straight line `y = intercept + slope * x`.
///
/// Used both for the per-dataset "true" fit the simulation converges toward
/// and for hand-picked lines in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetModel {
    pub intercept: f64,
    pub slope: f64,
}

impl TargetModel {
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Returns the fixed target line for a dataset.
    pub fn for_dataset(id: DatasetId) -> Self {
        match id {
            DatasetId::Sales => Self::new(75., 1.8),
            DatasetId::Housing => Self::new(-20., 0.2),
            DatasetId::Salary => Self::new(15000., 6000.),
        }
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
