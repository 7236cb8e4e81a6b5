use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use super::{
    curves::{self, CostPoint, ParameterCost},
    guidance::ConvergenceProfile,
    run::{RunPhase, TrainingRun},
};
use crate::catalog::{DatasetId, Point, TargetModel};

/// Everything the presentation layer needs to redraw after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub dataset: DatasetId,
    pub learning_rate: f64,
    pub profile: ConvergenceProfile,
    pub current_iteration: u32,
    pub total_iterations: u32,
    pub progress_ratio: f64,
    pub phase: RunPhase,
    /// Coefficients of the line drawn at this progress.
    pub model: TargetModel,
    pub regression_line: Vec<Point>,
    pub cost_sequence: Vec<CostPoint>,
    pub parameter_cost: Vec<ParameterCost>,
}

impl Snapshot {
    /// Derives a snapshot from a run. Pure: the same run state always yields
    /// the same snapshot, noise included.
    pub(crate) fn capture(run: &TrainingRun) -> Self {
        let dataset = run.dataset();
        let progress_ratio = run.progress_ratio();
        let target = TargetModel::for_dataset(dataset);

        // Noise is re-rolled whenever the iteration moves, not on every read.
        let mut noise = StdRng::seed_from_u64(
            run.noise_seed()
                .wrapping_add(u64::from(run.current_iteration())),
        );
        let cost_sequence = curves::cost_sequence(run.current_iteration(), &mut noise);
        let parameter_cost = curves::parameter_cost(&cost_sequence);

        Self {
            dataset,
            learning_rate: run.learning_rate(),
            profile: ConvergenceProfile::for_learning_rate(run.learning_rate()),
            current_iteration: run.current_iteration(),
            total_iterations: run.total_iterations(),
            progress_ratio,
            phase: run.phase(),
            model: curves::interpolated_model(target, progress_ratio),
            regression_line: curves::regression_line(dataset.dataset(), target, progress_ratio),
            cost_sequence,
            parameter_cost,
        }
    }

    /// The numeric progress readout, e.g. `"30/100"`.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.current_iteration, self.total_iterations)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RunPhase::Completed
    }
}
