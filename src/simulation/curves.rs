//! Values derived from a run's progress: the interpolated regression line and
//! the synthetic cost curve. None of this is real optimisation.

use rand::Rng;
use serde::Serialize;

use super::config::ITERATION_STEP;
use crate::catalog::{Dataset, Point, TargetModel};

/// Fraction of the target slope the line starts from at zero progress.
const START_SLOPE_FRACTION: f64 = 0.4;
const COST_SCALE: f64 = 100.;
const COST_DECAY: f64 = 0.25;
const NOISE_HIGH: f64 = 3.;
const PARAMETER_STEP: f64 = 0.02;

/// One point of the synthetic cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    pub iteration: u32,
    pub cost: f64,
}

/// One point of the "parameter vs cost" chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterCost {
    pub parameter: f64,
    pub cost: f64,
}

/// Returns the line the simulation shows at `progress_ratio`.
///
/// The slope moves linearly from 40% of the target slope to the full target
/// slope, the intercept from zero to the target intercept.
pub fn interpolated_model(target: TargetModel, progress_ratio: f64) -> TargetModel {
    let start_slope = START_SLOPE_FRACTION * target.slope;
    TargetModel {
        intercept: target.intercept * progress_ratio,
        slope: start_slope + (target.slope - start_slope) * progress_ratio,
    }
}

/// Evaluates the interpolated line at every sample x of `dataset`.
pub fn regression_line(dataset: &Dataset, target: TargetModel, progress_ratio: f64) -> Vec<Point> {
    let model = interpolated_model(target, progress_ratio);
    dataset
        .xs()
        .map(|x| Point::new(x, model.predict(x)))
        .collect()
}

/// Noise-free cost at zero-based step `k`.
#[inline]
pub fn base_cost(k: u32) -> f64 {
    COST_SCALE * (-COST_DECAY * f64::from(k)).exp()
}

/// Builds the cost curve up to `current_iteration`, one entry per step of 10.
///
/// Each entry gets uniform noise in `[0, 3)` drawn from `rng`.
pub fn cost_sequence<R: Rng>(current_iteration: u32, rng: &mut R) -> Vec<CostPoint> {
    let len = current_iteration.div_ceil(ITERATION_STEP);
    (0..len)
        .map(|k| CostPoint {
            iteration: (k + 1) * ITERATION_STEP,
            cost: base_cost(k) + rng.random_range(0.0..NOISE_HIGH),
        })
        .collect()
}

/// Maps the cost curve onto the parameter axis, scaled and rounded for display.
pub fn parameter_cost(costs: &[CostPoint]) -> Vec<ParameterCost> {
    costs
        .iter()
        .enumerate()
        .map(|(idx, point)| ParameterCost {
            parameter: round_to(PARAMETER_STEP * (idx + 1) as f64, 2),
            cost: round_to(point.cost / COST_SCALE, 3),
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::catalog::DatasetId;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_progress_drops_the_intercept() {
        for id in DatasetId::ALL {
            let target = TargetModel::for_dataset(id);
            for p in regression_line(id.dataset(), target, 0.) {
                assert!((p.y - 0.4 * target.slope * p.x).abs() < EPS * p.y.abs().max(1.));
            }
        }
    }

    #[test]
    fn full_progress_matches_target() {
        for id in DatasetId::ALL {
            let target = TargetModel::for_dataset(id);
            for p in regression_line(id.dataset(), target, 1.) {
                assert!((p.y - target.predict(p.x)).abs() < EPS * p.y.abs().max(1.));
            }
        }
    }

    #[test]
    fn halfway_model_is_between() {
        let model = interpolated_model(TargetModel::new(10., 2.), 0.5);
        assert!((model.intercept - 5.).abs() < EPS);
        assert!((model.slope - 1.4).abs() < EPS);
    }

    #[test]
    fn cost_sequence_shape_and_noise_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let costs = cost_sequence(30, &mut rng);
        let iterations: Vec<_> = costs.iter().map(|c| c.iteration).collect();
        assert_eq!(iterations, vec![10, 20, 30]);

        let bases = [100., 77.88007830714049, 60.653065971263345];
        for (c, base) in costs.iter().zip(bases) {
            let noise = c.cost - base;
            assert!((0.0..3.0).contains(&noise), "noise {noise} out of range");
        }
    }

    #[test]
    fn base_cost_decays() {
        assert_eq!(base_cost(0), 100.);
        assert!((base_cost(1) - 77.88).abs() < 0.01);
        assert!((base_cost(2) - 60.65).abs() < 0.01);
        assert!(base_cost(3) < base_cost(2));
    }

    #[test]
    fn parameter_axis_is_rounded() {
        let costs = [
            CostPoint { iteration: 10, cost: 101.23456 },
            CostPoint { iteration: 20, cost: 78.0 },
            CostPoint { iteration: 30, cost: 61.2 },
        ];
        let pc = parameter_cost(&costs);
        assert_eq!(pc[0], ParameterCost { parameter: 0.02, cost: 1.012 });
        assert_eq!(pc[1], ParameterCost { parameter: 0.04, cost: 0.78 });
        assert_eq!(pc[2], ParameterCost { parameter: 0.06, cost: 0.612 });
    }
}
