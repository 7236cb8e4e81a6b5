//! Manual line fitting over the study-hours sample.

use serde::Serialize;

use crate::catalog::{Point, TargetModel};

/// Hours studied vs exam score.
pub const STUDY_HOURS: [Point; 8] = [
    Point::new(1., 52.),
    Point::new(2., 57.),
    Point::new(3., 63.),
    Point::new(4., 70.),
    Point::new(5., 76.),
    Point::new(6., 82.),
    Point::new(7., 88.),
    Point::new(8., 93.),
];

/// Reference line shown next to the raw scores.
pub const BEST_FIT: TargetModel = TargetModel::new(45., 6.5);

const INTERCEPT_RANGE: (f64, f64) = (0., 60.);
const INTERCEPT_STEP: f64 = 1.;
const SLOPE_RANGE: (f64, f64) = (0., 12.);
const SLOPE_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitRow {
    pub x: f64,
    pub actual: f64,
    pub predicted: f64,
}

/// A hand-picked line, as set with the intercept and slope sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualFit {
    line: TargetModel,
}

impl ManualFit {
    /// Creates a fit, snapping both coefficients onto their slider grids.
    ///
    /// # Args
    /// * `intercept` - Clamped to `[0, 60]` in steps of 1.
    /// * `slope` - Clamped to `[0, 12]` in steps of 0.5.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self {
            line: TargetModel::new(
                snap(intercept, INTERCEPT_RANGE, INTERCEPT_STEP),
                snap(slope, SLOPE_RANGE, SLOPE_STEP),
            ),
        }
    }

    pub fn line(&self) -> TargetModel {
        self.line
    }

    pub fn rows(&self) -> Vec<FitRow> {
        rows_for(self.line)
    }

    /// Mean squared error of this line over the sample.
    pub fn mse(&self) -> f64 {
        mse(&self.rows())
    }
}

impl Default for ManualFit {
    fn default() -> Self {
        Self::new(20., 3.)
    }
}

/// Rows comparing the raw scores against [`BEST_FIT`].
pub fn best_fit_preview() -> Vec<FitRow> {
    rows_for(BEST_FIT)
}

fn rows_for(line: TargetModel) -> Vec<FitRow> {
    STUDY_HOURS
        .iter()
        .map(|p| FitRow {
            x: p.x,
            actual: p.y,
            predicted: line.predict(p.x),
        })
        .collect()
}

fn mse(rows: &[FitRow]) -> f64 {
    if rows.is_empty() {
        return 0.;
    }
    let total: f64 = rows.iter().map(|r| (r.actual - r.predicted).powi(2)).sum();
    total / rows.len() as f64
}

fn snap(value: f64, (low, high): (f64, f64), step: f64) -> f64 {
    if !value.is_finite() {
        return low;
    }
    ((value.clamp(low, high) - low) / step).round() * step + low
}
