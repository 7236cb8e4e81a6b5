use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::{
    catalog::DatasetId,
    error::Result,
    playback::DEFAULT_TICK_PERIOD,
    simulation::{
        config::{DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE},
        RunConfig,
    },
};

/// Settings for the driver binary, loadable from JSON.
///
/// Every field is optional; missing ones take the defaults of the initial
/// form state (sales, 0.05, 100 iterations, 500 ms per step).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub dataset: DatasetId,
    pub learning_rate: f64,
    pub iterations: u32,
    pub tick_ms: u64,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetId::default(),
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            tick_ms: DEFAULT_TICK_PERIOD.as_millis() as u64,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads a config from a JSON file.
    ///
    /// # Errors
    /// Returns `LabErr::Io` if the file cannot be read and `LabErr::Json` if
    /// it is not a valid config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The clamped run configuration described by this file.
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.dataset, self.learning_rate, self.iterations)
    }

    /// Step period, never shorter than one millisecond.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabErr;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = AppConfig::from_json("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.run_config(), RunConfig::default());
        assert_eq!(cfg.tick_period(), Duration::from_millis(500));
    }

    #[test]
    fn fields_are_read_and_clamped() {
        let cfg = AppConfig::from_json(
            r#"{"dataset": "housing", "learning_rate": 0.5, "iterations": 1000, "tick_ms": 0, "seed": 7}"#,
        )
        .unwrap();
        let run = cfg.run_config();
        assert_eq!(run.dataset(), DatasetId::Housing);
        assert_eq!(run.learning_rate(), 0.1);
        assert_eq!(run.total_iterations(), 500);
        assert_eq!(cfg.tick_period(), Duration::from_millis(1));
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn unknown_dataset_is_rejected() {
        let err = AppConfig::from_json(r#"{"dataset": "weather"}"#).unwrap_err();
        assert!(matches!(err, LabErr::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LabErr::Io(_)));
    }
}
