use std::ops::RangeInclusive;

use serde::Serialize;

/// Rough convergence behaviour associated with a learning rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvergenceProfile {
    Slow,
    Balanced,
    Fast,
}

impl ConvergenceProfile {
    /// Classifies a learning rate.
    ///
    /// Rates below `0.01` are slow, rates up to and including `0.05` are
    /// balanced, anything above is fast.
    pub fn for_learning_rate(lr: f64) -> Self {
        if lr < 0.01 {
            ConvergenceProfile::Slow
        } else if lr <= 0.05 {
            ConvergenceProfile::Balanced
        } else {
            ConvergenceProfile::Fast
        }
    }

    /// Iteration budget that pairs well with this profile.
    pub fn recommended_iterations(self) -> RangeInclusive<u32> {
        match self {
            ConvergenceProfile::Slow => 300..=500,
            ConvergenceProfile::Balanced => 100..=300,
            ConvergenceProfile::Fast => 50..=100,
        }
    }

    pub fn effect(self) -> &'static str {
        match self {
            ConvergenceProfile::Slow => "Slow, stable convergence (complex data)",
            ConvergenceProfile::Balanced => "Balanced convergence (start here)",
            ConvergenceProfile::Fast => "Fast convergence, potential instability",
        }
    }

    /// Returns true if `iterations` lies in the recommended budget.
    pub fn suits(self, iterations: u32) -> bool {
        self.recommended_iterations().contains(&iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_boundaries() {
        use ConvergenceProfile::*;
        assert_eq!(ConvergenceProfile::for_learning_rate(0.001), Slow);
        assert_eq!(ConvergenceProfile::for_learning_rate(0.005), Slow);
        assert_eq!(ConvergenceProfile::for_learning_rate(0.01), Balanced);
        assert_eq!(ConvergenceProfile::for_learning_rate(0.05), Balanced);
        assert_eq!(ConvergenceProfile::for_learning_rate(0.051), Fast);
        assert_eq!(ConvergenceProfile::for_learning_rate(0.1), Fast);
    }

    #[test]
    fn default_config_is_a_suitable_pairing() {
        let profile = ConvergenceProfile::for_learning_rate(0.05);
        assert!(profile.suits(100));
        assert!(!profile.suits(500));
    }
}
