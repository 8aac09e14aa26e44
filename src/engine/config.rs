//! Engine configuration.
//!
//! [`EngineConfig`] holds the parameters that control the evolutionary
//! loop. Everything else — initializer, selection strategy, stop predicate
//! — is injected as a behavior, not configured here.

use crate::error::{EvolveError, Result};

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use evoloop::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.mutation_probability, 0.1);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoloop::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_mutation_probability(0.3)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Per-offspring probability that a freshly produced crossover child
    /// is additionally mutated before joining the new population.
    ///
    /// Must lie in `[0, 1]`; values outside that range are rejected by
    /// [`validate`](EngineConfig::validate), not clamped.
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Two runs with identical seeds and
    /// identical injected behaviors produce identical results.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 0.1,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the engine before the first generation; also usable
    /// directly to get the error ahead of a run.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvolveError::InvalidConfiguration(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!((config.mutation_probability - 0.1).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_mutation_probability(0.25)
            .with_seed(42);
        assert!((config.mutation_probability - 0.25).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_probability_bounds() {
        assert!(EngineConfig::default()
            .with_mutation_probability(0.0)
            .validate()
            .is_ok());
        assert!(EngineConfig::default()
            .with_mutation_probability(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_probability_out_of_range() {
        let err = EngineConfig::default()
            .with_mutation_probability(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EvolveError::InvalidConfiguration(_)));

        let err = EngineConfig::default()
            .with_mutation_probability(-0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EvolveError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_probability_nan() {
        let err = EngineConfig::default()
            .with_mutation_probability(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EvolveError::InvalidConfiguration(_)));
    }
}
