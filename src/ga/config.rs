//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that stay fixed for the lifetime of a
//! [`GaSolver`](super::GaSolver).

use super::error::{GaError, Result};

/// Configuration for the genetic algorithm.
///
/// Controls how many individuals survive each generation, how often
/// offspring are mutated, and how the random generator is seeded.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.selection_rate, 0.5);
/// assert_eq!(config.mutation_rate, 0.1);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_selection_rate(0.3)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Fraction of the population retained as parents each generation, in (0, 1].
    ///
    /// The top `floor(selection_rate × N)` individuals are carried over
    /// unchanged (elitism) and are the only candidates for reproduction.
    pub selection_rate: f64,

    /// Probability that a newly reproduced child is mutated, in [0, 1].
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds the generator from a fresh random value.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            selection_rate: 0.5,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the selection rate.
    ///
    /// Not clamped: out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_selection_rate(mut self, rate: f64) -> Self {
        self.selection_rate = rate;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Not clamped: out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents kept from a population of `population_size`.
    pub fn survivors(&self, population_size: usize) -> usize {
        (self.selection_rate * population_size as f64) as usize
    }

    /// Validates the rates.
    ///
    /// Returns [`GaError::InvalidConfiguration`] if `selection_rate` is not in
    /// (0, 1] or `mutation_rate` is not in [0, 1]. NaN fails both checks.
    pub fn validate(&self) -> Result<()> {
        if !(self.selection_rate > 0.0 && self.selection_rate <= 1.0) {
            return Err(GaError::InvalidConfiguration(format!(
                "selection_rate must be in (0, 1], got {}",
                self.selection_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Validates a population size against this configuration.
    ///
    /// Reproduction samples two distinct parents, so both the population and
    /// the survivor set must hold at least two individuals.
    pub fn validate_population(&self, population_size: usize) -> Result<()> {
        self.validate()?;
        if population_size < 2 {
            return Err(GaError::InvalidConfiguration(format!(
                "population_size must be at least 2, got {population_size}"
            )));
        }
        let survivors = self.survivors(population_size);
        if survivors < 2 {
            return Err(GaError::InvalidConfiguration(format!(
                "selection_rate {} keeps {survivors} of {population_size} individuals; at least 2 parents are required",
                self.selection_rate
            )));
        }
        Ok(())
    }
}
