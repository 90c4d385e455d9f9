//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for one GA run.
///
/// Immutable for the duration of a run. Rates are validated, not clamped:
/// a value outside [0, 1] is rejected by [`validate`](GaConfig::validate)
/// before the run starts rather than silently adjusted.
///
/// # Defaults
///
/// The defaults are the reference knapsack parameters:
///
/// ```
/// use bitstring_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder pattern
///
/// ```
/// use bitstring_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_crossover_rate(0.9)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. The loop always executes the full
    /// count; there is no early-stopping criterion.
    pub generations: usize,

    /// Probability of recombining a selected parent pair (0.0–1.0).
    ///
    /// When crossover does not fire, the offspring are the selected
    /// parents unchanged.
    pub crossover_rate: f64,

    /// Per-gene bit-flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population preserved as elites (0.0–1.0).
    ///
    /// The elite count is `ceil(elitism_rate * population_size)`.
    pub elitism_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 1000,
            crossover_rate: 0.85,
            mutation_rate: 0.03,
            elitism_rate: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`GaRunner::run`](crate::GaRunner::run) before any work
    /// begins, so an invalid configuration is never discovered mid-run.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(GaError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Elite count for this configuration: `ceil(elitism_rate * population_size)`.
    pub fn n_elites(&self) -> usize {
        (self.elitism_rate * self.population_size as f64).ceil() as usize
    }
}
