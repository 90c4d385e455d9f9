//! Error taxonomy.
//!
//! Only structural and contract violations surface as errors. A poor-quality
//! solution is a valid, silent outcome of a stochastic search; degenerate
//! numeric cases (an all-zero fitness sum during selection) are handled
//! inline and never raise.

use thiserror::Error;

/// Errors reported before or at the start of a GA run.
///
/// Every variant is detectable up front; nothing here is raised mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Fewer than two individuals cannot form a parent pair.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// A rate parameter lies outside the closed interval [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Single-point crossover needs a point in `1..n_genes`, so genomes
    /// shorter than two bits are rejected before the run starts.
    #[error("genome length must be at least 2 for single-point crossover, got {0}")]
    GenomeTooShort(usize),

    /// Knapsack weights and values must describe the same item set.
    #[error("weights and values must have equal length, got {weights} and {values}")]
    ItemCountMismatch {
        /// Number of weight entries.
        weights: usize,
        /// Number of value entries.
        values: usize,
    },
}
