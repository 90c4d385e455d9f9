//! 0/1 knapsack objective.
//!
//! The reference [`FitnessFunction`] implementation: each gene includes (1)
//! or excludes (0) an item. Feasible genomes score their total value;
//! overweight genomes score the *negated* total value, which ranks every
//! infeasible genome below every feasible one with non-negative value.

use crate::error::GaError;
use crate::types::FitnessFunction;

/// A 0/1 knapsack instance: item weights, item values, capacity bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    weights: Vec<f64>,
    values: Vec<f64>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Creates an instance.
    ///
    /// # Errors
    /// Returns [`GaError::ItemCountMismatch`] if `weights` and `values`
    /// differ in length.
    pub fn new(weights: Vec<f64>, values: Vec<f64>, capacity: f64) -> Result<Self, GaError> {
        if weights.len() != values.len() {
            return Err(GaError::ItemCountMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// The capacity bound.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the items a genome includes.
    pub fn total_weight(&self, genes: &[u8]) -> f64 {
        dot(genes, &self.weights)
    }

    /// Total value of the items a genome includes.
    pub fn total_value(&self, genes: &[u8]) -> f64 {
        dot(genes, &self.values)
    }
}

impl FitnessFunction for KnapsackProblem {
    fn n_genes(&self) -> usize {
        self.weights.len()
    }

    fn evaluate(&self, genes: &[u8]) -> f64 {
        assert_eq!(
            genes.len(),
            self.weights.len(),
            "genome length must match item count"
        );
        let weight = self.total_weight(genes);
        let value = self.total_value(genes);
        if weight > self.capacity {
            -value
        } else {
            value
        }
    }
}

fn dot(genes: &[u8], coefficients: &[f64]) -> f64 {
    genes
        .iter()
        .zip(coefficients)
        .map(|(&g, &c)| g as f64 * c)
        .sum()
}
