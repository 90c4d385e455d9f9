//! Generational genetic algorithm over fixed-length bitstrings.
//!
//! The engine evolves populations of 0/1 genomes with:
//!
//! - **Fitness-proportionate (roulette) selection** of distinct parent
//!   pairs, with a fitness shift that keeps selection weights non-negative
//!   even when the objective goes negative.
//! - **Single-point crossover** at a point drawn from `1..n_genes`, so
//!   every recombination produces a non-trivial split.
//! - **Per-gene bit-flip mutation** applied to the whole offspring
//!   population.
//! - **Generational replacement with elitism**: the top
//!   `ceil(elitism_rate × population_size)` individuals survive unchanged
//!   each generation.
//!
//! The objective is pluggable: implement [`FitnessFunction`] (higher is
//! better) and the engine never looks inside it. A 0/1 knapsack objective
//! with a capacity penalty ships in [`knapsack`] as the reference problem.
//!
//! # Usage
//!
//! ```
//! use bitstring_ga::knapsack::KnapsackProblem;
//! use bitstring_ga::{GaConfig, GaRunner};
//!
//! let problem = KnapsackProblem::new(
//!     vec![2.0, 4.0, 6.0, 7.0],
//!     vec![6.0, 10.0, 12.0, 13.0],
//!     11.0,
//! )
//! .unwrap();
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.best.genes.len(), 4);
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one explicit [`rand::Rng`] handle seeded
//! from [`GaConfig::with_seed`]. Two runs with the same seed and parameters
//! produce identical genomes and fitness trajectories. Runs share no
//! mutable state, so independent repeated runs can execute concurrently as
//! long as each owns its own generator.

mod config;
mod error;
pub mod knapsack;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use population::{Candidate, Population};
pub use runner::{GaResult, GaRunner};
pub use selection::select_pair;
pub use types::FitnessFunction;
