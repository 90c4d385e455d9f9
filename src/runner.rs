//! The generational loop.
//!
//! [`GaRunner`] orchestrates one run: initialize → repeat {recombine →
//! mutate → evaluate → elitist-merge → re-evaluate} for a fixed generation
//! count → return the best candidate. There is no early-stopping or
//! convergence criterion; a poor final solution is a valid outcome of the
//! stochastic search, not an error.

use crate::config::GaConfig;
use crate::error::GaError;
use crate::operators::{mutate_population, single_point_crossover};
use crate::population::{Candidate, Population};
use crate::selection::select_pair;
use crate::types::FitnessFunction;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual of the final population.
    pub best: Candidate,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Number of generations executed (always the configured count).
    pub generations: usize,

    /// Best fitness after initialization and after each generation;
    /// `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use bitstring_ga::knapsack::KnapsackProblem;
/// use bitstring_ga::{GaConfig, GaRunner};
///
/// let problem = KnapsackProblem::new(vec![6.0, 5.0, 9.0, 7.0], vec![9.0, 11.0, 13.0, 15.0], 20.0)
///     .unwrap();
/// let config = GaConfig::default().with_generations(200).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.best_fitness > 0.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Errors
    /// Returns a [`GaError`] if the configuration is invalid or the
    /// problem's genome is too short for single-point crossover. Nothing
    /// fails once the loop has started.
    pub fn run<F>(problem: &F, config: &GaConfig) -> Result<GaResult, GaError>
    where
        F: FitnessFunction + ?Sized,
    {
        config.validate()?;
        if problem.n_genes() < 2 {
            return Err(GaError::GenomeTooShort(problem.n_genes()));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n_elites = config.n_elites();
        debug!(
            "starting run: {} individuals x {} generations, {} elites",
            config.population_size, config.generations, n_elites
        );

        let mut population = Population::generate(problem, config.population_size, &mut rng);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population.best().fitness);

        for generation in 0..config.generations {
            let mut offspring = recombine(&mut population, config, &mut rng);
            mutate_population(&mut offspring, config.mutation_rate, &mut rng);
            offspring.update_fitness(problem);
            population.merge_offspring(offspring, n_elites);
            population.update_fitness(problem);

            fitness_history.push(population.best().fitness);
            trace!(
                "generation {generation}: best fitness {}",
                population.best().fitness
            );
        }

        let best = population.best().clone();
        debug!("run finished: best fitness {}", best.fitness);

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Breeds a full offspring population from `population`.
///
/// First shifts every cached fitness down by the current worst so the
/// roulette weights are non-negative, then breeds pairs until the offspring
/// population is full. With an odd population size the final pair
/// contributes only its first offspring; the second is discarded so sizes
/// match exactly.
fn recombine<R: Rng>(population: &mut Population, config: &GaConfig, rng: &mut R) -> Population {
    population.shift_fitness_by_worst();

    let n = config.population_size;
    let mut offspring = Vec::with_capacity(n);
    while offspring.len() < n {
        let (mut first, mut second) = select_pair(population, rng);
        if rng.random_range(0.0..1.0) < config.crossover_rate {
            single_point_crossover(&mut first, &mut second, rng);
        }
        offspring.push(first);
        if offspring.len() < n {
            offspring.push(second);
        }
    }
    Population::from_members(offspring)
}
