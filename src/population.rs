//! Candidate and population model.
//!
//! A [`Population`] is kept sorted descending by fitness after every
//! fitness update, so index 0 is always the best individual and the last
//! index the worst. Elitism and the selection-weight shift both rely on
//! this ordering.

use crate::types::FitnessFunction;
use rand::Rng;

/// A single genome with its cached fitness.
///
/// The cache is the objective's value for the current `genes` except in two
/// transient windows: between the selection-weight shift and the next
/// fitness update, and between mutation and the update that follows it.
/// Both windows are internal to one generation of the engine loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Bit vector of 0/1 values, length fixed by the problem.
    pub genes: Vec<u8>,

    /// Cached objective value for `genes`. Higher is better.
    pub fitness: f64,
}

impl Candidate {
    /// Creates a candidate with uniformly random bits, evaluated once.
    pub fn random<F, R>(problem: &F, rng: &mut R) -> Self
    where
        F: FitnessFunction + ?Sized,
        R: Rng,
    {
        let genes: Vec<u8> = (0..problem.n_genes())
            .map(|_| rng.random_range(0..=1u8))
            .collect();
        let fitness = problem.evaluate(&genes);
        Self { genes, fitness }
    }
}

/// An ordered collection of candidates.
///
/// Constructed by [`generate`](Population::generate) (and internally by the
/// breeding loop); owned exclusively by the engine for the duration of a
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Candidate>,
}

impl Population {
    /// Generates `n` random candidates, each evaluated once, then sorts
    /// them descending by fitness.
    pub fn generate<F, R>(problem: &F, n: usize, rng: &mut R) -> Self
    where
        F: FitnessFunction + ?Sized,
        R: Rng,
    {
        let members = (0..n).map(|_| Candidate::random(problem, rng)).collect();
        let mut population = Self { members };
        population.sort_by_fitness();
        population
    }

    /// Wraps an already-bred offspring vector. Not sorted.
    pub(crate) fn from_members(members: Vec<Candidate>) -> Self {
        Self { members }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in their current order.
    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Candidate] {
        &mut self.members
    }

    /// The best individual.
    ///
    /// Only meaningful after a fitness update; the merge step leaves the
    /// population unsorted until the next update.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Candidate {
        &self.members[0]
    }

    /// Fitness of the last (worst after sorting) member.
    pub(crate) fn worst_fitness(&self) -> f64 {
        self.members[self.members.len() - 1].fitness
    }

    /// Re-evaluates every member, then restores the descending order.
    ///
    /// Must run after mutation and again after the elitist merge, since
    /// both can change membership.
    pub fn update_fitness<F>(&mut self, problem: &F)
    where
        F: FitnessFunction + ?Sized,
    {
        for member in &mut self.members {
            member.fitness = problem.evaluate(&member.genes);
        }
        self.sort_by_fitness();
    }

    /// Stable sort, descending by fitness. Ties keep their prior order, so
    /// a seeded run stays deterministic.
    pub(crate) fn sort_by_fitness(&mut self) {
        self.members.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Shifts every cached fitness down by the current worst fitness.
    ///
    /// Run immediately before breeding: the worst member then contributes
    /// zero selection weight and everyone else a non-negative weight, which
    /// the roulette walk requires. The caches stay shifted until the next
    /// [`update_fitness`](Population::update_fitness).
    pub(crate) fn shift_fitness_by_worst(&mut self) {
        let worst = self.worst_fitness();
        for member in &mut self.members {
            member.fitness -= worst;
        }
    }

    /// Elitist merge: keeps the first `n_elites` members of `self` and
    /// fills the remaining slots, in order, from the front of `offspring`.
    ///
    /// Both populations must be fitness-updated (sorted) beforehand; the
    /// result is *not* sorted and callers must update fitness afterwards.
    pub(crate) fn merge_offspring(&mut self, offspring: Population, n_elites: usize) {
        for (slot, child) in self.members[n_elites..].iter_mut().zip(offspring.members) {
            *slot = child;
        }
    }
}
