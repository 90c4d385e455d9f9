//! Fitness-proportionate (roulette) parent selection.
//!
//! One selection call picks two *distinct* parents: the second draw
//! excludes the index chosen by the first. Weights are the members' cached
//! fitness values, which the engine shifts to be non-negative (worst = 0)
//! before every breeding pass.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::population::{Candidate, Population};
use rand::Rng;

/// Selects two distinct parents, fitness-proportionately.
///
/// Returns deep copies, never references into the population. Assumes the
/// engine has already shifted fitness values so they are non-negative; with
/// a zero total the walk degrades to uniform random selection (this is the
/// expected all-equal-fitness regime, not an error).
///
/// # Panics
/// Panics if the population has fewer than two members.
pub fn select_pair<R: Rng>(population: &Population, rng: &mut R) -> (Candidate, Candidate) {
    assert!(
        population.len() >= 2,
        "cannot select a parent pair from fewer than 2 individuals"
    );

    let members = population.members();
    let first = roulette_draw(members, None, 0, rng);
    let second = roulette_draw(members, Some(first), 1, rng);
    (members[first].clone(), members[second].clone())
}

/// One roulette draw over the non-excluded members.
///
/// `draw` is the draw number within the pair (0 or 1); the uniform fallback
/// share is `1 / (len - draw)`, i.e. one part per remaining member.
fn roulette_draw<R: Rng>(
    members: &[Candidate],
    skip: Option<usize>,
    draw: usize,
    rng: &mut R,
) -> usize {
    let total_fitness: f64 = members
        .iter()
        .enumerate()
        .filter(|(j, _)| Some(*j) != skip)
        .map(|(_, m)| m.fitness)
        .sum();

    let r: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    let mut last = 0;

    for (j, member) in members.iter().enumerate() {
        if Some(j) == skip {
            continue;
        }
        if total_fitness == 0.0 {
            // Degrades gracefully to uniform random selection.
            cumulative += 1.0 / (members.len() - draw) as f64;
        } else {
            cumulative += member.fitness / total_fitness;
        }
        if r < cumulative {
            return j;
        }
        last = j;
    }

    // Floating-point rounding can leave the cumulative sum a hair below 1.
    last
}
