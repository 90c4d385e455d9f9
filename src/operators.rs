//! Genetic operators: single-point crossover and bit-flip mutation.
//!
//! Both operate in place. Crossover recombines one selected pair; mutation
//! sweeps an entire offspring population and is the sole source of new
//! genetic material after initialization.

use crate::population::{Candidate, Population};
use rand::Rng;

/// Single-point crossover, in place.
///
/// Picks a point uniformly from `1..n_genes` (never 0, so the split is
/// always non-trivial) and swaps all genes *before* the point between the
/// two candidates. Fitness caches are left untouched; the engine
/// re-evaluates offspring after mutation.
///
/// # Panics
/// Panics if the genomes differ in length or are shorter than two genes.
pub fn single_point_crossover<R: Rng>(a: &mut Candidate, b: &mut Candidate, rng: &mut R) {
    let n = a.genes.len();
    assert_eq!(n, b.genes.len(), "parents must have equal length");
    assert!(n >= 2, "single-point crossover needs at least 2 genes");

    let point = rng.random_range(1..n);
    a.genes[..point].swap_with_slice(&mut b.genes[..point]);
}

/// Per-gene bit-flip mutation over a whole population.
///
/// Every gene of every member flips independently with probability
/// `mutation_rate`. One uniform draw is consumed per gene regardless of
/// outcome, which keeps seeded runs reproducible.
pub fn mutate_population<R: Rng>(population: &mut Population, mutation_rate: f64, rng: &mut R) {
    for member in population.members_mut() {
        for gene in &mut member.genes {
            if rng.random_range(0.0..1.0) < mutation_rate {
                *gene = 1 - *gene;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(genes: Vec<u8>) -> Candidate {
        Candidate {
            genes,
            fitness: 0.0,
        }
    }

    fn population_of(genomes: Vec<Vec<u8>>) -> Population {
        Population::from_members(genomes.into_iter().map(candidate).collect())
    }

    #[test]
    fn test_crossover_swaps_prefix_only() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut a = candidate(vec![0; 8]);
            let mut b = candidate(vec![1; 8]);
            single_point_crossover(&mut a, &mut b, &mut rng);

            // Point is in 1..8: the first gene always swaps, the last never.
            assert_eq!(a.genes[0], 1);
            assert_eq!(b.genes[0], 0);
            assert_eq!(a.genes[7], 0);
            assert_eq!(b.genes[7], 1);

            // Exactly one 1->0 boundary in a (prefix of 1s, suffix of 0s).
            let point = a.genes.iter().position(|&g| g == 0).unwrap();
            assert!((1..8).contains(&point));
            assert!(a.genes[point..].iter().all(|&g| g == 0));
            assert!(b.genes[..point].iter().all(|&g| g == 0));
            assert!(b.genes[point..].iter().all(|&g| g == 1));
        }
    }

    #[test]
    fn test_crossover_two_genes() {
        // n = 2 has a single valid point: 1.
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = candidate(vec![0, 0]);
        let mut b = candidate(vec![1, 1]);
        single_point_crossover(&mut a, &mut b, &mut rng);
        assert_eq!(a.genes, vec![1, 0]);
        assert_eq!(b.genes, vec![0, 1]);
    }

    #[test]
    #[should_panic(expected = "at least 2 genes")]
    fn test_crossover_rejects_single_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = candidate(vec![0]);
        let mut b = candidate(vec![1]);
        single_point_crossover(&mut a, &mut b, &mut rng);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_crossover_rejects_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = candidate(vec![0, 1, 0]);
        let mut b = candidate(vec![1, 0]);
        single_point_crossover(&mut a, &mut b, &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let genomes = vec![vec![0, 1, 0, 1], vec![1, 1, 0, 0], vec![0, 0, 0, 0]];
        let mut population = population_of(genomes.clone());

        mutate_population(&mut population, 0.0, &mut rng);

        for (member, original) in population.members().iter().zip(&genomes) {
            assert_eq!(&member.genes, original);
        }
    }

    #[test]
    fn test_mutation_rate_one_flips_everything() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = population_of(vec![vec![0, 1, 0], vec![1, 1, 1]]);

        mutate_population(&mut population, 1.0, &mut rng);

        assert_eq!(population.members()[0].genes, vec![1, 0, 1]);
        assert_eq!(population.members()[1].genes, vec![0, 0, 0]);
    }

    #[test]
    fn test_mutation_flip_count_tracks_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = population_of(vec![vec![0u8; 1000]; 10]);

        mutate_population(&mut population, 0.1, &mut rng);

        let flipped: usize = population
            .members()
            .iter()
            .map(|m| m.genes.iter().filter(|&&g| g == 1).count())
            .sum();
        // 10_000 draws at p = 0.1: expect ~1000 flips.
        assert!(
            (800..1200).contains(&flipped),
            "expected roughly 1000 flips, got {flipped}"
        );
    }

    proptest! {
        /// Crossover permutes genes column-wise: at every position the
        /// unordered pair of bits is preserved.
        #[test]
        fn prop_crossover_preserves_columns(
            genes in proptest::collection::vec((0u8..=1, 0u8..=1), 2..64),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (a_genes, b_genes): (Vec<u8>, Vec<u8>) = genes.iter().copied().unzip();
            let mut a = candidate(a_genes.clone());
            let mut b = candidate(b_genes.clone());

            single_point_crossover(&mut a, &mut b, &mut rng);

            for i in 0..genes.len() {
                let before = [a_genes[i].min(b_genes[i]), a_genes[i].max(b_genes[i])];
                let after = [a.genes[i].min(b.genes[i]), a.genes[i].max(b.genes[i])];
                prop_assert_eq!(before, after);
            }
        }

        /// Mutation at rate 0 never changes a genome, whatever the seed.
        #[test]
        fn prop_zero_rate_mutation_is_identity(
            genome in proptest::collection::vec(0u8..=1, 1..64),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut population = population_of(vec![genome.clone()]);
            mutate_population(&mut population, 0.0, &mut rng);
            prop_assert_eq!(&population.members()[0].genes, &genome);
        }

        /// Mutation output stays a 0/1 vector of the same length.
        #[test]
        fn prop_mutation_preserves_shape(
            genome in proptest::collection::vec(0u8..=1, 1..64),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut population = population_of(vec![genome.clone()]);
            mutate_population(&mut population, rate, &mut rng);

            let mutated = &population.members()[0].genes;
            prop_assert_eq!(mutated.len(), genome.len());
            prop_assert!(mutated.iter().all(|&g| g <= 1));
        }
    }
}
