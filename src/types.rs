//! The contract between the engine and its objective.

/// An objective over fixed-length bit vectors.
///
/// This is the single seam between the GA engine and the problem domain:
/// the engine hands a genome to [`evaluate`](FitnessFunction::evaluate) and
/// treats the returned score as higher-is-better. It never inspects the
/// objective's internals, so any penalty logic (infeasibility, constraint
/// violations) lives entirely on the implementor's side.
///
/// # Contract
///
/// - `evaluate` must be pure and deterministic: the same genome always
///   yields the same score, with no side effects.
/// - The engine only ever passes genomes of length
///   [`n_genes`](FitnessFunction::n_genes). Implementations may `assert!`
///   on this; a mismatch is a programming error, not a runtime condition.
///
/// # Implementing
///
/// ```
/// use bitstring_ga::FitnessFunction;
///
/// /// Maximize the number of set bits.
/// struct OneMax(usize);
///
/// impl FitnessFunction for OneMax {
///     fn n_genes(&self) -> usize {
///         self.0
///     }
///
///     fn evaluate(&self, genes: &[u8]) -> f64 {
///         genes.iter().map(|&g| g as f64).sum()
///     }
/// }
/// ```
pub trait FitnessFunction {
    /// Problem dimensionality: the genome length the engine must use.
    fn n_genes(&self) -> usize;

    /// Scores a genome. Higher is better.
    fn evaluate(&self, genes: &[u8]) -> f64;
}
