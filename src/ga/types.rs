//! Core trait and score record shared by the GA components.

/// A member of a GA population.
///
/// Selection and ranking only need an individual's fitness, so they are
/// written against this trait rather than a concrete rule type.
/// Higher fitness is better (maximization).
pub trait Individual: Clone {
    /// Current fitness; `0.0` for an individual that has not been scored.
    fn fitness(&self) -> f64;
}

/// Evaluation record produced by the fitness evaluator.
///
/// Kept separate from the chromosome so an unscored rule is never
/// mistaken for a scored one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Fraction of transactions containing antecedent ∪ consequent.
    pub support: f64,

    /// Fraction of antecedent-containing transactions that also contain
    /// the consequent. `0.0` when the antecedent never occurs.
    pub confidence: f64,

    /// Weighted combination of support and confidence.
    pub fitness: f64,
}

/// Sorts a population by descending fitness.
///
/// The sort is stable, so equally fit individuals keep their relative order.
pub fn sort_by_fitness_desc<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}
