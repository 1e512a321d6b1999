//! Parent selection.
//!
//! All strategies **maximize** fitness and sample with replacement, so
//! each call is independent and may return the same index twice.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_rulemine::ga::Selection;
///
/// // Tournament of 3 (the default)
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` individuals uniformly with replacement and keep the one
    /// with strictly greatest fitness; the first drawn wins ties.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Falls back to a uniform draw when every fitness is zero.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank selection: the best of `n` gets weight `n`, the worst
    /// weight 1.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return the fittest.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over raw fitness (fitness is non-negative here).
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| ind.fitness().max(0.0))
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Linear rank selection, best first.
fn rank<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, ind)| (i, ind.fitness()))
        .collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed[n - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = Selection::Tournament(4).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        // 1 - (3/4)^4 ≈ 0.68
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Tournament(1).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_ties_keep_first_drawn() {
        // All equal: the first draw is never replaced, so selection is the
        // first uniform draw and stays roughly uniform.
        let pop = make_population(&[0.5, 0.5, 0.5, 0.5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Tournament(3).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[0.05, 0.2, 0.9, 0.1]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Roulette.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "best should be selected more often: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Roulette.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[0.05, 0.2, 0.9, 0.1]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Rank.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "best should be selected more: {counts:?}"
        );
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[0.5]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Rank.select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
