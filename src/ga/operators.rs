//! Genetic operators on rule chromosomes.
//!
//! - [`single_point_crossover`]: exchange tails after a random cut
//! - [`crossover_at`]: the same exchange at a fixed cut
//! - [`uniform_mutation`]: independent per-gene redraw
//!
//! Operators may produce invalid chromosomes; admission into a population
//! is checked by the caller.

use super::chromosome::{Chromosome, Gene};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover with a cut drawn uniformly from `[1, N-1]`.
///
/// Both children inherit at least one gene from each parent. For `N < 2`
/// no interior cut exists and the parents are returned unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.random_range(1..n);
    crossover_at(parent1, parent2, cut)
}

/// Single-point crossover at a fixed cut.
///
/// `child_a = parent1[..cut] ++ parent2[cut..]` and
/// `child_b = parent2[..cut] ++ parent1[cut..]`.
///
/// # Panics
/// Panics if the parents have different lengths or `cut > N`.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    cut: usize,
) -> (Chromosome, Chromosome) {
    let (g1, g2) = (parent1.genes(), parent2.genes());
    assert_eq!(g1.len(), g2.len(), "parents must have equal length");
    assert!(cut <= g1.len(), "cut point {cut} out of range");

    let child_a: Vec<Gene> = g1[..cut].iter().chain(&g2[cut..]).copied().collect();
    let child_b: Vec<Gene> = g2[..cut].iter().chain(&g1[cut..]).copied().collect();

    (Chromosome::new(child_a), Chromosome::new(child_b))
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-gene mutation: each locus is redrawn uniformly from the three
/// states with probability `rate`. A redraw may repeat the old value.
///
/// # Complexity
/// O(N)
pub fn uniform_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for gene in chromosome.genes_mut() {
        if rng.random_bool(rate) {
            *gene = Gene::random(rng);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
