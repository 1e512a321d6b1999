//! Rule encoding: one ternary gene per universe item.
//!
//! A gene says whether its item is left out of the rule, sits in the
//! antecedent X, or sits in the consequent Y. Since a locus holds exactly
//! one gene, X ∩ Y = ∅ for every chromosome.

use crate::data::MAX_ITEMS;
use crate::error::{MineError, Result};
use rand::Rng;

/// Role of one item in a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gene {
    /// Item excluded from the rule.
    #[default]
    None,
    /// Item belongs to the antecedent X.
    Antecedent,
    /// Item belongs to the consequent Y.
    Consequent,
}

impl Gene {
    /// All gene states, in encoding order (0, 1, 2).
    pub const ALL: [Gene; 3] = [Gene::None, Gene::Antecedent, Gene::Consequent];

    /// Draws a gene uniformly from the three states.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..3)]
    }
}

/// Fixed-length gene sequence; locus `i` encodes universe item `i`.
///
/// Equality is structural over the genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Wraps a gene sequence as-is. No validity check is made.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Draws every gene independently, without checking validity.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| Gene::random(rng)).collect(),
        }
    }

    /// Draws chromosomes until one is valid (rejection sampling).
    ///
    /// # Errors
    /// - [`MineError::DegenerateUniverse`] if `len < 2`, since no valid
    ///   chromosome exists
    /// - [`MineError::RetryLimitExceeded`] if `max_attempts` draws all fail
    pub fn random_valid<R: Rng>(len: usize, rng: &mut R, max_attempts: usize) -> Result<Self> {
        if len < 2 {
            return Err(MineError::DegenerateUniverse { size: len });
        }
        for _ in 0..max_attempts {
            let candidate = Self::random(len, rng);
            if candidate.is_valid() {
                return Ok(candidate);
            }
        }
        Err(MineError::RetryLimitExceeded {
            attempts: max_attempts,
        })
    }

    /// Validity predicate: at least one antecedent gene and at least one
    /// consequent gene.
    pub fn is_valid(&self) -> bool {
        let mut has_antecedent = false;
        let mut has_consequent = false;
        for gene in &self.genes {
            match gene {
                Gene::Antecedent => has_antecedent = true,
                Gene::Consequent => has_consequent = true,
                Gene::None => {}
            }
            if has_antecedent && has_consequent {
                return true;
            }
        }
        false
    }

    /// The genes, in locus order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Mutable access for operators that build offspring.
    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Chromosome length (universe size).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` for a zero-length chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Item mask of every locus holding `gene`.
    ///
    /// # Panics
    /// Panics if the chromosome is longer than [`MAX_ITEMS`].
    pub fn mask_of(&self, gene: Gene) -> u64 {
        assert!(
            self.genes.len() <= MAX_ITEMS,
            "chromosome of length {} exceeds {MAX_ITEMS} loci",
            self.genes.len()
        );
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == gene)
            .fold(0u64, |m, (i, _)| m | (1u64 << i))
    }
}

impl From<Vec<Gene>> for Chromosome {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}
