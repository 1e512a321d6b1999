//! Candidate association rule X → Y.

use super::chromosome::{Chromosome, Gene};
use super::types::{Individual, Score};
use crate::data::{Item, ItemUniverse};
use crate::error::Result;
use rand::Rng;
use std::collections::BTreeSet;

/// A population member: an immutable chromosome plus the score record
/// written by the fitness evaluator.
///
/// Two rules are equal when their gene sequences are equal; scores are
/// not compared.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    chromosome: Chromosome,
    score: Option<Score>,
}

impl Rule {
    /// Creates a random valid, unscored rule over a universe of
    /// `universe_len` items.
    ///
    /// # Errors
    /// See [`Chromosome::random_valid`].
    pub fn random<R: Rng>(universe_len: usize, rng: &mut R, max_attempts: usize) -> Result<Self> {
        Chromosome::random_valid(universe_len, rng, max_attempts).map(Self::from_chromosome)
    }

    /// Wraps a chromosome without checking validity.
    ///
    /// Offspring built this way must pass [`Rule::is_valid`] before they
    /// join a population.
    pub fn from_chromosome(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            score: None,
        }
    }

    /// The underlying chromosome.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Consumes the rule, returning its chromosome.
    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }

    /// Validity of the underlying chromosome.
    pub fn is_valid(&self) -> bool {
        self.chromosome.is_valid()
    }

    /// Antecedent items X, in universe order.
    pub fn antecedent(&self) -> BTreeSet<Item> {
        self.items_with(Gene::Antecedent)
    }

    /// Consequent items Y, in universe order.
    pub fn consequent(&self) -> BTreeSet<Item> {
        self.items_with(Gene::Consequent)
    }

    /// Item mask of X.
    pub fn antecedent_mask(&self) -> u64 {
        self.chromosome.mask_of(Gene::Antecedent)
    }

    /// Item mask of Y.
    pub fn consequent_mask(&self) -> u64 {
        self.chromosome.mask_of(Gene::Consequent)
    }

    /// The score record, or `None` before evaluation.
    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    /// Returns `true` once the evaluator has scored this rule.
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    /// Stores a score record.
    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = Some(score);
    }

    /// Support, or `0.0` while unscored.
    pub fn support(&self) -> f64 {
        self.score.map_or(0.0, |s| s.support)
    }

    /// Confidence, or `0.0` while unscored.
    pub fn confidence(&self) -> f64 {
        self.score.map_or(0.0, |s| s.confidence)
    }

    /// Renders the rule as `{X} -> {Y} (fitness: f)`.
    pub fn describe(&self, universe: &ItemUniverse) -> String {
        format!(
            "{} -> {} (fitness: {:.4})",
            universe.format_items(self.antecedent()),
            universe.format_items(self.consequent()),
            self.fitness()
        )
    }

    fn items_with(&self, gene: Gene) -> BTreeSet<Item> {
        self.chromosome
            .genes()
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == gene)
            .map(|(i, _)| Item::from_index(i))
            .collect()
    }
}

impl Individual for Rule {
    fn fitness(&self) -> f64 {
        self.score.map_or(0.0, |s| s.fitness)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome
    }
}

impl Eq for Rule {}
