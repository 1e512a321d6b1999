//! Support/confidence fitness.
//!
//! For a rule X → Y over a dataset D:
//!
//! ```text
//! support    = |{t ∈ D : t ⊇ X ∪ Y}| / |D|
//! confidence = |{t ∈ D : t ⊇ X ∪ Y}| / |{t ∈ D : t ⊇ X}|   (0 if the denominator is 0)
//! fitness    = w_support · support + w_confidence · confidence
//! ```

use super::rule::Rule;
use super::types::Score;
use crate::data::Dataset;
use crate::error::{MineError, Result};

/// Linear weights on support and confidence.
///
/// Fitness stays in `[0, 1]` as long as both weights are non-negative
/// and their sum is at most 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    /// Weight on support.
    pub support: f64,
    /// Weight on confidence.
    pub confidence: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            support: 0.5,
            confidence: 0.5,
        }
    }
}

impl FitnessWeights {
    /// Creates a weight pair.
    pub fn new(support: f64, confidence: f64) -> Self {
        Self {
            support,
            confidence,
        }
    }

    /// Rejects weights that could push fitness outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.support.is_finite() || !self.confidence.is_finite() {
            return Err(MineError::InvalidConfiguration(
                "fitness weights must be finite".into(),
            ));
        }
        if self.support < 0.0 || self.confidence < 0.0 {
            return Err(MineError::InvalidConfiguration(
                "fitness weights must be non-negative".into(),
            ));
        }
        if self.support + self.confidence > 1.0 + 1e-12 {
            return Err(MineError::InvalidConfiguration(format!(
                "fitness weights sum to {} (must be at most 1)",
                self.support + self.confidence
            )));
        }
        Ok(())
    }
}

/// Scores rules against a dataset.
///
/// Evaluation depends only on the rule and the dataset, never on the rest
/// of the population.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessEvaluator {
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    /// Creates an evaluator with the given weights.
    pub fn new(weights: FitnessWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> FitnessWeights {
        self.weights
    }

    /// Computes a rule's score without storing it.
    ///
    /// The rule must span the dataset's universe; debug builds assert it.
    ///
    /// # Complexity
    /// O(|D|) superset tests.
    pub fn score(&self, rule: &Rule, dataset: &Dataset) -> Score {
        debug_assert_eq!(
            rule.chromosome().len(),
            dataset.universe().len(),
            "rule length does not match the dataset universe"
        );
        let x = rule.antecedent_mask();
        let xy = x | rule.consequent_mask();

        let (with_x, with_xy) = dataset
            .transactions()
            .iter()
            .fold((0usize, 0usize), |(nx, nxy), t| {
                (
                    nx + usize::from(t.contains_all(x)),
                    nxy + usize::from(t.contains_all(xy)),
                )
            });

        let support = with_xy as f64 / dataset.len() as f64;
        let confidence = if with_x == 0 {
            0.0
        } else {
            with_xy as f64 / with_x as f64
        };
        let fitness = self.weights.support * support + self.weights.confidence * confidence;

        Score {
            support,
            confidence,
            fitness,
        }
    }

    /// Scores a rule and stores the record on it.
    pub fn evaluate(&self, rule: &mut Rule, dataset: &Dataset) -> Score {
        let score = self.score(rule, dataset);
        rule.set_score(score);
        score
    }

    /// Scores every rule in a population.
    pub fn evaluate_all(&self, population: &mut [Rule], dataset: &Dataset) {
        for rule in population.iter_mut() {
            self.evaluate(rule, dataset);
        }
    }
}
