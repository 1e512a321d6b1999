//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::fitness::FitnessWeights;
use super::selection::Selection;
use crate::error::{MineError, Result};

/// Configuration for the rule-mining GA.
///
/// # Defaults
///
/// ```
/// use u_rulemine::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.selection, Selection::Tournament(3));
/// assert_eq!(config.elite_count, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_rulemine::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_elite_count(2)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given. Out-of-range values are reported by
/// [`validate`](GaConfig::validate), never clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of rules in every population.
    pub population_size: usize,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are cloned.
    pub crossover_rate: f64,

    /// Per-gene probability of a mutation redraw (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of top rules copied unchanged into the next generation.
    pub elite_count: usize,

    /// Weights of support and confidence in the fitness.
    pub weights: FitnessWeights,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Cap on rejection sampling: draws per random rule, and consecutive
    /// rejected offspring while filling a population.
    pub max_attempts: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            elite_count: 1,
            weights: FitnessWeights::default(),
            seed: None,
            max_attempts: 1000,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, support: f64, confidence: f64) -> Self {
        self.weights = FitnessWeights::new(support, confidence);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the rejection-sampling cap.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`MineError::InvalidConfiguration`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err(invalid(format!(
                    "tournament_size {k} must be within 1..={}",
                    self.population_size
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid(format!(
                "crossover_rate {} must be within [0, 1]",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate {} must be within [0, 1]",
                self.mutation_rate
            )));
        }
        if self.elite_count > self.population_size {
            return Err(invalid(format!(
                "elite_count {} exceeds population_size {}",
                self.elite_count, self.population_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1"));
        }
        self.weights.validate()
    }
}

fn invalid(msg: impl Into<String>) -> MineError {
    MineError::InvalidConfiguration(msg.into())
}
