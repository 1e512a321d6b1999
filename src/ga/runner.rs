//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (selection → crossover → mutation →
//! admission → evaluation)* for a fixed number of generations.

use super::config::GaConfig;
use super::fitness::FitnessEvaluator;
use super::operators::{single_point_crossover, uniform_mutation};
use super::rule::Rule;
use super::types::{sort_by_fitness_desc, Individual};
use crate::data::{Dataset, MAX_ITEMS};
use crate::error::{MineError, Result};
use crate::random::create_rng;
use log::{debug, info, trace, warn};
use rand::Rng;
use std::collections::HashSet;

/// Aggregates of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness over the population.
    pub mean_fitness: f64,

    /// Support of the best rule.
    pub best_support: f64,

    /// Confidence of the best rule.
    pub best_confidence: f64,
}

/// Receives per-generation statistics as the run progresses.
///
/// Closures taking `&GenerationStats` implement this trait.
pub trait GenerationSink {
    /// Called once per evaluated generation, in order.
    fn on_generation(&mut self, stats: &GenerationStats);
}

impl<F: FnMut(&GenerationStats)> GenerationSink for F {
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Sink that discards statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl GenerationSink for NoopSink {
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// Result of a mining run.
#[derive(Debug, Clone)]
pub struct MiningResult {
    /// Best rule of the final population.
    pub best: Rule,

    /// Number of generations executed.
    pub generations: usize,

    /// Statistics of the initial population followed by each generation.
    pub history: Vec<GenerationStats>,

    /// Fitness of every rule in the final population, best first.
    pub final_fitness: Vec<f64>,

    /// The final population, sorted by descending fitness.
    pub final_population: Vec<Rule>,
}

impl MiningResult {
    /// Best fitness of the final population.
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }

    /// Up to `k` structurally distinct rules from the final population,
    /// best first.
    pub fn top_rules(&self, k: usize) -> Vec<&Rule> {
        let mut seen = HashSet::new();
        self.final_population
            .iter()
            .filter(|rule| seen.insert(rule.chromosome()))
            .take(k)
            .collect()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_rulemine::data::{Dataset, ItemUniverse};
/// use u_rulemine::ga::{GaConfig, GaRunner};
///
/// let universe = ItemUniverse::new(["LEITE", "PAO", "MANTEIGA"]).unwrap();
/// let data = Dataset::from_names(universe, &[
///     vec!["PAO", "MANTEIGA"],
///     vec!["LEITE", "PAO"],
///     vec!["PAO", "MANTEIGA", "LEITE"],
/// ]).unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = GaRunner::run(&data, &config).unwrap();
/// assert_eq!(result.history.len(), 11);
/// assert!(result.best.is_valid());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, discarding per-generation statistics as they arrive
    /// (they remain available in [`MiningResult::history`]).
    ///
    /// # Errors
    /// Configuration and dataset errors are reported before the loop
    /// starts; see [`GaRunner::run_with_rng`].
    pub fn run(dataset: &Dataset, config: &GaConfig) -> Result<MiningResult> {
        Self::run_with_sink(dataset, config, &mut NoopSink)
    }

    /// Runs the GA, feeding each generation's statistics to `sink`.
    ///
    /// The RNG is seeded from [`GaConfig::seed`], or randomly when unset.
    pub fn run_with_sink<S: GenerationSink>(
        dataset: &Dataset,
        config: &GaConfig,
        sink: &mut S,
    ) -> Result<MiningResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        debug!("rule mining seeded with {seed}");
        Self::run_with_rng(dataset, config, &mut rng, sink)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored here; the caller owns the random
    /// source.
    ///
    /// # Errors
    /// - [`MineError::InvalidConfiguration`] if `config` fails validation
    /// - [`MineError::EmptyDataset`] if `dataset` has no transactions
    /// - [`MineError::DegenerateUniverse`] if the universe has fewer than
    ///   2 items
    /// - [`MineError::RetryLimitExceeded`] if rejection sampling exceeds
    ///   [`GaConfig::max_attempts`]
    pub fn run_with_rng<R: Rng, S: GenerationSink>(
        dataset: &Dataset,
        config: &GaConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<MiningResult> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(MineError::EmptyDataset);
        }
        let universe_len = dataset.universe().len();
        if universe_len < 2 {
            return Err(MineError::DegenerateUniverse { size: universe_len });
        }
        if universe_len > MAX_ITEMS {
            return Err(MineError::UniverseTooLarge {
                size: universe_len,
                max: MAX_ITEMS,
            });
        }

        debug!(
            "rule mining: {} transactions, {} items, population {}, {} generations",
            dataset.len(),
            universe_len,
            config.population_size,
            config.generations
        );

        let evaluator = FitnessEvaluator::new(config.weights);

        // 1. Initialize population
        let mut population = (0..config.population_size)
            .map(|_| Rule::random(universe_len, rng, config.max_attempts))
            .collect::<Result<Vec<_>>>()?;

        // 2. Evaluate initial population
        evaluator.evaluate_all(&mut population, dataset);
        sort_by_fitness_desc(&mut population);

        let mut history = Vec::with_capacity(config.generations + 1);
        record(0, &population, &mut history, sink);

        // 3. Evolutionary loop
        for gen in 1..=config.generations {
            let mut next_gen = breed(&population, config, rng)?;

            // Elites keep their score; only offspring need evaluation.
            let elite_count = config.elite_count.min(next_gen.len());
            evaluator.evaluate_all(&mut next_gen[elite_count..], dataset);
            sort_by_fitness_desc(&mut next_gen);

            population = next_gen;
            record(gen, &population, &mut history, sink);
        }

        let best = population[0].clone();
        info!(
            "rule mining finished after {} generations: {}",
            config.generations,
            best.describe(dataset.universe())
        );

        Ok(MiningResult {
            best,
            generations: config.generations,
            history,
            final_fitness: population.iter().map(Individual::fitness).collect(),
            final_population: population,
        })
    }
}

/// Builds the next population from a population sorted best first.
///
/// Elites are copied verbatim; the remaining slots are filled with
/// mutated offspring that pass the validity check.
fn breed<R: Rng>(population: &[Rule], config: &GaConfig, rng: &mut R) -> Result<Vec<Rule>> {
    let target = config.population_size;
    let mut next_gen: Vec<Rule> = population
        .iter()
        .take(config.elite_count)
        .cloned()
        .collect();
    let mut rejected = 0usize;

    while next_gen.len() < target {
        // Selection
        let p1 = population[config.selection.select(population, rng)].chromosome();
        let p2 = population[config.selection.select(population, rng)].chromosome();

        // Crossover
        let (child_a, child_b) = if rng.random_bool(config.crossover_rate) {
            single_point_crossover(p1, p2, rng)
        } else {
            (p1.clone(), p2.clone())
        };

        for mut child in [child_a, child_b] {
            if next_gen.len() >= target {
                break;
            }

            // Mutation
            uniform_mutation(&mut child, config.mutation_rate, rng);

            // Admission
            if child.is_valid() {
                next_gen.push(Rule::from_chromosome(child));
                rejected = 0;
            } else {
                rejected += 1;
                if rejected >= config.max_attempts {
                    warn!("offspring admission gave up after {rejected} invalid children");
                    return Err(MineError::RetryLimitExceeded { attempts: rejected });
                }
            }
        }
    }

    Ok(next_gen)
}

/// Computes statistics for a population sorted best first, stores them
/// and forwards them to the sink.
fn record<S: GenerationSink>(
    generation: usize,
    population: &[Rule],
    history: &mut Vec<GenerationStats>,
    sink: &mut S,
) {
    let best = &population[0];
    let mean = population.iter().map(Individual::fitness).sum::<f64>() / population.len() as f64;

    let stats = GenerationStats {
        generation,
        best_fitness: best.fitness(),
        mean_fitness: mean,
        best_support: best.support(),
        best_confidence: best.confidence(),
    };
    trace!(
        "generation {generation}: best {:.4}, mean {:.4}, support {:.4}, confidence {:.4}",
        stats.best_fitness,
        stats.mean_fitness,
        stats.best_support,
        stats.best_confidence
    );

    sink.on_generation(&stats);
    history.push(stats);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemUniverse;
    use crate::ga::{Chromosome, Gene, Selection};

    fn dataset() -> Dataset {
        let u = ItemUniverse::new(["A", "B", "C", "D", "E"]).unwrap();
        Dataset::from_names(
            u,
            &[
                vec!["A", "B"],
                vec!["A", "B", "C"],
                vec!["A", "B", "D"],
                vec!["A", "B", "E"],
                vec!["C", "D"],
                vec!["C", "E"],
                vec!["D", "E"],
                vec!["A", "C"],
            ],
        )
        .unwrap()
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_generations(40)
            .with_seed(42)
    }

    #[test]
    fn test_history_length() {
        let result = GaRunner::run(&dataset(), &config()).unwrap();
        assert_eq!(result.generations, 40);
        assert_eq!(result.history.len(), 41);
        for (i, s) in result.history.iter().enumerate() {
            assert_eq!(s.generation, i);
        }
    }

    #[test]
    fn test_population_always_valid() {
        let result = GaRunner::run(&dataset(), &config().with_mutation_rate(0.5)).unwrap();
        assert_eq!(result.final_population.len(), 30);
        assert!(result.final_population.iter().all(Rule::is_valid));
        assert!(result.final_population.iter().all(Rule::is_scored));
    }

    #[test]
    fn test_elite_preservation() {
        let result = GaRunner::run(&dataset(), &config().with_elite_count(2)).unwrap();
        for window in result.history.windows(2) {
            assert!(
                window[1].best_fitness >= window[0].best_fitness,
                "best fitness decreased with elitism: {} < {}",
                window[1].best_fitness,
                window[0].best_fitness
            );
        }
    }

    #[test]
    fn test_finds_strong_rule() {
        // A -> B: support 4/8, confidence 4/6, fitness ≈ 0.583.
        // B -> A: support 4/8, confidence 1, fitness = 0.75.
        let result = GaRunner::run(&dataset(), &config().with_generations(60)).unwrap();
        assert!(
            result.best_fitness() >= 0.75 - 1e-9,
            "expected fitness >= 0.75, got {}",
            result.best_fitness()
        );
    }

    #[test]
    fn test_final_fitness_sorted_and_matches_best() {
        let result = GaRunner::run(&dataset(), &config()).unwrap();
        assert_eq!(result.final_fitness.len(), 30);
        assert!(result.final_fitness.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(result.final_fitness[0], result.best.fitness());

        let last = result.history.last().unwrap();
        assert_eq!(last.best_fitness, result.best.fitness());
        assert_eq!(last.best_support, result.best.support());
        assert_eq!(last.best_confidence, result.best.confidence());
    }

    #[test]
    fn test_same_seed_same_run() {
        let a = GaRunner::run(&dataset(), &config()).unwrap();
        let b = GaRunner::run(&dataset(), &config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
        assert_eq!(a.final_fitness, b.final_fitness);
    }

    #[test]
    fn test_sink_receives_every_generation() {
        let mut seen = Vec::new();
        let mut sink = |s: &GenerationStats| seen.push(s.generation);
        GaRunner::run_with_sink(&dataset(), &config().with_generations(5), &mut sink).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_explicit_rng() {
        let mut rng1 = create_rng(9);
        let mut rng2 = create_rng(9);
        let a = GaRunner::run_with_rng(&dataset(), &config(), &mut rng1, &mut NoopSink).unwrap();
        let b = GaRunner::run_with_rng(&dataset(), &config(), &mut rng2, &mut NoopSink).unwrap();
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GaRunner::run(&dataset(), &config().with_population_size(0)).unwrap_err();
        assert!(matches!(err, MineError::InvalidConfiguration(_)));

        let err = GaRunner::run(&dataset(), &config().with_tournament_size(31)).unwrap_err();
        assert!(matches!(err, MineError::InvalidConfiguration(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_inputs_fail_fast() {
        let json = r#"{"universe":{"names":["A","B"]},"transactions":[]}"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());

        let names: Vec<String> = (0..70).map(|i| format!("\"I{i}\"")).collect();
        let json = format!(
            r#"{{"universe":{{"names":[{}]}},"transactions":[{{"mask":1}}]}}"#,
            names.join(",")
        );
        let err = serde_json::from_str::<Dataset>(&json).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"), "{err}");
    }

    #[test]
    fn test_whole_population_elite() {
        let cfg = config().with_elite_count(30).with_generations(5);
        let result = GaRunner::run(&dataset(), &cfg).unwrap();
        let first = result.history[0];
        for s in &result.history {
            assert_eq!(s.best_fitness, first.best_fitness);
            assert_eq!(s.mean_fitness, first.mean_fitness);
        }
    }

    #[test]
    fn test_all_selection_strategies() {
        for selection in [
            Selection::Tournament(3),
            Selection::Roulette,
            Selection::Rank,
        ] {
            let result = GaRunner::run(&dataset(), &config().with_selection(selection)).unwrap();
            assert!(
                result.best_fitness() > 0.0,
                "selection {selection:?} should find a supported rule"
            );
        }
    }

    #[test]
    fn test_admission_cap() {
        // With max_attempts = 1 any single invalid offspring aborts the run;
        // a full mutation rate over many generations makes that certain.
        let cfg = config()
            .with_mutation_rate(1.0)
            .with_max_attempts(1)
            .with_generations(100);
        let err = GaRunner::run(&dataset(), &cfg).unwrap_err();
        assert_eq!(err, MineError::RetryLimitExceeded { attempts: 1 });
    }

    #[test]
    fn test_top_rules_distinct() {
        let result = GaRunner::run(&dataset(), &config()).unwrap();
        let top = result.top_rules(5);
        assert!(!top.is_empty() && top.len() <= 5);
        assert_eq!(top[0], &result.best);
        for i in 0..top.len() {
            for j in (i + 1)..top.len() {
                assert_ne!(top[i], top[j]);
            }
        }
        assert!(top.windows(2).all(|w| w[0].fitness() >= w[1].fitness()));
    }

    #[test]
    fn test_top_rules_dedupes_clones() {
        let rule = Rule::from_chromosome(Chromosome::new(vec![
            Gene::Antecedent,
            Gene::Consequent,
        ]));
        let result = MiningResult {
            best: rule.clone(),
            generations: 0,
            history: vec![],
            final_fitness: vec![0.0; 3],
            final_population: vec![rule.clone(), rule.clone(), rule],
        };
        assert_eq!(result.top_rules(3).len(), 1);
    }
}
