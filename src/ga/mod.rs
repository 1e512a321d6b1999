//! Genetic search over association rules.
//!
//! A rule X → Y over an item universe of size N is encoded as a
//! [`Chromosome`] of N ternary [`Gene`]s. The search keeps a population of
//! valid [`Rule`]s, scores them with a [`FitnessEvaluator`] against a
//! [`Dataset`](crate::data::Dataset), and evolves them with tournament
//! selection, single-point crossover, per-gene mutation and elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, weights)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`MiningResult`]: Best rule, per-generation statistics, final population
//! - [`GenerationSink`]: Receives [`GenerationStats`] while the run progresses
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and per-gene mutation
//!
//! # References
//!
//! - Agrawal, Imieliński & Swami (1993), *Mining Association Rules between
//!   Sets of Items in Large Databases*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod fitness;
pub mod operators;
mod rule;
mod runner;
mod selection;
mod types;

pub use chromosome::{Chromosome, Gene};
pub use config::GaConfig;
pub use fitness::{FitnessEvaluator, FitnessWeights};
pub use rule::Rule;
pub use runner::{GaRunner, GenerationSink, GenerationStats, MiningResult, NoopSink};
pub use selection::Selection;
pub use types::{sort_by_fitness_desc, Individual, Score};
