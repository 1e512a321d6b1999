//! Association rule mining by genetic search.
//!
//! Instead of enumerating every candidate rule X → Y over a fixed item
//! universe, this crate evolves a population of candidate rules and ranks
//! them by a weighted combination of support and confidence measured on a
//! transaction dataset.
//!
//! - [`data`]: item universe, transactions and the dataset
//! - [`ga`]: rule encoding, fitness evaluation, genetic operators and the
//!   evolutionary loop
//!
//! # Example
//!
//! ```
//! use u_rulemine::data::{Dataset, ItemUniverse};
//! use u_rulemine::ga::{GaConfig, GaRunner};
//!
//! let universe = ItemUniverse::new(["LEITE", "PAO", "MANTEIGA", "CAFE"])?;
//! let data = Dataset::from_names(universe, &[
//!     vec!["PAO", "MANTEIGA"],
//!     vec!["PAO", "MANTEIGA", "CAFE"],
//!     vec!["LEITE", "CAFE"],
//! ])?;
//!
//! let result = GaRunner::run(&data, &GaConfig::default().with_seed(42))?;
//! println!("{}", result.best.describe(data.universe()));
//! # Ok::<(), u_rulemine::MineError>(())
//! ```
//!
//! Runs are single-threaded. All randomness comes from one seedable RNG,
//! so a fixed seed reproduces a run exactly.

pub mod data;
mod error;
pub mod ga;
pub mod random;

pub use error::{MineError, Result};
