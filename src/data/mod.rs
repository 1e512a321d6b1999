//! Transaction data consumed by the rule search.
//!
//! - [`ItemUniverse`]: the fixed, ordered vocabulary of items. Its size is
//!   the chromosome length and position `i` maps to item `i`.
//! - [`Dataset`]: the fixed sequence of [`Transaction`]s a run is scored
//!   against.
//!
//! Item sets are stored as 64-bit masks, so superset tests against a
//! transaction are a single AND.

mod dataset;
mod universe;

pub use dataset::{Dataset, Transaction};
pub use universe::{Item, ItemUniverse, MAX_ITEMS};
