//! Error types for rule mining.

use thiserror::Error;

/// Errors raised while preparing or running a mining run.
///
/// All of these are detected before (or instead of) producing a result;
/// the zero-confidence case during evaluation is not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MineError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The dataset holds no transactions, so support is undefined.
    #[error("dataset contains no transactions")]
    EmptyDataset,

    /// The item universe cannot hold a rule with both sides non-empty.
    #[error("item universe of size {size} is degenerate: at least 2 items are required")]
    DegenerateUniverse { size: usize },

    /// The item universe exceeds the item-mask width.
    #[error("item universe of size {size} exceeds the maximum of {max} items")]
    UniverseTooLarge { size: usize, max: usize },

    /// A transaction references an item outside the universe.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Rejection sampling gave up before producing a valid chromosome.
    #[error("no valid chromosome after {attempts} attempts")]
    RetryLimitExceeded { attempts: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MineError>;
