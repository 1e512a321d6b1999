//! Transactions and the dataset a run is scored against.

use super::universe::{Item, ItemUniverse};
use crate::error::{MineError, Result};

/// One observed basket: a set of items with no order or duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    mask: u64,
}

impl Transaction {
    /// Builds a transaction from items. Repeated items collapse.
    pub fn from_items<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let mask = items.into_iter().fold(0u64, |m, item| m | item.mask());
        Self { mask }
    }

    /// Item mask of this transaction.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns `true` if this transaction contains `item`.
    pub fn contains(&self, item: Item) -> bool {
        self.mask & item.mask() != 0
    }

    /// Superset test: every item in `items` is present.
    ///
    /// The empty mask is contained in every transaction.
    pub fn contains_all(&self, items: u64) -> bool {
        self.mask & items == items
    }

    /// Number of items in the basket.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns `true` for an empty basket.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Iterates members in universe order.
    pub fn items<'a>(&'a self, universe: &'a ItemUniverse) -> impl Iterator<Item = Item> + 'a {
        universe.iter().filter(move |item| self.contains(*item))
    }
}

/// Fixed, ordered sequence of transactions over one [`ItemUniverse`].
///
/// Supplied in full before a run starts; never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DatasetRepr"))]
pub struct Dataset {
    universe: ItemUniverse,
    transactions: Vec<Transaction>,
}

/// Unchecked wire form; deserialization goes through [`Dataset::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DatasetRepr {
    universe: ItemUniverse,
    transactions: Vec<Transaction>,
}

#[cfg(feature = "serde")]
impl TryFrom<DatasetRepr> for Dataset {
    type Error = MineError;

    fn try_from(repr: DatasetRepr) -> Result<Self> {
        Self::new(repr.universe, repr.transactions)
    }
}

impl Dataset {
    /// Creates a dataset.
    ///
    /// # Errors
    /// - [`MineError::EmptyDataset`] if `transactions` is empty
    /// - [`MineError::UnknownItem`] if a transaction holds an item beyond the
    ///   universe
    pub fn new(universe: ItemUniverse, transactions: Vec<Transaction>) -> Result<Self> {
        if transactions.is_empty() {
            return Err(MineError::EmptyDataset);
        }
        let full = universe.full_mask();
        if let Some(t) = transactions.iter().find(|t| t.mask() & !full != 0) {
            let outside = (t.mask() & !full).trailing_zeros();
            return Err(MineError::UnknownItem(format!("item index {outside}")));
        }
        Ok(Self {
            universe,
            transactions,
        })
    }

    /// Creates a dataset from rows of item names.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rulemine::data::{Dataset, ItemUniverse};
    ///
    /// let universe = ItemUniverse::new(["LEITE", "PAO", "CAFE"]).unwrap();
    /// let data = Dataset::from_names(universe, &[
    ///     vec!["LEITE", "PAO"],
    ///     vec!["CAFE"],
    /// ]).unwrap();
    /// assert_eq!(data.len(), 2);
    /// ```
    ///
    /// # Errors
    /// [`MineError::UnknownItem`] for a name outside the universe, plus the
    /// errors of [`Dataset::new`].
    pub fn from_names<R, S>(universe: ItemUniverse, rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let transactions = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|name| {
                        let name = name.as_ref();
                        universe
                            .lookup(name)
                            .ok_or_else(|| MineError::UnknownItem(name.to_string()))
                    })
                    .collect::<Result<Vec<Item>>>()
                    .map(Transaction::from_items)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(universe, transactions)
    }

    /// The item universe.
    pub fn universe(&self) -> &ItemUniverse {
        &self.universe
    }

    /// The transactions, in input order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions (never zero).
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Always false for a constructed dataset; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Counts transactions that are supersets of `items`.
    pub fn count_containing(&self, items: u64) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.contains_all(items))
            .count()
    }
}
