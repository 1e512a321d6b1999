//! Item universe.

use crate::error::{MineError, Result};
use std::collections::HashSet;

/// Upper bound on the universe size (width of an item mask).
pub const MAX_ITEMS: usize = 64;

/// An item, identified by its position in the [`ItemUniverse`].
///
/// Ordering follows universe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item(usize);

impl Item {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of this item in its universe (= chromosome locus).
    pub fn index(self) -> usize {
        self.0
    }

    /// Single-bit mask for this item.
    pub fn mask(self) -> u64 {
        1u64 << self.0
    }
}

/// Fixed, ordered set of distinct item symbols.
///
/// # Examples
///
/// ```
/// use u_rulemine::data::ItemUniverse;
///
/// let universe = ItemUniverse::new(["LEITE", "PAO", "MANTEIGA"]).unwrap();
/// assert_eq!(universe.len(), 3);
/// let pao = universe.lookup("PAO").unwrap();
/// assert_eq!(pao.index(), 1);
/// assert_eq!(universe.name(pao), "PAO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniverseRepr"))]
pub struct ItemUniverse {
    names: Vec<String>,
}

/// Unchecked wire form; deserialization goes through [`ItemUniverse::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniverseRepr {
    names: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<UniverseRepr> for ItemUniverse {
    type Error = MineError;

    fn try_from(repr: UniverseRepr) -> Result<Self> {
        Self::new(repr.names)
    }
}

impl ItemUniverse {
    /// Builds a universe from item names, in order.
    ///
    /// # Errors
    /// - [`MineError::DegenerateUniverse`] with fewer than 2 items
    /// - [`MineError::UniverseTooLarge`] with more than [`MAX_ITEMS`]
    /// - [`MineError::InvalidConfiguration`] on a duplicate name
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 2 {
            return Err(MineError::DegenerateUniverse { size: names.len() });
        }
        if names.len() > MAX_ITEMS {
            return Err(MineError::UniverseTooLarge {
                size: names.len(),
                max: MAX_ITEMS,
            });
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MineError::InvalidConfiguration(format!(
                    "duplicate item in universe: {name}"
                )));
            }
        }

        Ok(Self { names })
    }

    /// Number of items (the chromosome length).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed universe; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Finds an item by name.
    pub fn lookup(&self, name: &str) -> Option<Item> {
        self.names.iter().position(|n| n == name).map(Item)
    }

    /// Returns the item at `index`, if in range.
    pub fn item(&self, index: usize) -> Option<Item> {
        (index < self.names.len()).then_some(Item(index))
    }

    /// Name of an item.
    ///
    /// # Panics
    /// Panics if `item` comes from a larger universe.
    pub fn name(&self, item: Item) -> &str {
        &self.names[item.0]
    }

    /// Iterates over all items in universe order.
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.names.len()).map(Item)
    }

    /// Mask with one bit set per universe item.
    pub fn full_mask(&self) -> u64 {
        if self.names.len() == MAX_ITEMS {
            u64::MAX
        } else {
            (1u64 << self.names.len()) - 1
        }
    }

    /// Renders a set of items as `{A, B}` in universe order.
    pub fn format_items<I: IntoIterator<Item = Item>>(&self, items: I) -> String {
        let names: Vec<&str> = items.into_iter().map(|i| self.name(i)).collect();
        format!("{{{}}}", names.join(", "))
    }
}
