//! Presentation order for size buckets.

use std::collections::BTreeMap;
use std::fmt;

/// Display order for sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Largest sizes first.
    #[default]
    Descending,
    /// Smallest sizes first.
    Ascending,
}

impl SortOrder {
    /// Map the interactive menu token (`1` or `2`) to an order.
    #[must_use]
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Descending),
            "2" => Some(Self::Ascending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descending => write!(f, "descending"),
            Self::Ascending => write!(f, "ascending"),
        }
    }
}

/// Distinct sizes of `index`, sorted by `order`.
///
/// Generic over the bucket value so it serves both the size index and the
/// duplicate index.
#[must_use]
pub fn sort_sizes<V>(index: &BTreeMap<u64, V>, order: SortOrder) -> Vec<u64> {
    match order {
        SortOrder::Ascending => index.keys().copied().collect(),
        SortOrder::Descending => index.keys().rev().copied().collect(),
    }
}
