//! # Display Indexes
//!
//! Items carry opaque ids that nobody wants to type. Every listing therefore
//! numbers its rows `1..=n` in the order they are shown, and later commands
//! (`view`, `copy`) accept those numbers.
//!
//! Indexes are only meaningful relative to the listing that produced them:
//! the same query over the same snapshot yields the same numbering, while a
//! different search, tag selection or sort yields a different one.

use crate::model::Item;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An item as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    #[serde(flatten)]
    pub item: Item,
}

/// Numbers already-ordered items from 1.
pub fn index_items(items: Vec<Item>) -> Vec<DisplayItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(pos, item)| DisplayItem {
            index: pos + 1,
            item,
        })
        .collect()
}

/// User input naming one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// 1-based position in the current listing
    Index(usize),
    Id(String),
}

impl ItemSelector {
    /// Finds the selected entry in `listing`.
    ///
    /// A numeric selector that is out of range is retried as an id, so an
    /// item whose id happens to be all digits stays reachable.
    pub fn find<'a>(&self, listing: &'a [DisplayItem]) -> Option<&'a DisplayItem> {
        match self {
            ItemSelector::Index(n) => listing
                .iter()
                .find(|dp| dp.index == *n)
                .or_else(|| {
                    let id = n.to_string();
                    listing.iter().find(|dp| dp.item.id == id)
                }),
            ItemSelector::Id(id) => listing.iter().find(|dp| &dp.item.id == id),
        }
    }
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(n) => write!(f, "{}", n),
            ItemSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty item selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(ItemSelector::Index(n)),
            _ => Ok(ItemSelector::Id(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<DisplayItem> {
        let mut a = Item::new("A", "a");
        a.id = "alpha".to_string();
        let mut b = Item::new("B", "b");
        b.id = "42".to_string();
        index_items(vec![a, b])
    }

    #[test]
    fn indexes_start_at_one_in_given_order() {
        let listed = listing();
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].item.title, "A");
        assert_eq!(listed[1].index, 2);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("3".parse::<ItemSelector>(), Ok(ItemSelector::Index(3)));
        assert_eq!(
            " alpha ".parse::<ItemSelector>(),
            Ok(ItemSelector::Id("alpha".to_string()))
        );
        assert_eq!(
            "0".parse::<ItemSelector>(),
            Ok(ItemSelector::Id("0".to_string()))
        );
        assert!("  ".parse::<ItemSelector>().is_err());
    }

    #[test]
    fn finds_by_index_then_id() {
        let listed = listing();

        let by_index = ItemSelector::Index(1).find(&listed).unwrap();
        assert_eq!(by_index.item.id, "alpha");

        let by_id = ItemSelector::Id("alpha".to_string()).find(&listed).unwrap();
        assert_eq!(by_id.index, 1);

        // out of range as an index, but a real id
        let numeric_id = ItemSelector::Index(42).find(&listed).unwrap();
        assert_eq!(numeric_id.index, 2);

        assert!(ItemSelector::Index(7).find(&listed).is_none());
    }
}
