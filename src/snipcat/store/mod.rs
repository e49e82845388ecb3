//! # Snapshot Sources
//!
//! The catalog engine never loads data itself. Callers hand it snapshots
//! obtained through a [`CatalogSource`].
//!
//! ## Implementations
//!
//! - [`json::JsonFileSource`]: reads one JSON document holding both lists
//!   (`{"categories": [...], "items": [...]}`), as exported from the hosted
//!   store.
//! - [`memory::InMemorySource`]: plain vectors for tests.
//!
//! Sources are read-only. Creating, editing and deleting categories or items,
//! and recording copy counts, belong to whatever system owns the data.

use crate::error::Result;
use crate::model::{Category, Item};

pub mod json;
pub mod memory;

/// Supplies immutable snapshots of the catalog.
pub trait CatalogSource {
    /// All categories, in the order the owner returns them
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// All items, in the order the owner returns them
    fn list_items(&self) -> Result<Vec<Item>>;
}
