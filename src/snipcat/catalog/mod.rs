//! # Catalog Engine
//!
//! The four pure operations every listing is built from:
//!
//! - [`build_tree`]: flat categories to a forest of [`CategoryNode`]s
//! - [`filter_items`]: search term and tag selection
//! - [`sort_items`]: stable ordering by [`SortKey`] and [`SortDirection`]
//! - [`assign_tag_color`]: tag text to a palette slot
//!
//! None of them perform I/O, keep state, or mutate their inputs. They are
//! independent: callers compose them (see `commands::list`).
//!
//! [`CategoryNode`]: crate::model::CategoryNode

pub mod color;
pub mod filter;
pub mod sort;
pub mod tree;

pub use color::{assign_tag_color, PALETTE_SIZE};
pub use filter::{available_tags, filter_by_category, filter_items};
pub use sort::{extract_title_number, sort_items, SortDirection, SortKey, NO_TITLE_NUMBER};
pub use tree::build_tree;
