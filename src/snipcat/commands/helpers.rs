use crate::catalog::build_tree;
use crate::error::{CatalogError, Result};
use crate::index::{DisplayItem, ItemSelector};
use crate::model::Category;

/// Shortens `text` to `max` characters followed by `...`.
///
/// Text that already fits is returned unchanged.
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Category ids a listing scoped to `category_id` should include.
///
/// Returns `None` when no category has that id. With `deep`, descendants
/// are included, following the same parent links the tree view shows.
pub fn category_scope(categories: &[Category], category_id: &str, deep: bool) -> Option<Vec<String>> {
    if !deep {
        return categories
            .iter()
            .any(|c| c.id == category_id)
            .then(|| vec![category_id.to_string()]);
    }

    build_tree(categories)
        .iter()
        .find_map(|root| root.find(category_id))
        .map(|node| node.subtree_ids().into_iter().map(str::to_string).collect())
}

/// Resolves every selector against `listing`, in selector order.
pub fn items_by_selectors(
    listing: &[DisplayItem],
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    selectors
        .iter()
        .map(|selector| {
            selector
                .find(listing)
                .cloned()
                .ok_or_else(|| CatalogError::ItemNotFound(selector.to_string()))
        })
        .collect()
}
