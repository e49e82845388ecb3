use crate::catalog::build_tree;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogSource;
use std::collections::BTreeMap;

/// Builds the category forest, siblings ordered by `sort_order`, along with
/// the number of items filed directly under each category.
pub fn run<S: CatalogSource>(source: &S) -> Result<CmdResult> {
    let categories = source.list_categories()?;
    let items = source.list_items()?;

    let mut roots = build_tree(&categories);
    roots.sort_by_key(|root| root.category.sort_order);
    for root in &mut roots {
        root.sort_children_by_order();
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for category_id in items.iter().filter_map(|item| item.category_id.as_ref()) {
        *counts.entry(category_id.clone()).or_default() += 1;
    }

    log::debug!(
        "event=tree categories={} roots={}",
        categories.len(),
        roots.len()
    );
    Ok(CmdResult::default().with_category_tree(roots, counts))
}
