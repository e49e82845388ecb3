use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::store::CatalogSource;

use super::helpers::items_by_selectors;
use super::list::ListQuery;

/// Full items for `selectors`, resolved against the listing `query` produces.
pub fn run<S: CatalogSource>(
    source: &S,
    query: &ListQuery,
    selectors: &[ItemSelector],
) -> Result<CmdResult> {
    let listing = list::run(source, query)?;
    let items = items_by_selectors(&listing.listed_items, selectors)?;

    let mut result = CmdResult::default().with_listed_items(items);
    result.messages = listing.messages;
    Ok(result)
}
