use crate::clipboard::format_for_clipboard;
use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::index::ItemSelector;
use crate::store::CatalogSource;

use super::list::ListQuery;

/// Prepares the clipboard payload for one item.
///
/// The payload is the item's content, or its title, a blank line, then the
/// content when `with_title` is set. Copy counts are owned by the hosted
/// store; nothing is recorded here.
pub fn run<S: CatalogSource>(
    source: &S,
    query: &ListQuery,
    selector: &ItemSelector,
    with_title: bool,
) -> Result<CmdResult> {
    let listing = list::run(source, query)?;
    let dp = selector
        .find(&listing.listed_items)
        .cloned()
        .ok_or_else(|| CatalogError::ItemNotFound(selector.to_string()))?;

    let payload = if with_title {
        format_for_clipboard(&dp.item.title, &dp.item.content)
    } else {
        dp.item.content.clone()
    };
    log::info!(
        "event=copy item={} chars={}",
        dp.item.id,
        payload.chars().count()
    );

    let mut result = CmdResult::default().with_clipboard_text(payload);
    result.add_message(CmdMessage::success(format!("Copied \"{}\"", dp.item.title)));
    Ok(result.with_listed_items(vec![dp]))
}
