use crate::catalog::{assign_tag_color, available_tags};
use crate::commands::{CmdResult, TagSummary};
use crate::error::Result;
use crate::store::CatalogSource;

pub fn run<S: CatalogSource>(source: &S) -> Result<CmdResult> {
    let items = source.list_items()?;

    let tags = available_tags(&items)
        .into_iter()
        .map(|(name, count)| TagSummary {
            color: assign_tag_color(&name),
            name,
            count,
        })
        .collect();

    Ok(CmdResult::default().with_tags(tags))
}
