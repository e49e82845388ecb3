use crate::catalog::{filter_by_category, filter_items, sort_items, SortDirection, SortKey};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::SnipcatConfig;
use crate::error::Result;
use crate::index::index_items;
use crate::store::CatalogSource;

use super::helpers::category_scope;

/// Everything that shapes a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub category_id: Option<String>,
    /// Also include items filed under descendants of `category_id`
    pub deep: bool,
    pub search_term: String,
    pub tags: Vec<String>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl ListQuery {
    /// A query that lists everything using the configured default order.
    pub fn from_config(config: &SnipcatConfig) -> Self {
        Self {
            sort_key: config.sort_by,
            direction: config.sort_order,
            ..Self::default()
        }
    }
}

pub fn run<S: CatalogSource>(source: &S, query: &ListQuery) -> Result<CmdResult> {
    let items = source.list_items()?;
    let mut result = CmdResult::default();

    let scoped = match &query.category_id {
        None => items,
        Some(category_id) => {
            let categories = source.list_categories()?;
            match category_scope(&categories, category_id, query.deep) {
                Some(ids) => {
                    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                    filter_by_category(&items, &ids)
                }
                None => {
                    result.add_message(CmdMessage::warning(format!(
                        "No category with id {}",
                        category_id
                    )));
                    return Ok(result);
                }
            }
        }
    };

    let filtered = filter_items(&scoped, &query.search_term, &query.tags);
    let sorted = sort_items(&filtered, query.sort_key, query.direction);
    log::debug!(
        "event=list scoped={} matched={} sort={} order={}",
        scoped.len(),
        sorted.len(),
        query.sort_key,
        query.direction
    );

    Ok(result.with_listed_items(index_items(sorted)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::SourceFixture;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result
            .listed_items
            .iter()
            .map(|dp| dp.item.id.as_str())
            .collect()
    }

    #[test]
    fn lists_everything_newest_first_by_default() {
        let fixture = SourceFixture::support_desk();

        let result = run(&fixture.source, &ListQuery::default()).unwrap();

        assert_eq!(ids(&result), vec!["i6", "i5", "i4", "i3", "i2", "i1"]);
        assert_eq!(result.listed_items[0].index, 1);
        assert_eq!(result.listed_items[5].index, 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn scopes_to_one_category() {
        let fixture = SourceFixture::support_desk();
        let query = ListQuery {
            category_id: Some("greetings".to_string()),
            sort_key: SortKey::TitleNumber,
            direction: SortDirection::Ascending,
            ..ListQuery::default()
        };

        let result = run(&fixture.source, &query).unwrap();

        assert_eq!(ids(&result), vec!["i2", "i1"]);
    }

    #[test]
    fn shallow_scope_skips_child_categories() {
        let fixture = SourceFixture::support_desk();
        let query = ListQuery {
            category_id: Some("sales".to_string()),
            ..ListQuery::default()
        };

        let result = run(&fixture.source, &query).unwrap();

        assert!(result.listed_items.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn deep_scope_includes_descendants() {
        let fixture = SourceFixture::support_desk();
        let query = ListQuery {
            category_id: Some("sales".to_string()),
            deep: true,
            sort_key: SortKey::CopyCount,
            ..ListQuery::default()
        };

        let result = run(&fixture.source, &query).unwrap();

        assert_eq!(ids(&result), vec!["i2", "i5", "i1", "i3"]);
    }

    #[test]
    fn search_and_tags_combine() {
        let fixture = SourceFixture::support_desk();
        let query = ListQuery {
            search_term: "PLAN".to_string(),
            tags: vec!["email".to_string(), "phone".to_string()],
            ..ListQuery::default()
        };

        let result = run(&fixture.source, &query).unwrap();

        assert_eq!(ids(&result), vec!["i5"]);
    }

    #[test]
    fn unknown_category_warns_and_lists_nothing() {
        let fixture = SourceFixture::support_desk();
        let query = ListQuery {
            category_id: Some("nope".to_string()),
            ..ListQuery::default()
        };

        let result = run(&fixture.source, &query).unwrap();

        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("nope"));
    }

    #[test]
    fn query_from_config_uses_configured_order() {
        let mut config = SnipcatConfig::default();
        config.set("sort-by", "copy_count").unwrap();
        config.set("sort-order", "asc").unwrap();

        let query = ListQuery::from_config(&config);

        assert_eq!(query.sort_key, SortKey::CopyCount);
        assert_eq!(query.direction, SortDirection::Ascending);
        assert_eq!(query.category_id, None);
    }
}
