use crate::model::Item;
use std::collections::{BTreeMap, HashSet};

/// Returns the items matching a free-text term and a tag selection.
///
/// An item matches when the term is empty or found (case-insensitively) in
/// its title or content, AND the selection is empty or shares at least one
/// tag with the item. Adding tags to the selection can only widen the result.
/// Relative input order is preserved.
pub fn filter_items<T: AsRef<str>>(
    items: &[Item],
    search_term: &str,
    selected_tags: &[T],
) -> Vec<Item> {
    let term_lower = search_term.to_lowercase();

    items
        .iter()
        .filter(|item| matches_search(item, &term_lower) && matches_tags(item, selected_tags))
        .cloned()
        .collect()
}

fn matches_search(item: &Item, term_lower: &str) -> bool {
    term_lower.is_empty()
        || item.title.to_lowercase().contains(term_lower)
        || item.content.to_lowercase().contains(term_lower)
}

fn matches_tags<T: AsRef<str>>(item: &Item, selected_tags: &[T]) -> bool {
    selected_tags.is_empty() || selected_tags.iter().any(|tag| item.has_tag(tag.as_ref()))
}

/// Keeps items whose `category_id` is one of `category_ids`.
///
/// Uncategorized items never match.
pub fn filter_by_category(items: &[Item], category_ids: &[&str]) -> Vec<Item> {
    let wanted: HashSet<&str> = category_ids.iter().copied().collect();
    items
        .iter()
        .filter(|item| {
            item.category_id
                .as_deref()
                .is_some_and(|id| wanted.contains(id))
        })
        .cloned()
        .collect()
}

/// Distinct tags across `items`, ascending, with how many items carry each.
///
/// A tag repeated on a single item counts that item once.
pub fn available_tags(items: &[Item]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        let distinct: HashSet<&str> = item.tags.iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, content: &str, tags: &[&str]) -> Item {
        let mut item = Item::new(title, content).with_tags(tags.iter().copied());
        item.id = id.to_string();
        item
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    const NO_TAGS: &[&str] = &[];

    #[test]
    fn empty_query_is_identity() {
        let items = vec![
            item("b", "Beta", "", &[]),
            item("a", "Alpha", "", &["x"]),
            item("c", "Gamma", "", &[]),
        ];

        let result = filter_items(&items, "", NO_TAGS);

        assert_eq!(result, items);
    }

    #[test]
    fn search_matches_title_or_content_ignoring_case() {
        let items = vec![
            item("1", "Refund Policy", "", &[]),
            item("2", "Greeting", "Ask about the REFUND first", &[]),
            item("3", "Farewell", "Bye", &[]),
        ];

        let result = filter_items(&items, "refund", NO_TAGS);

        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn search_handles_non_ascii_text() {
        let items = vec![item("1", "3. 你好", "欢迎光临", &[]), item("2", "Hi", "", &[])];

        assert_eq!(ids(&filter_items(&items, "欢迎", NO_TAGS)), vec!["1"]);
    }

    #[test]
    fn tag_selection_is_a_union() {
        let items = vec![
            item("i1", "", "", &["x"]),
            item("i2", "", "", &["z"]),
            item("i3", "", "", &["y", "z"]),
        ];

        let result = filter_items(&items, "", &["x", "y"]);

        assert_eq!(ids(&result), vec!["i1", "i3"]);
    }

    #[test]
    fn more_tags_never_narrow() {
        let items = vec![
            item("i1", "", "", &["x"]),
            item("i2", "", "", &["z"]),
            item("i3", "", "", &["y"]),
        ];

        let narrow = filter_items(&items, "", &["x"]);
        let wide = filter_items(&items, "", &["x", "z"]);

        assert!(narrow.iter().all(|i| wide.contains(i)));
        assert_eq!(ids(&wide), vec!["i1", "i2"]);
    }

    #[test]
    fn search_and_tags_must_both_hold() {
        let items = vec![
            item("1", "vip greeting", "", &["vip"]),
            item("2", "vip greeting", "", &["basic"]),
            item("3", "farewell", "", &["vip"]),
        ];

        let result = filter_items(&items, "greeting", &["vip".to_string()]);

        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn tag_match_is_exact() {
        let items = vec![item("1", "", "", &["VIP"]), item("2", "", "", &["vip-plus"])];

        assert!(filter_items(&items, "", &["vip"]).is_empty());
    }

    #[test]
    fn filters_by_category_ids() {
        let items = vec![
            item("1", "", "", &[]).in_category("sales"),
            item("2", "", "", &[]),
            item("3", "", "", &[]).in_category("support"),
            item("4", "", "", &[]).in_category("sales"),
        ];

        let result = filter_by_category(&items, &["sales"]);

        assert_eq!(ids(&result), vec!["1", "4"]);
    }

    #[test]
    fn available_tags_are_sorted_and_counted() {
        let items = vec![
            item("1", "", "", &["zeta", "alpha"]),
            item("2", "", "", &["alpha", "alpha"]),
            item("3", "", "", &[]),
        ];

        let tags = available_tags(&items);

        assert_eq!(
            tags,
            vec![("alpha".to_string(), 2), ("zeta".to_string(), 1)]
        );
    }
}
