use super::styles::{tag_style, CATEGORY_ID};
use chrono::{DateTime, Utc};
use colored::Colorize;
use snipcat::api::{CmdMessage, MessageLevel, TagSummary};
use snipcat::commands::helpers::truncate_text;
use snipcat::config::{SnipcatConfig, CONFIG_KEYS};
use snipcat::index::DisplayItem;
use snipcat::model::CategoryNode;
use std::collections::BTreeMap;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PREVIEW_INDENT: &str = "      ";
const TREE_INDENT: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_item_list(items: &[DisplayItem], preview_width: usize) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut out = String::new();
    for dp in items {
        let idx_str = format!("{:>4}. ", dp.index);
        let tags_plain = dp
            .item
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        let copies = format!("{}×", dp.item.copy_count);
        let time_ago = format_time_ago(dp.item.created_at);

        let right_plain_width = tags_plain.width() + 2 + copies.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(idx_str.width() + right_plain_width + 2);
        let title = truncate_to_width(&dp.item.title, available);
        let padding = available.saturating_sub(title.width()) + 2;

        let tags_colored = dp
            .item
            .tags
            .iter()
            .map(|t| tag_style(t).apply_to(format!("#{}", t)).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        out.push_str(&format!(
            "{}{}{}{}  {}{}\n",
            idx_str.yellow(),
            title.bold(),
            " ".repeat(padding),
            tags_colored,
            copies.dimmed(),
            time_ago.dimmed()
        ));

        let preview = one_line(&truncate_text(&dp.item.content, preview_width));
        if !preview.is_empty() {
            let preview = truncate_to_width(&preview, LINE_WIDTH - PREVIEW_INDENT.len());
            out.push_str(&format!("{}{}\n", PREVIEW_INDENT, preview.dimmed()));
        }
    }
    out
}

pub(super) fn render_full_items(items: &[DisplayItem]) -> String {
    let mut out = String::new();
    for (i, dp) in items.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            dp.index.to_string().yellow(),
            dp.item.title.bold()
        ));

        let mut meta = vec![format!("id {}", dp.item.id)];
        if let Some(category_id) = &dp.item.category_id {
            meta.push(format!("category {}", category_id));
        }
        meta.push(format!("copied {}×", dp.item.copy_count));
        meta.push(format_time_ago(dp.item.created_at).trim().to_string());
        out.push_str(&format!("{}\n", meta.join(" · ").dimmed()));

        if !dp.item.tags.is_empty() {
            let chips = dp
                .item
                .tags
                .iter()
                .map(|t| tag_style(t).apply_to(format!("#{}", t)).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("{}\n", chips));
        }

        out.push_str("--------------------------------\n");
        out.push_str(&dp.item.content);
        out.push('\n');
    }
    out
}

pub(super) fn render_tree(roots: &[CategoryNode], counts: &BTreeMap<String, usize>) -> String {
    if roots.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut out = String::new();
    let mut pending: Vec<(&CategoryNode, usize)> =
        roots.iter().rev().map(|root| (root, 0)).collect();
    while let Some((node, depth)) = pending.pop() {
        let count = counts.get(node.id()).copied().unwrap_or(0);
        out.push_str(&format!(
            "{}{} {} {}\n",
            TREE_INDENT.repeat(depth),
            node.category.name.bold(),
            CATEGORY_ID.apply_to(format!("[{}]", node.id())),
            format!("({})", count).dimmed()
        ));
        pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

pub(super) fn render_tags(tags: &[TagSummary]) -> String {
    if tags.is_empty() {
        return "No tags found.\n".to_string();
    }

    let name_width = tags
        .iter()
        .map(|t| t.name.width() + 1)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for tag in tags {
        let chip = format!("#{}", tag.name);
        let padding = name_width.saturating_sub(chip.width());
        out.push_str(&format!(
            "{}{}  {}\n",
            tag_style(&tag.name).apply_to(chip),
            " ".repeat(padding),
            tag.count.to_string().dimmed()
        ));
    }
    out
}

pub(super) fn render_config(config: &SnipcatConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        out.push_str(&format!("{} = {}\n", key, value));
    }
    out
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipcat::index::index_items;
    use snipcat::model::{Category, Item};

    fn plain() {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    fn item(title: &str, content: &str, tags: &[&str]) -> Item {
        Item::new(title, content).with_tags(tags.iter().copied())
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("欢迎光临", 5), "欢迎…");
    }

    #[test]
    fn list_shows_index_title_tags_and_preview() {
        plain();
        let items = index_items(vec![item("Greeting", "Hello\nthere", &["vip"])]);

        let out = render_item_list(&items, 120);

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("   1. Greeting"));
        assert!(lines[0].contains("#vip"));
        assert!(lines[0].contains("0×"));
        assert_eq!(lines[1].trim(), "Hello there");
    }

    #[test]
    fn list_preview_is_truncated() {
        plain();
        let items = index_items(vec![item("T", "abcdefghij", &[])]);

        let out = render_item_list(&items, 4);

        assert!(out.contains("abcd..."));
        assert!(!out.contains("abcde"));
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_item_list(&[], 120), "No items found.\n");
    }

    #[test]
    fn full_view_includes_content() {
        plain();
        let items = index_items(vec![
            item("One", "first body", &["a"]),
            item("Two", "second body", &[]),
        ]);

        let out = render_full_items(&items);

        assert!(out.contains("1 One\n"));
        assert!(out.contains("first body\n"));
        assert!(out.contains("#a\n"));
        assert!(out.contains("================================"));
        assert!(out.contains("2 Two\n"));
    }

    #[test]
    fn tree_indents_two_spaces_per_level() {
        plain();
        let mut root = CategoryNode::new(Category::new("Sales"));
        root.category.id = "sales".to_string();
        let mut child = CategoryNode::new(Category::new("Greetings"));
        child.category.id = "greetings".to_string();
        let mut grandchild = CategoryNode::new(Category::new("Morning"));
        grandchild.category.id = "morning".to_string();
        child.children.push(grandchild);
        root.children.push(child);
        let mut counts = BTreeMap::new();
        counts.insert("greetings".to_string(), 2);

        let out = render_tree(&[root], &counts);

        assert_eq!(
            out,
            "Sales [sales] (0)\n  Greetings [greetings] (2)\n    Morning [morning] (0)\n"
        );
    }

    #[test]
    fn tree_renders_deep_chain_and_later_roots() {
        plain();
        let mut categories: Vec<Category> = (0..3_000)
            .map(|level| {
                let mut category = Category::new(format!("Level {}", level));
                category.id = format!("c{}", level);
                category.parent_id = (level > 0).then(|| format!("c{}", level - 1));
                category
            })
            .collect();
        let mut last = Category::new("Last");
        last.id = "last".to_string();
        categories.push(last);

        let out = render_tree(&snipcat::catalog::build_tree(&categories), &BTreeMap::new());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3_001);
        assert_eq!(lines[1], "  Level 1 [c1] (0)");
        assert_eq!(
            lines[2_999],
            format!("{}Level 2999 [c2999] (0)", "  ".repeat(2_999))
        );
        assert_eq!(lines[3_000], "Last [last] (0)");
    }

    #[test]
    fn tags_are_aligned() {
        plain();
        let tags = vec![
            TagSummary {
                name: "vip".to_string(),
                count: 3,
                color: 5,
            },
            TagSummary {
                name: "policy".to_string(),
                count: 1,
                color: 0,
            },
        ];

        let out = render_tags(&tags);

        assert_eq!(out, "#vip     3\n#policy  1\n");
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&SnipcatConfig::default());

        assert_eq!(
            out,
            "sort-by = created_at\nsort-order = desc\npreview-width = 120\ncatalog = \n"
        );
    }
}
