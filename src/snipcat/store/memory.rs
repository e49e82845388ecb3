use super::CatalogSource;
use crate::error::Result;
use crate::model::{Category, Item};

/// In-memory snapshot for testing and development.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl CatalogSource for InMemorySource {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    pub fn category(id: &str, name: &str, parent: Option<&str>, sort_order: i64) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            parent_id: parent.map(str::to_string),
            sort_order,
            created_at: epoch(),
        }
    }

    pub fn item(id: &str, title: &str, category: Option<&str>, tags: &[&str]) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("Content of {}", title),
            category_id: category.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            copy_count: 0,
            created_at: epoch(),
        }
    }

    /// A small support-desk catalog, shown in `sort_order` with direct item
    /// counts (input order differs on purpose):
    ///
    /// ```text
    /// sales (0)            support (1)
    /// ├── greetings (2)    └── refunds (1)
    /// └── upsell (2)
    /// ```
    ///
    /// Item `created_at` values step forward one minute per item in list
    /// order; `copy_count` values are distinct.
    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
            }
        }

        pub fn support_desk() -> Self {
            let categories = vec![
                category("support", "Support", None, 1),
                category("upsell", "Upsell", Some("sales"), 2),
                category("sales", "Sales", None, 0),
                category("refunds", "Refunds", Some("support"), 0),
                category("greetings", "Greetings", Some("sales"), 1),
            ];

            let specs: [(&str, &str, &str, &[&str], u64); 6] = [
                ("i1", "2. Opening line", "greetings", &["vip", "phone"], 12),
                ("i2", "1. Warm welcome", "greetings", &["phone"], 30),
                ("i3", "Bundle offer", "upsell", &["vip"], 7),
                ("i4", "第3条 Refund window", "refunds", &["policy"], 0),
                ("i5", "(4) Premium plan", "upsell", &["vip", "email"], 21),
                ("i6", "Follow-up email", "support", &["email"], 3),
            ];

            let items = specs
                .iter()
                .enumerate()
                .map(|(n, (id, title, category, tags, copies))| {
                    let mut it = item(id, title, Some(*category), tags);
                    it.copy_count = *copies;
                    it.created_at = epoch() + Duration::minutes(n as i64);
                    it
                })
                .collect();

            Self {
                source: InMemorySource::new()
                    .with_categories(categories)
                    .with_items(items),
            }
        }

        pub fn with_item(mut self, item: Item) -> Self {
            self.source.push_item(item);
            self
        }

        pub fn with_category(mut self, category: Category) -> Self {
            self.source.push_category(category);
            self
        }
    }
}
