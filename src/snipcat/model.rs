use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A named node in the category hierarchy.
///
/// `parent_id` is a weak reference by id. It may point at a category that is
/// not part of the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            parent_id: None,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// A reusable text snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    // Older exports call categories "modules"
    #[serde(default, alias = "module_id")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copy_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            category_id: None,
            tags: Vec::new(),
            copy_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A category together with the categories that name it as parent.
///
/// Built fresh by [`crate::catalog::build_tree`]; never persisted. Chains can
/// be arbitrarily deep, so every walk over a node uses an explicit stack.
#[derive(Debug)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.category.id
    }

    /// Orders children at every level by ascending `sort_order`.
    ///
    /// The sort is stable: siblings sharing a rank keep their current order.
    pub fn sort_children_by_order(&mut self) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            node.children.sort_by_key(|child| child.category.sort_order);
            pending.extend(node.children.iter_mut());
        }
    }

    /// Ids of this node and all of its descendants, pre-order.
    pub fn subtree_ids(&self) -> Vec<&str> {
        self.preorder().map(CategoryNode::id).collect()
    }

    pub fn find(&self, id: &str) -> Option<&CategoryNode> {
        self.preorder().find(|node| node.id() == id)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    fn preorder(&self) -> impl Iterator<Item = &CategoryNode> + '_ {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Drop for CategoryNode {
    fn drop(&mut self) {
        // Flatten the subtree so each node drops with no children left
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

// Snapshots exported from the hosted store carry explicit nulls
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
