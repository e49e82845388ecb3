use crate::config::SnipcatConfig;
use crate::index::DisplayItem;
use crate::model::CategoryNode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod config;
pub mod copy;
pub mod helpers;
pub mod list;
pub mod tags;
pub mod tree;
pub mod view;

/// Where the binary keeps its settings and finds its snapshot.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub config_dir: PathBuf,
    pub catalog: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A tag present in the snapshot, with its palette slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub name: String,
    /// Number of items carrying the tag
    pub count: usize,
    pub color: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<DisplayItem>,
    pub category_tree: Vec<CategoryNode>,
    /// Items filed directly under each category id
    pub category_counts: BTreeMap<String, usize>,
    pub tags: Vec<TagSummary>,
    pub clipboard_text: Option<String>,
    pub config: Option<SnipcatConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_category_tree(
        mut self,
        tree: Vec<CategoryNode>,
        counts: BTreeMap<String, usize>,
    ) -> Self {
        self.category_tree = tree;
        self.category_counts = counts;
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagSummary>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_clipboard_text(mut self, text: String) -> Self {
        self.clipboard_text = Some(text);
        self
    }

    pub fn with_config(mut self, config: SnipcatConfig) -> Self {
        self.config = Some(config);
        self
    }
}
