//! # API Facade
//!
//! A thin layer over `commands/*.rs` and the single entry point for every
//! catalog operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (selector strings become [`ItemSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no filtering, sorting or formatting of its own, and never writes
//! to stdout or stderr.
//!
//! `CatalogApi<S: CatalogSource>` is generic over where snapshots come from:
//! `JsonFileSource` in the binary, `InMemorySource` in tests.

use crate::commands;
use crate::error::{CatalogError, Result};
use crate::index::ItemSelector;
use crate::store::CatalogSource;

pub struct CatalogApi<S: CatalogSource> {
    source: S,
    paths: commands::CatalogPaths,
}

impl<S: CatalogSource> CatalogApi<S> {
    pub fn new(source: S, paths: commands::CatalogPaths) -> Self {
        Self { source, paths }
    }

    pub fn list_items(&self, query: &ListQuery) -> Result<commands::CmdResult> {
        commands::list::run(&self.source, query)
    }

    pub fn category_tree(&self) -> Result<commands::CmdResult> {
        commands::tree::run(&self.source)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.source)
    }

    pub fn view_items<I: AsRef<str>>(
        &self,
        query: &ListQuery,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.source, query, &selectors)
    }

    pub fn copy_item(
        &self,
        query: &ListQuery,
        selector: &str,
        with_title: bool,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::copy::run(&self.source, query, &selector, with_title)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

fn parse_selector(input: &str) -> Result<ItemSelector> {
    input.parse().map_err(CatalogError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    if inputs.is_empty() {
        return Err(CatalogError::Api("No items selected".to_string()));
    }
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListQuery;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel, TagSummary};
