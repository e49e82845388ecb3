use super::CatalogSource;
use crate::error::{CatalogError, Result};
use crate::model::{Category, Item};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk shape of a catalog export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, alias = "modules")]
    pub categories: Vec<Category>,
    #[serde(default, alias = "scripts")]
    pub items: Vec<Item>,
}

/// Reads a catalog export from a JSON file.
///
/// The file is read once, on first access; both lists then come from the
/// same snapshot for the lifetime of the source.
pub struct JsonFileSource {
    path: PathBuf,
    document: OnceCell<CatalogDocument>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: OnceCell::new(),
        }
    }

    fn document(&self) -> Result<&CatalogDocument> {
        self.document.get_or_try_init(|| {
            if !self.path.exists() {
                return Err(CatalogError::Source(format!(
                    "Catalog file not found: {}",
                    self.path.display()
                )));
            }
            let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
            let document: CatalogDocument =
                serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
            log::debug!(
                "event=catalog_load path={} categories={} items={}",
                self.path.display(),
                document.categories.len(),
                document.items.len()
            );
            Ok(document)
        })
    }
}

impl CatalogSource for JsonFileSource {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.document()?.categories.clone())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.document()?.items.clone())
    }
}
