use crate::catalog::{SortDirection, SortKey};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_WIDTH: usize = 120;

pub const CONFIG_KEYS: [&str; 4] = ["sort-by", "sort-order", "preview-width", "catalog"];

/// Configuration for snipcat, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipcatConfig {
    /// Default listing key
    #[serde(default)]
    pub sort_by: SortKey,

    /// Default listing direction
    #[serde(default)]
    pub sort_order: SortDirection,

    /// How many characters of content the listing previews
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,

    /// Catalog export to read when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for SnipcatConfig {
    fn default() -> Self {
        Self {
            sort_by: SortKey::default(),
            sort_order: SortDirection::default(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
            catalog: None,
        }
    }
}

impl SnipcatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: SnipcatConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        log::debug!("event=config_load path={}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(&config_path, content).map_err(CatalogError::Io)?;
        log::debug!("event=config_save path={}", config_path.display());
        Ok(())
    }

    /// Current value of `key`, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort-by" => Some(self.sort_by.to_string()),
            "sort-order" => Some(self.sort_order.to_string()),
            "preview-width" => Some(self.preview_width.to_string()),
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Validates and stores `value` under `key`.
    ///
    /// An empty value for `catalog` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sort-by" => self.sort_by = value.parse()?,
            "sort-order" => self.sort_order = value.parse()?,
            "preview-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("preview-width must be a positive number, got {}", value))?;
                if width == 0 {
                    return Err("preview-width must be a positive number, got 0".to_string());
                }
                self.preview_width = width;
            }
            "catalog" => {
                let trimmed = value.trim();
                self.catalog = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
