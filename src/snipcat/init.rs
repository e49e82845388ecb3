use crate::api::{CatalogApi, CatalogPaths};
use crate::config::SnipcatConfig;
use crate::error::{CatalogError, Result};
use crate::store::json::JsonFileSource;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "SNIPCAT_HOME";
pub const CATALOG_ENV: &str = "SNIPCAT_CATALOG";
const DEFAULT_CATALOG_FILENAME: &str = "catalog.json";

pub struct CatalogContext {
    pub api: CatalogApi<JsonFileSource>,
    pub config: SnipcatConfig,
}

/// Settings directory: `$SNIPCAT_HOME`, else the platform config dir.
pub fn config_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home);
    }
    ProjectDirs::from("com", "snipcat", "snipcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CatalogError::Config(format!(
                "Could not determine a config directory; set {}",
                HOME_ENV
            ))
        })
}

/// Picks the snapshot file: the command-line flag, then `$SNIPCAT_CATALOG`,
/// then the `catalog` config key, then `catalog.json` in the config dir.
pub fn resolve_catalog_path(
    flag: Option<PathBuf>,
    env_value: Option<PathBuf>,
    config: &SnipcatConfig,
    config_dir: &Path,
) -> PathBuf {
    flag.or(env_value)
        .or_else(|| config.catalog.clone())
        .unwrap_or_else(|| config_dir.join(DEFAULT_CATALOG_FILENAME))
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn initialize(catalog_flag: Option<PathBuf>) -> Result<CatalogContext> {
    let config_dir = config_dir(env_path(HOME_ENV))?;
    let config = SnipcatConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!("event=config_unreadable dir={} error={}", config_dir.display(), e);
        SnipcatConfig::default()
    });

    let catalog = resolve_catalog_path(catalog_flag, env_path(CATALOG_ENV), &config, &config_dir);
    log::info!(
        "event=init config_dir={} catalog={}",
        config_dir.display(),
        catalog.display()
    );

    let source = JsonFileSource::new(&catalog);
    let paths = CatalogPaths {
        config_dir,
        catalog,
    };
    let api = CatalogApi::new(source, paths);

    Ok(CatalogContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_override_wins() {
        let dir = config_dir(Some(PathBuf::from("/tmp/snipcat-home"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/snipcat-home"));
    }

    #[test]
    fn catalog_precedence() {
        let dir = Path::new("/cfg");
        let mut config = SnipcatConfig::default();

        assert_eq!(
            resolve_catalog_path(None, None, &config, dir),
            PathBuf::from("/cfg/catalog.json")
        );

        config.catalog = Some(PathBuf::from("/from/config.json"));
        assert_eq!(
            resolve_catalog_path(None, None, &config, dir),
            PathBuf::from("/from/config.json")
        );

        assert_eq!(
            resolve_catalog_path(None, Some(PathBuf::from("/from/env.json")), &config, dir),
            PathBuf::from("/from/env.json")
        );

        assert_eq!(
            resolve_catalog_path(
                Some(PathBuf::from("/from/flag.json")),
                Some(PathBuf::from("/from/env.json")),
                &config,
                dir
            ),
            PathBuf::from("/from/flag.json")
        );
    }
}
