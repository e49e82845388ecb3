use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::SnipcatConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or updates the persisted defaults.
///
/// A rejected value is reported as an error message and nothing is written.
pub fn run(paths: &CatalogPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    let mut config = SnipcatConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => result = result.with_config(config),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(dir)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                result = result.with_config(config);
            }
            Err(reason) => result.add_message(CmdMessage::error(reason)),
        },
    }

    Ok(result)
}
