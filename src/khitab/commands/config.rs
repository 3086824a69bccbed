use crate::commands::{CmdMessage, CmdResult, KhitabPaths};
use crate::config::KhitabConfig;
use crate::error::{KhitabError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &KhitabPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = KhitabConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            return Ok(result.with_config(config));
        }
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| KhitabError::Api(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result)
}
