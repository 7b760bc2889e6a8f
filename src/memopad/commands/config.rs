use crate::commands::{CmdMessage, CmdResult};
use crate::config::MemopadConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MemopadConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in MemopadConfig::KEYS {
                if let Some(value) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListOrder;

    #[test]
    fn set_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("list-order".into(), "stored".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("list-order".into())).unwrap();
        assert_eq!(result.config.unwrap().list_order, ListOrder::Stored);
        assert_eq!(result.messages[0].content, "list-order = stored");
    }

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), MemopadConfig::KEYS.len());
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(
            dir.path(),
            ConfigAction::Set("list-order".into(), "sideways".into())
        )
        .is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
