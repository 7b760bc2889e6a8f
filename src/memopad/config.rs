use crate::error::{MemoError, Result};
use crate::store::backend::validate_storage_name;
use crate::store::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How `list` orders memos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Most recently updated first
    #[default]
    Updated,
    /// The order memos were added in
    Stored,
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListOrder::Updated => write!(f, "updated"),
            ListOrder::Stored => write!(f, "stored"),
        }
    }
}

impl FromStr for ListOrder {
    type Err = MemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "updated" => Ok(ListOrder::Updated),
            "stored" => Ok(ListOrder::Stored),
            other => Err(MemoError::Api(format!(
                "Invalid list order: {} (expected 'updated' or 'stored')",
                other
            ))),
        }
    }
}

/// Configuration for memopad, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemopadConfig {
    /// Backend namespace holding the memos
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Default ordering for `list`
    #[serde(default)]
    pub list_order: ListOrder,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for MemopadConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            list_order: ListOrder::default(),
        }
    }
}

impl MemopadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MemoError::Io)?;
        let config: MemopadConfig =
            serde_json::from_str(&content).map_err(MemoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MemoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MemoError::Serialization)?;
        fs::write(config_path, content).map_err(MemoError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "namespace" => Some(self.namespace.clone()),
            "list-order" => Some(self.list_order.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "namespace" => {
                // same rule the backend applies, so a saved namespace always opens
                let value = value.trim();
                validate_storage_name(value)?;
                self.namespace = value.to_string();
            }
            "list-order" => self.list_order = value.parse()?,
            other => return Err(MemoError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub const KEYS: &'static [&'static str] = &["namespace", "list-order"];
}
