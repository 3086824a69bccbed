use crate::error::{KhitabError, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for khitab, stored in config.json under the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KhitabConfig {
    /// Base URL of the letter-generation service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Spreadsheet holding the Submissions and Settings ranges.
    #[serde(default)]
    pub spreadsheet_id: String,

    /// API key for the spreadsheet values API.
    #[serde(default)]
    pub sheets_api_key: String,

    /// Explicit palette preference; system detection applies when unset.
    #[serde(default)]
    pub theme: Option<Theme>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for KhitabConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            spreadsheet_id: String::new(),
            sheets_api_key: String::new(),
            theme: None,
        }
    }
}

impl KhitabConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KhitabError::Io)?;
        let config: KhitabConfig =
            serde_json::from_str(&content).map_err(KhitabError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KhitabError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KhitabError::Serialization)?;
        fs::write(config_path, content).map_err(KhitabError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-base-url" => Some(self.api_base_url.clone()),
            "spreadsheet-id" => Some(self.spreadsheet_id.clone()),
            "sheets-api-key" => Some(self.sheets_api_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-base-url" => self.api_base_url = value.trim_end_matches('/').to_string(),
            "spreadsheet-id" => self.spreadsheet_id = value.to_string(),
            "sheets-api-key" => self.sheets_api_key = value.to_string(),
            other => return Err(KhitabError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KhitabConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert!(config.spreadsheet_id.is_empty());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = KhitabConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, KhitabConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = KhitabConfig::default();
        config.set("api-base-url", "http://letters.example.com/").unwrap();
        config.set("spreadsheet-id", "sheet-123").unwrap();
        config.theme = Some(Theme::Dark);
        config.save(dir.path()).unwrap();

        let loaded = KhitabConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.api_base_url, "http://letters.example.com");
        assert_eq!(loaded.spreadsheet_id, "sheet-123");
        assert_eq!(loaded.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = KhitabConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"spreadsheet_id": "only-this"}"#,
        )
        .unwrap();

        let loaded = KhitabConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.spreadsheet_id, "only-this");
        assert_eq!(loaded.api_base_url, "http://127.0.0.1:5000");
    }
}
