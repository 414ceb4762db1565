//! Persisted user configuration.
//!
//! A small JSON config file holding the editor integration and an optional
//! index-file override. Missing config is created with defaults on first load.

use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NavigatorConfig {
    /// Program to launch for "open externally"; falls back to `EDITOR`/`VISUAL`
    pub editor: Option<String>,
    /// Index snapshot location, overriding the default data directory
    pub index_file: Option<PathBuf>,
}

impl NavigatorConfig {
    pub fn load_or_create() -> Result<Self> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    /// Editor program to launch: config first, then `EDITOR`, then `VISUAL`
    pub fn editor_program(&self) -> Option<String> {
        if let Some(editor) = &self.editor {
            return Some(editor.clone());
        }
        env::var("EDITOR")
            .or_else(|_| env::var("VISUAL"))
            .ok()
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_editor_setting() {
        let config = NavigatorConfig::default();
        assert!(config.editor.is_none());
        assert!(config.index_file.is_none());
    }

    #[test]
    fn test_configured_editor_wins_over_environment() {
        let config = NavigatorConfig {
            editor: Some("helix".to_string()),
            index_file: None,
        };
        assert_eq!(config.editor_program().as_deref(), Some("helix"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = NavigatorConfig {
            editor: Some("vim".to_string()),
            index_file: Some(PathBuf::from("/data/index.json")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: NavigatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
