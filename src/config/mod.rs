use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Priority-ordered application identifiers for the automation-backed
/// strategies. The defaults cover the primary office suite and its
/// compatible alternatives; a config file can reorder or extend them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutomationConfig {
    pub word_apps: Vec<String>,
    pub spreadsheet_apps: Vec<String>,
    pub presentation_apps: Vec<String>,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        fn ids(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| (*s).to_string()).collect()
        }
        Self {
            word_apps: ids(&["Word.Application", "Kw.Application", "Wps.Application"]),
            spreadsheet_apps: ids(&["Excel.Application", "KET.Application", "Et.Application"]),
            presentation_apps: ids(&[
                "PowerPoint.Application",
                "KWPP.Application",
                "Wpp.Application",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WalkConfig {
    pub follow_links: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub automation: AutomationConfig,
    pub walk: WalkConfig,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pagestamp").join("config.toml"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            AppError::ConfigError("Could not determine config directory".to_string())
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::ConfigError(e.to_string()))?;
        fs::write(&path, content)?;
        Ok(())
    }
}
