use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file layout version, bumped when fields change meaning.
pub const CONFIG_VERSION: u32 = 1;

/// Default panel API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openfrp.net";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub config_version: Option<u32>,
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            config_version: Some(CONFIG_VERSION),
            api_base: env::var("PANEL_API_BASE").ok(),
            token: env::var("PANEL_API_TOKEN").ok(),
            timeout_ms: env::var("PANEL_API_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok()),
        }
    }

    /// Loads the config file, migrating older layouts and rewriting the
    /// file so the stored copy is always current.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
            serde_json::from_str::<Config>(&content)?.upgrade()
        } else {
            Config {
                config_version: Some(CONFIG_VERSION),
                ..Default::default()
            }
        };

        config.save(path)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::Write)
    }

    fn upgrade(mut self) -> Self {
        let current_version = self.config_version.unwrap_or(0);

        if current_version < 1 {
            // Pre-versioned files had no timeout field
            self.timeout_ms = self.timeout_ms.or(Some(DEFAULT_TIMEOUT_MS));
        }

        self.config_version = Some(CONFIG_VERSION);
        self
    }

    /// Effective API base URL.
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Effective request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}
