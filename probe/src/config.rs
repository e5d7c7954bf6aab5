//! Probe configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scenario TOML to load (`~` is expanded)
    pub scenario_path: String,

    /// Pretty-print each JSON result instead of one line per query
    #[serde(default)]
    pub pretty: bool,

    /// Abort on the first failed query
    #[serde(default)]
    pub stop_on_error: bool,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        let config_path = Self::path();

        let config_str = std::fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {}", config_path))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Config file location (`LEDGERVIEW_CONFIG` or `ledgerview.toml`)
    pub fn path() -> String {
        std::env::var("LEDGERVIEW_CONFIG").unwrap_or_else(|_| "ledgerview.toml".to_string())
    }

    /// Create default configuration
    pub fn default_local() -> Self {
        Self {
            scenario_path: "probe/scenarios/basic.toml".to_string(),
            pretty: false,
            stop_on_error: false,
        }
    }

    /// Scenario path with `~` expanded
    pub fn scenario_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.scenario_path).as_ref())
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
