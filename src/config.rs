use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub port: Option<u16>,
    pub default_lang: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytserve/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytserve")
        .join("config.toml")
}

/// Effective listening port: CLI flag, then PORT env var, then config file
pub fn pick_port(cli: Option<u16>, env: Option<u16>, file: Option<u16>) -> u16 {
    cli.or(env).or(file).unwrap_or(DEFAULT_PORT)
}
