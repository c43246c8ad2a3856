use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::defs::{DEFAULT_API_URL, DEFAULT_CONFIG_PATH, DEFAULT_PLAYERS, DEFAULT_TIMEOUT_SECS};
use crate::error::{ClientError, Result};
use crate::logging::{log_info, log_warning};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub username: String,
    pub players: u32,
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username: String::new(),
            players: DEFAULT_PLAYERS,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn load_or_default() -> Self {
        Self::load_from_or_default(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from_or_default<P: AsRef<Path>>(path: P) -> Self {
        let config_path = path.as_ref();

        match Self::from_file(config_path) {
            Ok(config) => {
                log_info(&format!("Loaded client configuration from {}", config_path.display()));
                config
            }
            Err(e) => {
                log_warning(&format!(
                    "Could not load client config from {}: {}. Using defaults.",
                    config_path.display(),
                    e
                ));
                Self::default()
            }
        }
    }
}

impl FromStr for ClientConfig {
    type Err = ClientError;

    fn from_str(content: &str) -> Result<Self> {
        let config_map = parse_config(content);
        let defaults = Self::default();

        let api_url = config_map
            .get("api_url")
            .cloned()
            .unwrap_or(defaults.api_url);

        let username = config_map
            .get("username")
            .cloned()
            .unwrap_or(defaults.username);

        let players = parse_value(&config_map, "players")?.unwrap_or(defaults.players);
        let timeout = parse_value(&config_map, "timeout")?.unwrap_or(defaults.timeout);

        Ok(ClientConfig { api_url, username, players, timeout })
    }
}

fn parse_value<T: FromStr>(config_map: &HashMap<String, String>, key: &str) -> Result<Option<T>> {
    match config_map.get(key) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ClientError::Config(format!("invalid value for {key}: {raw}"))),
    }
}

fn parse_config(content: &str) -> HashMap<String, String> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            config.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    config
}
