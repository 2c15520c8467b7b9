//! Runtime settings for the local site host, read from the environment.

use common::config::BASE_PATH;
use thiserror::Error;

pub const HOST_VAR: &str = "BOIS_SAVEURS_HOST";
pub const PORT_VAR: &str = "BOIS_SAVEURS_PORT";
pub const OPEN_BROWSER_VAR: &str = "BOIS_SAVEURS_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            base_path: BASE_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset or
    /// blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ServerConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = get(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: PORT_VAR,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = get(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or(ConfigError::InvalidValue {
                key: OPEN_BROWSER_VAR,
                value: flag.clone(),
            })?;
        }
        Ok(config)
    }

    /// Address of the site root, e.g. `http://127.0.0.1:8080/Bois_Saveurs/`.
    pub fn site_url(&self) -> String {
        format!(
            "http://{}:{}{}/",
            self.host,
            self.port,
            self.base_path.trim_end_matches('/')
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
