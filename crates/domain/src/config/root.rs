use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::legacy;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::blocklist::Blocklist;
use crate::relay_settings::RelaySettings;

const DEFAULT_CONFIG_PATH: &str = "ferrous-sinkhole.toml";
const LEGACY_CONFIG_PATH: &str = "config.txt";

/// Main configuration structure for Ferrous Sinkhole
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolver that allowed queries are relayed to
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Blocklist and the answer given to blocked queries
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-sinkhole.toml in current directory
    /// 3. config.txt in current directory (flat key = value format)
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file. `.toml` files are parsed as
    /// TOML, anything else as flat `key = value` lines.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        let is_toml = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_key_value_str(&contents)
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_key_value_str(contents: &str) -> Result<Self, ConfigError> {
        legacy::parse_key_value(contents)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.listen_port {
            self.server.listen_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(address) = overrides.upstream_address {
            self.upstream.address = address;
        }
        if let Some(port) = overrides.upstream_port {
            self.upstream.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.concurrent {
            self.server.concurrent = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen_port == 0 {
            return Err(ConfigError::Validation(
                "Listen port cannot be 0".to_string(),
            ));
        }

        if self.upstream.port == 0 {
            return Err(ConfigError::Validation(
                "Upstream port cannot be 0".to_string(),
            ));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        self.server.socket_addr()?;
        self.upstream.socket_addr()?;
        self.blocking.response_mode()?;

        if let Some(position) = self
            .blocking
            .blacklist
            .iter()
            .position(|entry| entry.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "Blacklist entry {} is empty",
                position + 1
            )));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "Unknown log format '{}' (expected text or json)",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Validated, immutable snapshot the relay runs with.
    pub fn relay_settings(&self) -> Result<RelaySettings, ConfigError> {
        self.validate()?;

        Ok(RelaySettings {
            upstream: self.upstream.socket_addr()?,
            upstream_timeout: Duration::from_millis(self.upstream.timeout_ms),
            mode: self.blocking.response_mode()?,
            ttl: self.blocking.ttl,
            blocklist: Arc::new(Blocklist::new(&self.blocking.blacklist)),
        })
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [DEFAULT_CONFIG_PATH, LEGACY_CONFIG_PATH]
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_address: Option<String>,
    pub upstream_port: Option<u16>,
    pub log_level: Option<String>,
    pub concurrent: bool,
}
