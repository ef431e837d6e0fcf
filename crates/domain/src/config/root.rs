use serde::{Deserialize, Serialize};

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::local_records::LocalRecordConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Outgoing question settings (`query` command)
    #[serde(default)]
    pub client: ClientConfig,

    /// DoH endpoint settings (`serve` command)
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Records answered directly by the DoH endpoint
    #[serde(default)]
    pub local_records: Vec<LocalRecordConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ferrous-doh.toml").exists() {
            Self::from_file("ferrous-doh.toml")?
        } else if std::path::Path::new("/etc/ferrous-doh/config.toml").exists() {
            Self::from_file("/etc/ferrous-doh/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.client_server {
            self.client.server = server;
        }
        if let Some(timeout) = overrides.client_timeout {
            self.client.timeout = timeout;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.path {
            self.server.path = path;
        }
        if let Some(upstream) = overrides.upstream {
            self.server.upstream = Some(upstream);
        }
        if overrides.client_allow_http {
            self.client.allow_http = true;
        }
        if overrides.server_allow_http {
            self.server.allow_http = true;
        }
        if overrides.upstream_allow_http {
            self.server.upstream_allow_http = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.server.is_empty() {
            return Err(ConfigError::Validation(
                "No DoH server configured".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if !self.server.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "Path '{}' must start with '/'",
                self.server.path
            )));
        }

        for record in &self.local_records {
            if record.name.is_empty() {
                return Err(ConfigError::Validation(
                    "Local record has an empty name".to_string(),
                ));
            }
            if record.record_type.code() < 1 {
                return Err(ConfigError::Validation(format!(
                    "Local record '{}' has invalid type {}",
                    record.name, record.record_type
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub client_server: Option<String>,
    pub client_timeout: Option<u64>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub upstream: Option<String>,
    pub client_allow_http: bool,
    pub server_allow_http: bool,
    pub upstream_allow_http: bool,
    pub log_level: Option<String>,
}
