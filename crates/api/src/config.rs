use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the state record
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Number of events shown on the dashboard
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Default window for the history view, in days
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            window_days: default_window_days(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_request_timeout() -> u64 {
    30
}
fn default_data_file() -> String {
    "spray_data.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_recent_limit() -> usize {
    10
}
fn default_window_days() -> u32 {
    30
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with RT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RT").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from embedded defaults plus overrides.
    ///
    /// Does not touch the file system, so it is usable from tests.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8000
            request_timeout_secs = 30

            [storage]
            data_file = "spray_data.json"

            [logging]
            level = "info"
            format = "json"

            [history]
            recent_limit = 10
            window_days = 30
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.storage.data_file.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "RT__STORAGE__DATA_FILE must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.history.recent_limit == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "history.recent_limit must be greater than 0".to_string(),
            ));
        }

        if self.history.window_days == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "history.window_days must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.data_file, "spray_data.json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.history.recent_limit, 10);
        assert_eq!(config.history.window_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_env_override() {
        let config = Config::load_for_test(&[
            ("server.port", "9000"),
            ("logging.level", "debug"),
            ("storage.data_file", "/var/lib/rotation/state.json"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.storage.data_file, "/var/lib/rotation/state.json");
    }

    #[test]
    fn test_config_validation_empty_data_file() {
        let config =
            Config::load_for_test(&[("storage.data_file", "")]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("RT__STORAGE__DATA_FILE"));
    }

    #[test]
    fn test_config_validation_zero_port() {
        let config = Config::load_for_test(&[("server.port", "0")]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("port"));
    }

    #[test]
    fn test_config_validation_history_window() {
        let config = Config::load_for_test(&[("history.window_days", "0")])
            .expect("Failed to load config");
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("window_days"));
    }

    #[test]
    fn test_socket_addr() {
        let config =
            Config::load_for_test(&[("server.host", "127.0.0.1"), ("server.port", "3000")])
                .expect("Failed to load config");

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = Config::load_for_test(&[("server.host", "not a host")])
            .expect("Failed to load config");
        assert!(config.socket_addr().is_err());
    }
}
