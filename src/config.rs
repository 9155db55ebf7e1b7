//! Configuration management for Book Server

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the time spent handling one request
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// Rolling log file; logs go to stdout when unset
    pub file: Option<String>,
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the four demo books at startup
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)?.build()?.try_deserialize()
    }

    fn builder(run_mode: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables, e.g. BOOK_SERVER_SERVER__PORT=9000
            .add_source(
                Environment::with_prefix("BOOK_SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Legacy variable naming the rolling log file
            .set_override_option(
                "logging.file",
                env::var("LOG_FILE_LOCATION").ok().filter(|path| !path.is_empty()),
            )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            request_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
            max_files: 3,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.logging.max_files, 3);
        assert!(config.logging.file.is_none());
        assert!(config.store.seed);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse(
            r#"
            [server]
            port = 9000

            [logging]
            file = "/var/log/books.log"
            "#,
        );
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.file.as_deref(), Some("/var/log/books.log"));
        assert_eq!(config.logging.level, "info");
        assert!(config.store.seed);
    }

    #[test]
    fn test_store_seed_can_be_disabled() {
        let config = parse("[store]\nseed = false\n");
        assert!(!config.store.seed);
    }

    // Environment is process-wide, so every env case lives in this one test
    #[test]
    fn test_environment_overrides() {
        env::set_var("BOOK_SERVER_SERVER__PORT", "9100");
        env::set_var("BOOK_SERVER_SERVER__REQUEST_TIMEOUT_SECS", "3");
        env::set_var("LOG_FILE_LOCATION", "/tmp/books.log");

        let config: AppConfig = AppConfig::builder("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/books.log"));

        env::set_var("LOG_FILE_LOCATION", "");
        let config: AppConfig = AppConfig::builder("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(config.logging.file.is_none());

        env::remove_var("BOOK_SERVER_SERVER__PORT");
        env::remove_var("BOOK_SERVER_SERVER__REQUEST_TIMEOUT_SECS");
        env::remove_var("LOG_FILE_LOCATION");
    }
}
