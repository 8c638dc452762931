//! Service configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! { "http": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] }, "seed_books": true }
//! ```

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Load the seed records at startup (default: true)
    #[serde(default = "default_seed_books")]
    pub seed_books: bool,
}

fn default_seed_books() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed_books: default_seed_books(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        no_seed: bool,
    ) -> CliResult<Self> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        if no_seed {
            self.seed_books = false;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        for origin in &self.http.cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(CliError::config_error(format!(
                    "http.cors_origins entry {:?} is not a valid origin",
                    origin
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.seed_books);
        assert_eq!(config.http.port, 8000);
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default()
            .with_overrides(Some("127.0.0.1".to_string()), Some(9000), true)
            .unwrap();

        assert_eq!(config.http.socket_addr(), "127.0.0.1:9000");
        assert!(!config.seed_books);
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::default().with_overrides(None, Some(0), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_host_rejected() {
        let mut config = Config::default();
        config.http.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparsable_cors_origin_rejected() {
        let mut config = Config::default();
        config.http.cors_origins = vec![
            "http://localhost:5173".to_string(),
            "http://bad\norigin".to_string(),
        ];

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cors_origins"));
    }

    #[test]
    fn test_valid_cors_origins_accepted() {
        let mut config = Config::default();
        config.http.cors_origins = vec!["https://example.com".to_string()];
        assert!(config.validate().is_ok());
    }
}
