//! Configuration management for the contacts service.
//!
//! Configuration is loaded from environment variables, with a `.env` file
//! honored when present. Only the store URL is required; everything else
//! has a sensible default.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the contacts service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the document store's data API
    pub store_url: String,

    /// Optional API key sent to the store as `x-api-key`
    pub store_api_key: Option<String>,

    /// Port the HTTP server listens on (default: 3001)
    pub port: u16,

    /// Public base URL used when building pagination links
    /// (default: `http://localhost:{port}`)
    pub origin_url: String,

    /// HTTP request timeout towards the store, in seconds (default: 10)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `STORE_URL`: Base URL of the document store's data API
    ///
    /// Optional environment variables:
    /// - `STORE_API_KEY`: API key for the store (blank means none)
    /// - `PORT`: HTTP listen port (default: 3001)
    /// - `ORIGIN_URL`: Public base URL for pagination links
    ///   (default: `http://localhost:{port}`)
    /// - `REQUEST_TIMEOUT`: Store timeout in seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if one exists, without failing when it doesn't
        let _ = dotenvy::dotenv();

        let store_url =
            env::var("STORE_URL").map_err(|_| ConfigError::MissingVar("STORE_URL".to_string()))?;

        if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "STORE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let store_api_key = env::var("STORE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let port = Self::parse_env_u16("PORT", 3001)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let origin_url = env::var("ORIGIN_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            store_url,
            store_api_key,
            port,
            origin_url,
            request_timeout,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_url: String::new(),
            store_api_key: None,
            port: 3001,
            origin_url: "http://localhost:3001".to_string(),
            request_timeout: 10,
        }
    }
}
