//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Default request body limit (2 MiB)
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default maximum number of elements per screenplay
const DEFAULT_MAX_ELEMENTS: usize = 10_000;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// CORS allowed origins (`["*"]` for any)
    pub cors_allowed_origins: Vec<String>,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
    /// Largest accepted number of screenplay elements per request
    pub max_elements: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_HOST` - Interface to bind (default: 0.0.0.0)
    /// - `SERVER_PORT` or `PORT` - HTTP port (default: 8080)
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origins, or `*` (default: *)
    /// - `MAX_BODY_BYTES` - Request body limit (default: 2097152)
    /// - `MAX_ELEMENTS` - Elements per screenplay (default: 10000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(port) => port
                .trim()
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            None => defaults.server_port,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value
                .trim()
                .parse()
                .context("MAX_BODY_BYTES must be a positive integer")?,
            None => defaults.max_body_bytes,
        };

        let max_elements = match lookup("MAX_ELEMENTS") {
            Some(value) => value
                .trim()
                .parse()
                .context("MAX_ELEMENTS must be a positive integer")?,
            None => defaults.max_elements,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_allowed_origins,
            max_body_bytes,
            max_elements,
        })
    }

    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}
