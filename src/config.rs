//! Configuration management for the bookstore server

use axum::http::{HeaderName, HeaderValue, Method};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

/// Cross-origin policy. A `"*"` entry in any list selects the wildcard
/// policy for that dimension; otherwise the enumerated values apply.
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSTORE_)
            .add_source(
                Environment::with_prefix("BOOKSTORE")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            // Override listen port from PORT env var if present
            .set_override_option(
                "server.port",
                env::var("PORT")
                    .ok()
                    .and_then(|port| port.parse::<u16>().ok())
                    .map(i64::from),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl CorsConfig {
    /// Build the tower-http CORS layer described by this configuration.
    /// Invalid entries are reported as configuration errors at startup.
    pub fn layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = if is_wildcard(&self.allowed_origins) {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.allowed_origins
                    .iter()
                    .map(|origin| {
                        origin.parse::<HeaderValue>().map_err(|_| {
                            ConfigError::Message(format!("invalid CORS origin: {}", origin))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        let methods = if is_wildcard(&self.allowed_methods) {
            AllowMethods::any()
        } else {
            AllowMethods::list(
                self.allowed_methods
                    .iter()
                    .map(|method| {
                        Method::from_bytes(method.as_bytes()).map_err(|_| {
                            ConfigError::Message(format!("invalid CORS method: {}", method))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        let headers = if is_wildcard(&self.allowed_headers) {
            AllowHeaders::any()
        } else {
            AllowHeaders::list(
                self.allowed_headers
                    .iter()
                    .map(|header| {
                        header.parse::<HeaderName>().map_err(|_| {
                            ConfigError::Message(format!("invalid CORS header: {}", header))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers))
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|value| value == "*")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5555,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "bookstore".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
            allowed_headers: vec!["*".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
