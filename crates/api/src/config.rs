//! # API Configuration Module
//!
//! Loads configuration for the Tidyslot API server from environment variables,
//! with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info"); `RUST_LOG` overrides it
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30; 0 also means 30)
//! - `GRAPHQL_PLAYGROUND`: Serve GraphiQL on `GET /graphql` (default: true)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration for the Tidyslot API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use tidyslot_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Whether `GET /graphql` serves the GraphiQL playground
    pub graphql_playground: bool,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url =
            env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| parse_origins(&origins))
            .filter(|origins| !origins.is_empty());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .map(|value| parse_timeout(&value))
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let graphql_playground = env::var("GRAPHQL_PLAYGROUND")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            graphql_playground,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:8080"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Seconds; zero or unparseable values fall back to the default.
fn parse_timeout(value: &str) -> u64 {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => DEFAULT_REQUEST_TIMEOUT,
        Ok(seconds) => seconds,
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "postgres://localhost/tidyslot".to_string(),
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            graphql_playground: true,
        }
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(config().server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Level::DEBUG);
        assert_eq!(parse_log_level(" WARN "), Level::WARN);
        assert_eq!(parse_log_level(""), Level::INFO);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins("http://localhost:3000, ,https://book.example.com"),
            vec!["http://localhost:3000", "https://book.example.com"]
        );
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("45"), 45);
        assert_eq!(parse_timeout(" 5 "), 5);
        assert_eq!(parse_timeout("0"), DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(parse_timeout("soon"), DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(parse_timeout("-1"), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag("off"));
    }
}
