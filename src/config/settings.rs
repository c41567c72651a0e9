//! Configuration settings structures for escola-api
//!
//! Defines all configuration sections that can be loaded from TOML files
//! and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "escola-api".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_access_token_expiration() -> i64 {
    24 // hours
}

fn default_refresh_token_expiration() -> i64 {
    168 // 7 days (168 hours)
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

impl DatabaseConfig {
    /// Validates the database configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL cannot be empty",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Pool must allow at least one connection",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Minimum connections cannot exceed maximum connections",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

/// JWT authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens. Must be set per deployment,
    /// preferably through the ESCOLA__JWT__SECRET environment variable.
    #[serde(default)]
    pub secret: String,

    /// Access token expiration time in hours
    #[serde(default = "default_access_token_expiration")]
    pub access_token_expiration: i64,

    /// Refresh token expiration time in hours
    #[serde(default = "default_refresh_token_expiration")]
    pub refresh_token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expiration: default_access_token_expiration(),
            refresh_token_expiration: default_refresh_token_expiration(),
        }
    }
}

impl JwtConfig {
    /// Validates the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty",
            ));
        }

        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret should be at least 32 characters for security",
            ));
        }

        if self.access_token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.access_token_expiration",
                "Access token expiration must be positive",
            ));
        }

        if self.refresh_token_expiration <= self.access_token_expiration {
            return Err(ConfigError::validation(
                "jwt",
                "Refresh token expiration should be longer than access token expiration",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            console: ConsoleSettings::default(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root application settings aggregating all configuration sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.jwt.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            database: DatabaseConfig {
                url: "postgres://localhost/escola".to_string(),
                ..Default::default()
            },
            jwt: JwtConfig {
                secret: "a-secret-key-that-is-at-least-32-chars".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut settings = valid_settings();
        settings.database.url = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_short_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.jwt.secret = "short".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let mut settings = valid_settings();
        settings.jwt.access_token_expiration = 200;
        settings.jwt.refresh_token_expiration = 100;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://localhost/escola_test"

            [jwt]
            secret = "another-secret-key-at-least-32-chars!"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.database.max_connections, 10);
        assert!(settings.validate().is_ok());
    }
}
