//! Configuration loader for escola-api
//!
//! Provides the `ConfigLoader` struct that handles loading configuration
//! from multiple sources with proper precedence.

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "ESCOLA_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ESCOLA_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ESCOLA";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority:
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `ESCOLA_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// # Errors
    ///
    /// Returns an error if both `ESCOLA_CONFIG_DIR` and `ESCOLA_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "ESCOLA_CONFIG_DIR and ESCOLA_CONFIG_FILE cannot both be set. \
                 Use ESCOLA_CONFIG_DIR for layered configuration or \
                 ESCOLA_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If `ESCOLA_CONFIG_FILE` is set, loads only that file. Otherwise,
    /// performs layered loading from the configuration directory.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            if !file.exists() {
                return Err(ConfigError::FileNotFound(file.display().to_string()));
            }
            builder = builder.add_source(File::from(file.clone()).format(FileFormat::Toml));
        } else {
            let default_file = self.config_dir.join("default.toml");
            if !default_file.exists() {
                return Err(ConfigError::FileNotFound(default_file.display().to_string()));
            }
            builder =
                builder.add_source(File::from(default_file).format(FileFormat::Toml));

            let env_file = self
                .config_dir
                .join(format!("{}.toml", self.environment.as_str()));
            builder = builder.add_source(
                File::from(env_file).format(FileFormat::Toml).required(false),
            );

            let local_file = self.config_dir.join("local.toml");
            builder = builder.add_source(
                File::from(local_file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_layered_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut default = std::fs::File::create(dir.path().join("default.toml")).unwrap();
        writeln!(
            default,
            r#"
            [database]
            url = "postgres://localhost/escola"

            [jwt]
            secret = "a-secret-key-that-is-at-least-32-chars"
            "#
        )
        .unwrap();

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().unwrap();
        assert_eq!(settings.database.url, "postgres://localhost/escola");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            r#"
            [server]
            port = 3000

            [database]
            url = "postgres://localhost/escola"

            [jwt]
            secret = "a-secret-key-that-is-at-least-32-chars"
            "#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("test.toml"),
            r#"
            [server]
            port = 4000
            "#,
        )
        .unwrap();

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 4000);
    }

    #[test]
    fn test_missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        assert!(matches!(
            loader.load(),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
