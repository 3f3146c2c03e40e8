use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::types::AppConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pixelmint/config.toml` on Unix/macOS, or
    /// equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pixelmint").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads configuration from an explicit path, with the same
    /// missing-file and validation behavior as [`AppConfig::load`].
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Admin email and password are non-empty
    /// - Starting credits are non-negative
    /// - The generator base URL is non-empty
    /// - Seed package and user ids are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.email.is_empty() || self.admin.password.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Admin email and password must be set".to_string(),
            });
        }

        if self.signup.starting_credits < 0 {
            return Err(ConfigError::ValidationError {
                message: "Starting credits must not be negative".to_string(),
            });
        }

        if self.generator.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Generator base URL must be set".to_string(),
            });
        }

        let mut package_ids = HashSet::new();
        for pkg in &self.seed.credit_packages {
            if !package_ids.insert(pkg.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate seed package id '{}'", pkg.id),
                });
            }
        }

        let mut user_ids = HashSet::new();
        for user in &self.seed.users {
            if !user_ids.insert(user.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate seed user id '{}'", user.id),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_pass_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.signup.starting_credits, 10);
        assert_eq!(config.seed.credit_packages.len(), 3);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.admin.display_name, "Admin");
    }

    #[test]
    fn parses_partial_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[admin]\nemail = \"root@example.com\"\npassword = \"hunter2\"\n\n\
             [signup]\nstarting_credits = 25\n"
        )
        .unwrap();

        let config = AppConfig::load_from(path).unwrap();
        assert_eq!(config.admin.email, "root@example.com");
        assert_eq!(config.signup.starting_credits, 25);
        // Untouched sections keep their defaults.
        assert_eq!(config.seed.payment_details.method_name, "Bkash/Nagad");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "admin = not toml").unwrap();

        assert!(matches!(
            AppConfig::load_from(path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn negative_starting_credits_fails_validation() {
        let mut config = AppConfig::default();
        config.signup.starting_credits = -1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn duplicate_seed_package_ids_fail_validation() {
        let mut config = AppConfig::default();
        let dup = config.seed.credit_packages[0].clone();
        config.seed.credit_packages.push(dup);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
