//! Configuration module
//!
//! Settings come from a TOML file, then environment variables override
//! individual values:
//!
//! | variable        | overrides          |
//! |-----------------|--------------------|
//! | `DB_URI`        | `database.url`     |
//! | `HOST`          | `server.host`      |
//! | `PORT`          | `server.port`      |
//! | `AUTH_USERNAME` | `auth.username`    |
//! | `AUTH_PASSWORD` | `auth.password`    |
//! | `LOG_LEVEL`     | `logging.level`    |
//!
//! A `.env` file in the working directory is loaded first; variables already
//! set in the process environment win over it.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::auth::Credentials;
use crate::infrastructure::DatabaseConfig;

/// Env var pointing at the config file
pub const CONFIG_PATH_ENV: &str = "USER_REGISTRY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DatabaseConfig::default().url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit one JSON object per event instead of human-readable lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    /// The credential pair the access gate accepts. No default.
    pub auth: Credentials,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read `path` (a missing file means defaults), apply env overrides
    /// (including `.env`), validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| dotenvy::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Apply overrides from `lookup` (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DB_URI") {
            self.database.url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT '{}' is not a valid port", port)))?;
        }
        if let Some(username) = lookup("AUTH_USERNAME") {
            self.auth.username = username;
        }
        if let Some(password) = lookup("AUTH_PASSWORD") {
            self.auth.password = password;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.username.is_empty() || self.auth.password.is_empty() {
            return Err(ConfigError::Invalid(
                "auth.username and auth.password must be set (or AUTH_USERNAME / AUTH_PASSWORD)"
                    .into(),
            ));
        }
        if self.auth.username.contains(':') {
            return Err(ConfigError::Invalid("auth.username must not contain ':'".into()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        Ok(())
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
        }
    }
}

/// `$USER_REGISTRY_CONFIG`, else `<config dir>/user-registry/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-registry")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_full_file() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [database]
            url = "sqlite://./test.db?mode=rwc"

            [auth]
            username = "admin"
            password = "password"

            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.database_config().url, "sqlite://./test.db?mode=rwc");
        assert_eq!(config.auth, Credentials::new("admin", "password"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config = AppConfig::from_toml("[server]\nport = 4000\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.url, DatabaseConfig::default().url);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = AppConfig::from_toml("[auth]\nusername = \"file\"\npassword = \"file\"\n").unwrap();
        config
            .apply_overrides(env(&[
                ("DB_URI", "sqlite::memory:"),
                ("PORT", "9999"),
                ("AUTH_USERNAME", "admin"),
                ("AUTH_PASSWORD", "secret"),
            ]))
            .unwrap();

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.auth, Credentials::new("admin", "secret"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut config = AppConfig::default();
        let err = config.apply_overrides(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn credentials_are_required() {
        assert!(AppConfig::default().validate().is_err());

        let mut config = AppConfig::default();
        config.auth = Credentials::new("admin", "");
        assert!(config.validate().is_err());

        config.auth = Credentials::new("ad:min", "password");
        assert!(config.validate().is_err());
    }

    #[test]
    fn dotenv_values_override_file() {
        let dotenv: HashMap<String, String> = dotenvy::from_read_iter(
            "# local settings\nDB_URI=postgres://app:secret@db:5432/users\nPORT=8081\n".as_bytes(),
        )
        .collect::<Result<_, _>>()
        .unwrap();

        let mut config = AppConfig::from_toml(
            "[server]\nport = 4000\n[database]\nurl = \"sqlite://./file.db?mode=rwc\"\n",
        )
        .unwrap();
        config.apply_overrides(|key| dotenv.get(key).cloned()).unwrap();

        assert_eq!(config.database.url, "postgres://app:secret@db:5432/users");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = AppConfig::from_file(Path::new("/nonexistent/user-registry.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
