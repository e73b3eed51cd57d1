//! Service settings
//!
//! Resolution per key: command line → environment (incl. `.env`) →
//! `[tasknote.envs]` in the services file → compiled defaults.
//!
//! Environment keys are read as `TASKNOTE_<KEY>` first, then bare `<KEY>`
//! (`HOST`, `PORT`, `STORAGE`, ...). Prefer the prefixed form where the bare
//! names are already used by the shell or container.

use std::str::FromStr;
use tasknote_common::config::ServiceConfig;
use tasknote_common::logging::LogFormat;
use tasknote_common::{Error, Result};

/// Name used for the services-file block and in log output
pub const SERVICE_NAME: &str = "tasknote";

/// Which repository variant backs the HTTP surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// SQLite database at `database_url`
    #[default]
    Sqlite,
    /// Process-lifetime in-memory store; contents are lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "database" | "db" => Ok(StorageBackend::Sqlite),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(Error::Config(format!("Unknown storage backend: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub log_format: LogFormat,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub storage: StorageBackend,
    /// Path prefix for every route; empty or `/` mounts at the root
    pub api_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite://tasknote.db?mode=rwc".to_string(),
            storage: StorageBackend::Sqlite,
            api_prefix: "/tasknote".to_string(),
        }
    }
}

/// Command-line values that take priority over every other source
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub storage: Option<String>,
}

impl Settings {
    /// Resolve settings from environment and services-file values
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let defaults = Settings::default();

        Ok(Self {
            log_level: config.get("log_level").unwrap_or(defaults.log_level),
            log_format: config.get_parsed("log_format")?.unwrap_or(defaults.log_format),
            host: config.get("host").unwrap_or(defaults.host),
            port: config.get_parsed("port")?.unwrap_or(defaults.port),
            database_url: config.get("database_url").unwrap_or(defaults.database_url),
            storage: config.get_parsed("storage")?.unwrap_or(defaults.storage),
            api_prefix: config.get("api_prefix").unwrap_or(defaults.api_prefix),
        })
    }

    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(database_url) = overrides.database_url {
            self.database_url = database_url;
        }
        if let Some(storage) = overrides.storage {
            self.storage = storage.parse()?;
        }
        Ok(self)
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("sqlite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
        assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("postgres".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_overrides_take_priority() {
        let settings = Settings::default()
            .apply(Overrides {
                port: Some(9100),
                storage: Some("memory".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.port, 9100);
        assert_eq!(settings.storage, StorageBackend::Memory);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.bind_addr(), "127.0.0.1:9100");
    }

    #[test]
    fn test_invalid_storage_override_is_config_error() {
        let err = Settings::default()
            .apply(Overrides {
                storage: Some("redis".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
