//! Configuration loading for TaskNote services
//!
//! Values are resolved per key in this priority order:
//! 1. Process environment (including variables loaded from a per-service `.env`).
//!    The service-prefixed name (`TASKNOTE_PORT`) wins over the bare name
//!    (`PORT`); bare names are generic and may be set by the shell or the
//!    container runtime.
//! 2. The service's `envs` block of the shared services TOML file
//! 3. Compiled defaults (applied by the caller)
//!
//! The services file is located by `CONFIG_FILEPATH`, then
//! `config/services.toml`, then `<config_dir>/tasknote/services.toml`.
//! A missing or malformed file is never fatal: it is recorded as a warning
//! and the service proceeds with environment variables only.

use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the services file
pub const CONFIG_FILEPATH_ENV: &str = "CONFIG_FILEPATH";

/// Services file used when `CONFIG_FILEPATH` is not set
pub const DEFAULT_CONFIG_FILEPATH: &str = "config/services.toml";

/// Key/value pairs from a service's `envs` block
pub type ServiceEnvs = BTreeMap<String, String>;

/// Where the file-level values came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Values were read from this services file
    File(PathBuf),
    /// No usable services file; environment only
    EnvironmentOnly,
}

/// Result of loading a service's configuration
///
/// Loading happens before logging is initialized, so problems are collected
/// in `warnings` and emitted by the caller once a subscriber exists.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub envs: ServiceEnvs,
    pub source: ConfigSource,
    pub warnings: Vec<String>,
}

impl ServiceConfig {
    /// Config with no file values, used by tests and as a fallback
    pub fn empty(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            envs: ServiceEnvs::new(),
            source: ConfigSource::EnvironmentOnly,
            warnings: Vec::new(),
        }
    }

    /// Environment variable name for `key` scoped to this service
    ///
    /// `port` for service `tasknote` is `TASKNOTE_PORT`.
    pub fn prefixed_var(&self, key: &str) -> String {
        format!("{}_{}", self.service_name, key)
            .replace('-', "_")
            .to_ascii_uppercase()
    }

    /// Resolve a key from the prefixed variable, the bare upper-cased
    /// variable, then the file
    pub fn get(&self, key: &str) -> Option<String> {
        if let Ok(value) = std::env::var(self.prefixed_var(key)) {
            return Some(value);
        }
        if let Ok(value) = std::env::var(key.to_ascii_uppercase()) {
            return Some(value);
        }
        self.envs.get(&key.to_ascii_lowercase()).cloned()
    }

    /// Resolve a key and parse it, reporting unparsable values as `Error::Config`
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| Error::Config(format!("Invalid value for {}: {:?} ({})", key, raw, e))),
            None => Ok(None),
        }
    }
}

/// Loads a service's configuration from `.env` and the services file
#[derive(Debug, Clone)]
pub struct ServiceConfigLoader {
    service_name: String,
    env_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ServiceConfigLoader {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            env_file: None,
            config_path: None,
        }
    }

    /// Per-service `.env` file; variables already set in the process win
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Explicit services file, bypassing `CONFIG_FILEPATH` resolution
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> ServiceConfig {
        let mut config = ServiceConfig::empty(&self.service_name);

        if let Some(env_file) = &self.env_file {
            load_env_file(env_file);
        }

        let path = match self.config_path.clone().or_else(locate_services_file) {
            Some(path) => path,
            None => {
                config.warnings.push(
                    "Config file not found. Proceeding with environment variables only.".to_string(),
                );
                return config;
            }
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                config.warnings.push(format!(
                    "Config file not readable: {} ({}). Proceeding with environment variables only.",
                    path.display(),
                    e
                ));
                return config;
            }
        };

        match parse_service_envs(&content, &self.service_name) {
            Ok(Some(envs)) => {
                config.envs = envs;
                config.source = ConfigSource::File(path);
            }
            Ok(None) => config.warnings.push(format!(
                "No config block found for service: {}. Proceeding with environment variables only.",
                self.service_name
            )),
            Err(e) => config.warnings.push(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            )),
        }

        config
    }
}

/// Load a `.env` file into the process environment
///
/// Returns false when the file does not exist or cannot be parsed.
pub fn load_env_file(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Find the services file following `CONFIG_FILEPATH` → default → platform dir
pub fn locate_services_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_FILEPATH_ENV) {
        let path = PathBuf::from(path);
        return path.exists().then_some(path);
    }

    let default = PathBuf::from(DEFAULT_CONFIG_FILEPATH);
    if default.exists() {
        return Some(default);
    }

    dirs::config_dir()
        .map(|d| d.join("tasknote").join("services.toml"))
        .filter(|p| p.exists())
}

/// Extract `[<service>.envs]` from a services TOML document
///
/// Returns `Ok(None)` when the document has no block for the service.
/// Scalar values are stringified; nested tables and arrays are rejected.
pub fn parse_service_envs(content: &str, service_name: &str) -> Result<Option<ServiceEnvs>> {
    let document: toml::Table = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?;

    let Some(service) = document.get(service_name).and_then(|v| v.as_table()) else {
        return Ok(None);
    };

    let mut envs = ServiceEnvs::new();
    let Some(block) = service.get("envs") else {
        return Ok(Some(envs));
    };
    let block = block
        .as_table()
        .ok_or_else(|| Error::Config(format!("{}.envs must be a table", service_name)))?;

    for (key, value) in block {
        let value = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            _ => {
                return Err(Error::Config(format!(
                    "{}.envs.{} must be a scalar value",
                    service_name, key
                )))
            }
        };
        envs.insert(key.to_ascii_lowercase(), value);
    }

    Ok(Some(envs))
}
