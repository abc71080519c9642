//! Server configuration, built once at startup.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_BODY_MB: usize = 32;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Process-wide server settings. The wall threshold is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum request body size in MB (base64 images are large).
    pub max_body_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_mb: DEFAULT_MAX_BODY_MB,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `FLOORPLAN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("FLOORPLAN_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("FLOORPLAN_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            max_body_mb: lookup("FLOORPLAN_MAX_BODY_MB")
                .and_then(|mb| mb.parse().ok())
                .unwrap_or(defaults.max_body_mb),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path_ref)?),
            Some("json") => Self::from_json(&fs::read_to_string(path_ref)?),
            _ => Err(ConfigError::UnsupportedFileFormat),
        }
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_values_override_defaults() {
        let vars: HashMap<&str, &str> = [("FLOORPLAN_PORT", "8081"), ("FLOORPLAN_MAX_BODY_MB", "4")]
            .into_iter()
            .collect();
        let config = ServerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.max_body_bytes(), 4 * 1024 * 1024);
    }

    #[test]
    fn unparsable_env_falls_back() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "FLOORPLAN_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = ServerConfig::from_toml("port = 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_body_mb, 32);
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.json");
        fs::write(&path, r#"{"host": "127.0.0.1", "port": 5050}"#).unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5050);
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = ServerConfig::from_file("server.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFileFormat)));
    }
}
