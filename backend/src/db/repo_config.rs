//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files, with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub json: JsonSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

/// JSON file source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl JsonSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_repo_type() -> String {
    "json".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// A relative `data_dir` is resolved against the directory holding the file.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if config.json.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.json.data_dir = parent.join(&config.json.data_dir);
            }
        }
        info!("Loaded repository config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Load from the default location when present, otherwise use defaults,
    /// then apply environment overrides.
    pub fn load() -> Result<Self, RepositoryError> {
        let config = match Self::from_default_location() {
            Ok(config) => config,
            Err(RepositoryError::ConfigurationError { message, .. })
                if message.starts_with("No repository.toml") =>
            {
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.with_env_overrides()
    }

    /// Apply `REPOSITORY_TYPE`, `DATA_DIR` and `CACHE_TTL_SECS` overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, RepositoryError> {
        if let Ok(repo_type) = env::var("REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        if let Ok(data_dir) = env::var("DATA_DIR") {
            self.json.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(ttl) = env::var("CACHE_TTL_SECS") {
            self.json.cache_ttl_secs = ttl.trim().parse().map_err(|_| {
                warn!("Invalid CACHE_TTL_SECS value: {}", ttl);
                RepositoryError::configuration(format!(
                    "CACHE_TTL_SECS must be a whole number of seconds, got '{}'",
                    ttl
                ))
            })?;
        }
        Ok(self)
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config = RepositoryConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert_eq!(config.json, JsonSettings::default());
    }

    #[test]
    fn test_parse_json_config() {
        let toml = r#"
[repository]
type = "json"

[json]
data_dir = "/srv/analytics/data"
cache_ttl_secs = 120
"#;

        let config = RepositoryConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Json);
        assert_eq!(config.json.data_dir, PathBuf::from("/srv/analytics/data"));
        assert_eq!(config.json.cache_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RepositoryConfig::from_toml_str("").unwrap();
        assert_eq!(config.repository.repo_type, "json");
        assert_eq!(config.json.cache_ttl_secs, 3600);
        assert_eq!(config.json.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = RepositoryConfig::from_toml_str("[repository\ntype=").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_from_file_resolves_relative_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("repository.toml");
        fs::write(&path, "[json]\ndata_dir = \"data\"\n").unwrap();

        let config = RepositoryConfig::from_file(&path).unwrap();
        assert_eq!(config.json.data_dir, dir.path().join("data"));
    }

    #[test]
    fn test_from_file_keeps_absolute_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("repository.toml");
        fs::write(&path, "[json]\ndata_dir = \"/srv/data\"\n").unwrap();

        let config = RepositoryConfig::from_file(&path).unwrap();
        assert_eq!(config.json.data_dir, PathBuf::from("/srv/data"));
    }

    #[test]
    fn test_unknown_type() {
        let config = RepositoryConfig::from_toml_str("[repository]\ntype = \"postgres\"\n").unwrap();
        assert!(config.repository_type().is_err());
    }
}
