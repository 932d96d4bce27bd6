//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, record storage and leave limits.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Where team record files live. A team `Eng` is stored in
/// `<data_dir>/<file_prefix>Eng<file_suffix>`.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            file_prefix: default_file_prefix(),
            file_suffix: default_file_suffix(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_file_prefix() -> String {
    "vacations_".to_string()
}
fn default_file_suffix() -> String {
    ".txt".to_string()
}

/// How the limit calculator treats stored lines it cannot parse.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Skip the line, log it and report it alongside the result.
    #[default]
    Skip,
    /// Fail on the first unparseable line.
    Strict,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    #[serde(default = "default_vacation_days")]
    pub vacation_days_per_year: i64,
    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            vacation_days_per_year: default_vacation_days(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

fn default_vacation_days() -> i64 {
    28
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::parse(
            r#"
services:
  matrix:
    username: vacabot
    password: secret
    homeserver: https://matrix.example.org
"#,
        )
        .unwrap();

        assert_eq!(config.services.matrix.username, "vacabot");
        assert_eq!(config.services.matrix.display_name, None);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.storage.file_prefix, "vacations_");
        assert_eq!(config.limits.vacation_days_per_year, 28);
        assert_eq!(config.limits.parse_policy, ParsePolicy::Skip);
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::parse(
            r#"
services:
  matrix:
    username: vacabot
    password: secret
    homeserver: https://matrix.example.org
    display_name: Vacation Bot
storage:
  backend: memory
  data_dir: /var/lib/vacabot
limits:
  vacation_days_per_year: 31
  parse_policy: strict
"#,
        )
        .unwrap();

        assert_eq!(config.services.matrix.display_name.as_deref(), Some("Vacation Bot"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, "/var/lib/vacabot");
        assert_eq!(config.storage.file_suffix, ".txt");
        assert_eq!(config.limits.vacation_days_per_year, 31);
        assert_eq!(config.limits.parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn test_missing_matrix_section_fails() {
        assert!(AppConfig::parse("storage:\n  data_dir: x\n").is_err());
    }
}
