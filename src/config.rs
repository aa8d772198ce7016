//! Configuration for the file lookup
//!
//! Handles loading and merging configuration from multiple sources:
//! - Default values
//! - System configuration (/etc/file-lookup/config.toml)
//! - User configuration (~/.config/file-lookup/config.toml)
//! - Project configuration (./file-lookup.toml)
//! - Environment variables
//!
//! Command-line arguments are applied on top by the binary.

use crate::lookup::{LookupContext, ReadStrategy};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base directory for relative lookup paths
    pub base_dir: Option<PathBuf>,

    /// How missing files are detected
    pub read_strategy: ReadStrategy,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Partial configuration as read from a single file; unset fields keep
/// whatever earlier sources provided.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    base_dir: Option<PathBuf>,
    read_strategy: Option<ReadStrategy>,
    logging: LoggingLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggingLayer {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl LookupConfig {
    /// Load configuration from all sources.
    ///
    /// With an explicit path only that file is read and it must exist.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = LookupConfig::default();

        if let Some(path) = config_path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            config.merge_from_file(path)?;
        } else {
            for path in Self::get_config_paths() {
                if path.exists() {
                    config.merge_from_file(&path)?;
                }
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Get the list of configuration file paths to check, lowest priority first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/file-lookup/config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("file-lookup/config.toml"));
        }

        paths.push(PathBuf::from("file-lookup.toml"));
        paths
    }

    /// Merge configuration from a file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let layer: ConfigLayer = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            _ => toml::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        tracing::debug!(path = %path.display(), "loaded config file");
        self.merge(layer);
        Ok(())
    }

    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(base_dir) = layer.base_dir {
            self.base_dir = Some(base_dir);
        }
        if let Some(strategy) = layer.read_strategy {
            self.read_strategy = strategy;
        }
        if let Some(level) = layer.logging.level {
            self.logging.level = level;
        }
        if let Some(format) = layer.logging.format {
            self.logging.format = format;
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // FILE_LOOKUP_BASE_DIR
        if let Ok(dir) = std::env::var("FILE_LOOKUP_BASE_DIR") {
            self.base_dir = Some(PathBuf::from(dir));
        }

        // FILE_LOOKUP_READ_STRATEGY
        if let Ok(strategy) = std::env::var("FILE_LOOKUP_READ_STRATEGY") {
            self.read_strategy = strategy
                .parse::<ReadStrategy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid FILE_LOOKUP_READ_STRATEGY")?;
        }

        // FILE_LOOKUP_LOG_LEVEL
        if let Ok(level) = std::env::var("FILE_LOOKUP_LOG_LEVEL") {
            self.logging.level = level;
        }

        // FILE_LOOKUP_LOG_FORMAT
        if let Ok(format) = std::env::var("FILE_LOOKUP_LOG_FORMAT") {
            self.logging.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => bail!("Invalid FILE_LOOKUP_LOG_FORMAT '{}'", other),
            };
        }

        Ok(())
    }

    /// Build a lookup context from this configuration
    pub fn to_context(&self) -> LookupContext {
        LookupContext {
            base_dir: self.base_dir.clone(),
            ..LookupContext::default()
        }
    }
}
