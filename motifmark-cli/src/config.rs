//! Configuration handling for the motifmark CLI
//!
//! Supports loading configuration from motifmark.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use motifmark_export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "motifmark.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Image format used when neither --format nor the output extension decide
    #[serde(default)]
    pub format: ExportFormat,

    /// Directory for outputs named after the FASTA file
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Font family written into SVG text elements
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

// Default value functions
fn default_directory() -> PathBuf { PathBuf::from(".") }
fn default_font_family() -> String { "sans-serif".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            directory: default_directory(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find motifmark.toml in current directory
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        Self::default().to_toml()
    }
}
