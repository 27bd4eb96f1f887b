//! Configuration module
//!
//! Settings are read from a TOML file given with `--config`. Command-line
//! flags always win over values from the file.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shdoc_core::{CommentMarker, DEFAULT_MARKER};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Comment parsing configuration
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// File extension to `language` template value
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

/// Comment parsing configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Line-comment marker
    pub marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// HTML template used instead of the bundled one
    pub template: Option<PathBuf>,

    /// Document title used when `--title` is absent
    pub title: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured comment marker
    pub fn marker(&self) -> Result<CommentMarker, CliError> {
        CommentMarker::new(self.parser.marker.as_str())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Check values that parse fine but cannot be used
    pub fn validate(&self) -> Result<(), CliError> {
        self.marker()?;

        if let Some(template) = &self.output.template {
            if !template.is_file() {
                return Err(CliError::ConfigError(format!(
                    "template not found: {}",
                    template.display()
                )));
            }
        }

        if let Some(ext) = self.languages.keys().find(|ext| ext.is_empty()) {
            return Err(CliError::ConfigError(format!(
                "empty extension in [languages] (mapped to {:?})",
                self.languages[ext]
            )));
        }

        Ok(())
    }
}
