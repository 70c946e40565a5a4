//! Configuration management for sidenote.
//!
//! Parses `sidenote.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [engine]
//! plugins = ["heading", "bold", "italic"]  # default: every built-in plugin
//! disabled = ["hr"]
//!
//! [preview]
//! max_length = 40
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenote.toml";

/// Preview length used when `[preview]` is absent.
pub const DEFAULT_PREVIEW_LENGTH: usize = 30;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown engine configuration.
    pub engine: EngineConfig,
    /// Note preview configuration.
    pub preview: PreviewConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markdown engine configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Built-in plugins to register, by name. `None` selects all of them.
    pub plugins: Option<Vec<String>>,
    /// Plugins removed from the selection.
    pub disabled: Vec<String>,
}

impl EngineConfig {
    /// Whether the plugin `name` is selected by this configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use sidenote_config::EngineConfig;
    ///
    /// let config = EngineConfig {
    ///     plugins: None,
    ///     disabled: vec!["hr".to_owned()],
    /// };
    /// assert!(config.is_enabled("bold"));
    /// assert!(!config.is_enabled("hr"));
    /// ```
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        let selected = self
            .plugins
            .as_ref()
            .is_none_or(|plugins| plugins.iter().any(|p| p == name));
        selected && !self.disabled.iter().any(|d| d == name)
    }
}

/// Note preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Maximum preview length in characters (before the ellipsis).
    pub max_length: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-blank.
fn require_non_blank(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenote.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_engine()?;
        self.validate_preview()?;
        Ok(())
    }

    fn validate_engine(&self) -> Result<(), ConfigError> {
        if let Some(plugins) = &self.engine.plugins {
            let mut seen = HashSet::with_capacity(plugins.len());
            for name in plugins {
                require_non_blank(name, "engine.plugins entry")?;
                if !seen.insert(name.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "engine.plugins lists '{name}' more than once"
                    )));
                }
            }
        }
        for name in &self.engine.disabled {
            require_non_blank(name, "engine.disabled entry")?;
        }
        Ok(())
    }

    fn validate_preview(&self) -> Result<(), ConfigError> {
        if self.preview.max_length == 0 {
            return Err(ConfigError::Validation(
                "preview.max_length must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
