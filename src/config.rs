//! Configuration management for daykit
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Every section falls back to its defaults, so a partial (or empty) file is valid.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_CJK_LOCALE, DEFAULT_DATETIME_PATTERN,
    DEFAULT_DAY_PATTERN, DEFAULT_GROUP_SEPARATOR, DEFAULT_SEPARATOR, DEFAULT_TEXT_LOCALE,
};
use crate::date::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub date: DateConfig,
    pub number: NumberConfig,
    pub sort: SortConfig,
    pub logging: LoggingConfig,
}

/// Date helper defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Pattern for full date-times
    pub pattern: String,
    /// Pattern for day boundaries (start/end of day, week, month, year)
    pub day_pattern: String,
    /// Separator rewritten to `/` by `normalize_separators`
    pub separator: String,
    /// Language of relative-time labels: "en" or "zh"
    pub language: Language,
}

/// Number formatting defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    /// Inserted between groups of three integer digits
    pub group_separator: String,
    /// Truncate the fraction to this many digits (unset = keep as is)
    pub decimal_places: Option<usize>,
}

/// Mixed sort collation locales
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// BCP-47 locale used when both values contain CJK characters
    pub cjk_locale: String,
    /// BCP-47 locale used for every other text comparison
    pub default_locale: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATETIME_PATTERN.to_string(),
            day_pattern: DEFAULT_DAY_PATTERN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            language: Language::default(),
        }
    }
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR.to_string(),
            decimal_places: None,
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            cjk_locale: DEFAULT_CJK_LOCALE.to_string(),
            default_locale: DEFAULT_TEXT_LOCALE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.date.pattern.is_empty() {
            anyhow::bail!("date.pattern cannot be empty");
        }
        if self.date.day_pattern.is_empty() {
            anyhow::bail!("date.day_pattern cannot be empty");
        }
        if self.date.separator.is_empty() {
            anyhow::bail!("date.separator cannot be empty");
        }

        if let Some(places) = self.number.decimal_places {
            if places > 20 {
                anyhow::bail!("number.decimal_places cannot exceed 20, got {}", places);
            }
        }

        for (key, locale) in [
            ("sort.cjk_locale", &self.sort.cjk_locale),
            ("sort.default_locale", &self.sort.default_locale),
        ] {
            if locale.parse::<icu_locale::Locale>().is_err() {
                anyhow::bail!("Invalid {} '{}': not a BCP-47 locale", key, locale);
            }
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging.level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# daykit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
