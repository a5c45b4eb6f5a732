//! Configuration management for udatetime
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{LOCALE_ENGLISH_US, TEMPLATE_DATE, TEMPLATE_DATETIME};
use crate::format::{validate_template, DateStyle, TimeStyle};
use crate::locale;
use crate::timezone::TimeZone;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formatting: FormattingConfig,
    pub logging: LoggingConfig,
}

/// Formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Style preset for the date half of styled output
    pub date_style: DateStyle,
    /// Style preset for the time half of styled output
    pub time_style: TimeStyle,
    /// Time zone identifier (e.g. "UTC", "Europe/Stockholm")
    pub time_zone: String,
    /// Locale identifier (e.g. "en_US", "sv_SE", "en-GB")
    pub locale: String,
    /// Template for fixed-template output
    pub template: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log level: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            date_style: DateStyle::Medium,
            time_style: TimeStyle::Medium,
            time_zone: "UTC".to_string(),
            locale: LOCALE_ENGLISH_US.to_string(),
            template: TEMPLATE_DATETIME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
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
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("udatetime.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("udatetime").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate the time zone identifier
        if TimeZone::from_identifier(&self.formatting.time_zone).is_none() {
            anyhow::bail!("Unknown time_zone '{}'", self.formatting.time_zone);
        }

        // Validate the locale identifier
        if locale::from_identifier(&self.formatting.locale).is_none() {
            anyhow::bail!("Unknown locale '{}'", self.formatting.locale);
        }

        // Validate the template
        if let Err(e) = validate_template(&self.formatting.template) {
            anyhow::bail!("Invalid template '{}': {}", self.formatting.template, e);
        }

        // Validate the log level
        let valid_levels = ["off", "error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "log level must be one of {}, got '{}'",
                valid_levels.join(", "),
                self.logging.level
            );
        }

        Ok(())
    }

    /// Get the time zone named by the configuration
    pub fn resolve_time_zone(&self) -> TimeZone {
        TimeZone::from_identifier(&self.formatting.time_zone).unwrap_or_else(TimeZone::utc)
    }

    /// Get the locale named by the configuration
    pub fn resolve_locale(&self) -> chrono::Locale {
        locale::from_identifier_or_default(&self.formatting.locale)
    }

    /// Get the log level named by the configuration
    pub fn resolve_log_level(&self) -> log::LevelFilter {
        match self.logging.level.as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# udatetime Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(TEMPLATE_DATE)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("Default configuration written to: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("udatetime"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
