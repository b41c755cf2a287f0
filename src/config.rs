//! Configuration management for the Event Board
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::board::EventBoard;
use crate::calendar::{CalendarOptions, ViewKind};
use crate::constants::{
    CONFIG_GENERATED, MEDIUM_BREAKPOINT_DEFAULT, SIDEBAR_DEFAULT_PERCENT, SIDEBAR_MAX_PERCENT, SIDEBAR_MIN_PERCENT,
};
use crate::theme::{ColorRole, Palette, ThemeMode};
use crate::utils::{color::parse_hex_color, datetime};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Palette mode: "dark" or "light"
    pub theme: ThemeMode,
    /// Terminal width (columns) at or above which sidebar and grid sit side by side
    pub medium_breakpoint: u16,
    /// Sidebar share of the width, in percent, in side-by-side layout
    pub sidebar_percent: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Per-role color overrides, role name -> "#rrggbb"
    pub colors: HashMap<String, String>,
}

/// Calendar widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// View shown on startup: "month", "week" or "day"
    pub initial_view: ViewKind,
    /// Date focused on startup (YYYY-MM-DD); today when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    /// Events shown per month cell before "+N more" (0 = as many as fit)
    pub day_max_events: usize,
    /// Allow moving and resizing events
    pub editable: bool,
    /// Allow range selection to create events
    pub selectable: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log entries to a file in the data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            medium_breakpoint: MEDIUM_BREAKPOINT_DEFAULT,
            sidebar_percent: SIDEBAR_DEFAULT_PERCENT,
            mouse_enabled: true,
            colors: HashMap::new(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewKind::Month,
            initial_date: None,
            day_max_events: 0,
            editable: true,
            selectable: true,
        }
    }
}

impl UiConfig {
    /// Palette for the configured mode with overrides applied
    pub fn palette(&self) -> Palette {
        Palette::with_overrides(self.theme, &self.colors)
    }
}

impl CalendarConfig {
    /// Calendar options seeded with the board's initial event
    pub fn calendar_options(&self, today: NaiveDate) -> Result<CalendarOptions> {
        let initial_date = match &self.initial_date {
            Some(raw) => datetime::parse_date(raw).with_context(|| format!("Invalid initial_date '{}'", raw))?,
            None => today,
        };
        Ok(CalendarOptions {
            initial_view: self.initial_view,
            initial_date,
            today,
            editable: self.editable,
            selectable: self.selectable,
            day_max_events: self.day_max_events,
            initial_events: vec![EventBoard::seed_event()],
        })
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
        let current_dir_config = PathBuf::from("eventboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("eventboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_percent < SIDEBAR_MIN_PERCENT || self.ui.sidebar_percent > SIDEBAR_MAX_PERCENT {
            anyhow::bail!(
                "sidebar_percent must be between {} and {}, got {}",
                SIDEBAR_MIN_PERCENT,
                SIDEBAR_MAX_PERCENT,
                self.ui.sidebar_percent
            );
        }

        if self.ui.medium_breakpoint == 0 {
            anyhow::bail!("medium_breakpoint must be greater than 0");
        }

        for (role, hex) in &self.ui.colors {
            if let Err(e) = role.parse::<ColorRole>() {
                anyhow::bail!("Invalid [ui.colors] entry: {}", e);
            }
            if parse_hex_color(hex).is_none() {
                anyhow::bail!("Invalid color '{}' for role '{}', expected #rrggbb", hex, role);
            }
        }

        if let Some(raw) = &self.calendar.initial_date {
            if let Err(e) = datetime::parse_date(raw) {
                anyhow::bail!("Invalid initial_date '{}': {}", raw, e);
            }
        }

        if self.calendar.day_max_events > 50 {
            anyhow::bail!("day_max_events cannot exceed 50");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Event Board Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("eventboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
