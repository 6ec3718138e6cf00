//! Configuration file support for snapline.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/snapline/config.toml`. Settings include stroke appearance,
//! snapping, performance tuning, UI preferences and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::{ColorSpec, StatusPosition};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    DrawingConfig, HelpOverlayStyle, PerformanceConfig, SnapConfig, StatusBarStyle, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Example configuration written by `--init-config`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "black"
/// line_width = 2.0
///
/// [snap]
/// enabled = true
/// threshold = 30.0
///
/// [keybindings]
/// reset = ["Escape"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke and canvas appearance
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Snapping behavior
    #[serde(default)]
    pub snap: SnapConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `line_width`: 1.0 - 20.0
    /// - `snap.threshold`: 1.0 - 200.0
    /// - `snap.marker_radius`: 2.0 - 50.0
    /// - `buffer_count`: 2 - 4
    /// - color arrays: 0.0 - 1.0 per component
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.line_width
            );
            self.drawing.line_width = clamp_or(self.drawing.line_width, 1.0, 20.0, 2.0);
        }

        if !(1.0..=200.0).contains(&self.snap.threshold) {
            log::warn!(
                "Invalid snap threshold {:.1}, clamping to 1.0-200.0 range",
                self.snap.threshold
            );
            self.snap.threshold = clamp_or(self.snap.threshold, 1.0, 200.0, 30.0);
        }

        if !(2.0..=50.0).contains(&self.snap.marker_radius) {
            log::warn!(
                "Invalid snap marker_radius {:.1}, clamping to 2.0-50.0 range",
                self.snap.marker_radius
            );
            self.snap.marker_radius = clamp_or(self.snap.marker_radius, 2.0, 50.0, 6.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        clamp_color("drawing.background_color", &mut self.drawing.background_color);
        clamp_color(
            "ui.status_bar_style.bg_color",
            &mut self.ui.status_bar_style.bg_color,
        );
        clamp_color(
            "ui.status_bar_style.text_color",
            &mut self.ui.status_bar_style.text_color,
        );
        clamp_color(
            "ui.help_overlay_style.bg_color",
            &mut self.ui.help_overlay_style.bg_color,
        );
        clamp_color(
            "ui.help_overlay_style.text_color",
            &mut self.ui.help_overlay_style.text_color,
        );
    }

    /// Returns the directory holding the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn config_directory() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join("snapline"))
    }

    /// Returns the path to the configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_directory()?.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, returning defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

fn clamp_color(name: &str, color: &mut [f64; 4]) {
    for (i, component) in color.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(component) {
            log::warn!(
                "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                name,
                i,
                component
            );
            *component = clamp_or(*component, 0.0, 1.0, 1.0);
        }
    }
}
