//! Configuration loading and validation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use somascope_scene::WorldSettings;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    AlphaOutOfRange { field: &'static str, value: f32 },
    #[error("grid spacing must be positive, got {value}")]
    InvalidGridSpacing { value: f32 },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial window width in logical pixels
    #[serde(default = "default_width")]
    pub width: f32,
    /// Initial window height in logical pixels
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "Somascope".to_string()
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    720.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Ground grid line spacing in millimeters
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f32,
    /// Ground grid opacity
    #[serde(default = "default_grid_alpha")]
    pub grid_alpha: f32,
    /// Section plane opacity
    #[serde(default = "default_plane_alpha")]
    pub plane_alpha: f32,
    /// Initial visibility of the section planes
    #[serde(default = "default_true")]
    pub show_planes: bool,
    /// Initial visibility of the ground grid
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Initial visibility of the world axes
    #[serde(default = "default_true")]
    pub show_axis: bool,
    /// Initial visibility of the landmark labels
    #[serde(default = "default_true")]
    pub show_labels: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_spacing: default_grid_spacing(),
            grid_alpha: default_grid_alpha(),
            plane_alpha: default_plane_alpha(),
            show_planes: true,
            show_grid: true,
            show_axis: true,
            show_labels: true,
        }
    }
}

fn default_grid_spacing() -> f32 {
    50.0
}

fn default_grid_alpha() -> f32 {
    0.25
}

fn default_plane_alpha() -> f32 {
    0.18
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Reject values the scene cannot render sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if !(0.0..=1.0).contains(&self.scene.grid_alpha) {
            return Err(ConfigError::AlphaOutOfRange {
                field: "grid_alpha",
                value: self.scene.grid_alpha,
            });
        }
        if !(0.0..=1.0).contains(&self.scene.plane_alpha) {
            return Err(ConfigError::AlphaOutOfRange {
                field: "plane_alpha",
                value: self.scene.plane_alpha,
            });
        }
        if self.scene.grid_spacing <= 0.0 {
            return Err(ConfigError::InvalidGridSpacing {
                value: self.scene.grid_spacing,
            });
        }
        Ok(())
    }

    /// Convert to the scene's WorldSettings resource
    pub fn to_world_settings(&self) -> WorldSettings {
        WorldSettings {
            show_grid: self.scene.show_grid,
            show_axis: self.scene.show_axis,
            show_labels: self.scene.show_labels,
            grid_spacing: self.scene.grid_spacing,
            grid_alpha: self.scene.grid_alpha,
            plane_alpha: self.scene.plane_alpha,
            ..WorldSettings::default()
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        config
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Somascope");
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.scene.grid_spacing, 50.0);
        assert!(config.scene.show_planes);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [window]
            title = "Orientation Lab"

            [scene]
            plane_alpha = 0.3
            show_grid = false
            "#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Orientation Lab");
        assert_eq!(config.window.height, 720.0);
        assert_eq!(config.scene.plane_alpha, 0.3);
        assert!(!config.scene.show_grid);
        assert!(config.scene.show_axis);
    }

    #[test]
    fn test_alpha_out_of_range_is_rejected() {
        let mut config = Config::default();
        config.scene.plane_alpha = 1.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::AlphaOutOfRange {
                field: "plane_alpha",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_window_size_is_rejected() {
        let mut config = Config::default();
        config.window.width = 0.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidWindowSize { .. }
        ));
    }

    #[test]
    fn test_world_settings_mapping() {
        let mut config = Config::default();
        config.scene.grid_alpha = 0.4;
        config.scene.show_labels = false;
        let settings = config.to_world_settings();
        assert_eq!(settings.grid_alpha, 0.4);
        assert!(!settings.show_labels);
        assert!(settings.show_grid);
    }
}
