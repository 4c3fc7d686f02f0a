use crate::color::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Construction-time settings of a ring. No field has a default here; the
/// embedded default config supplies them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RingSettings {
    pub stroke_width: u32,
    pub radius: u32,
    pub background: Color,
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CanvasSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellLayer {
    Background,
    Bottom,
    Top,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowSettings {
    #[serde(default = "default_autostart")]
    pub autostart: bool,
    #[serde(default)]
    pub layer: Option<ShellLayer>,
}

fn default_autostart() -> bool {
    true
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            autostart: default_autostart(),
            layer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArcSettings {
    pub begin: f64,
    pub end: f64,
    pub color: Color,
    #[serde(default)]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub ring: RingSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub arcs: Vec<ArcSettings>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to write config: {0}")]
    Io(#[from] std::io::Error),
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "gyre", "gyre").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn layered(user_file: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder().add_source(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    ));
    if let Some(path) = user_file {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let s = builder
        .add_source(
            config::Environment::with_prefix("GYRE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Default config, overlaid by the user's file and `GYRE_` variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = get_config_path()?;
    layered(Some(&path))
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    layered(Some(path))
}

pub fn default_config() -> Result<Config, ConfigError> {
    layered(None)
}

/// Falls back to the built-in config when the user's file is unusable.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_config().or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        default_config()
    })
}

/// Writes the default config unless one exists. Returns its path.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config().unwrap();
        assert_eq!(config.ring.stroke_width, 6);
        assert_eq!(config.ring.radius, 180);
        assert_eq!(config.ring.fps, 60);
        assert_eq!(config.ring.background.to_string(), "#101014");
        assert_eq!(config.canvas, CanvasSettings::default());
        assert!(config.window.autostart);
        assert_eq!(config.window.layer, None);
        assert_eq!(config.arcs.len(), 4);
        assert_eq!(config.arcs[1].width, Some(8.0));
        assert!(config.arcs.iter().all(|a| a.begin != a.end));
    }

    #[test]
    fn test_shell_layer_deserialization() {
        let cases = vec![
            ("\"background\"", ShellLayer::Background),
            ("\"bottom\"", ShellLayer::Bottom),
            ("\"top\"", ShellLayer::Top),
            ("\"overlay\"", ShellLayer::Overlay),
        ];

        for (json, expected) in cases {
            let deserialized: ShellLayer = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_sparse_sections_use_defaults() {
        let json = r##"{
            "ring": { "stroke_width": 3, "radius": 50, "background": "black", "fps": 30 },
            "arcs": [{ "begin": 0.0, "end": 1.0, "color": "#fff" }]
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.canvas.width, 480);
        assert!(config.window.autostart);
        assert_eq!(config.arcs[0].width, None);
    }

    #[test]
    fn test_missing_ring_section_is_an_error() {
        assert!(serde_json::from_str::<Config>(r#"{ "arcs": [] }"#).is_err());
    }
}
