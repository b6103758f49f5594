//! Whiteboard configuration.

use crate::color::Rgba;
use crate::ink::InkType;
use crate::tools::{EngineMode, MAX_LINE_WIDTH, MIN_LINE_WIDTH, ToolKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Initial state of a whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub engine: EngineMode,
    pub tool: ToolKind,
    pub ink: InkType,
    pub color: Rgba,
    pub width: f64,
    pub opacity: f64,
    pub background: Rgba,
    pub pressure_emulation: bool,
    pub ruler: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            engine: EngineMode::VectorPath,
            tool: ToolKind::Freehand,
            ink: InkType::Pencil,
            color: Rgba::BLACK,
            width: 2.0,
            opacity: 1.0,
            background: Rgba::WHITE,
            pressure_emulation: false,
            ruler: false,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that numeric values are within the ranges the controls allow.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.width) {
            return Err(ConfigError::OutOfRange {
                field: "width",
                value: self.width,
                expected: "1..=60",
            });
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::OutOfRange {
                field: "opacity",
                value: self.opacity,
                expected: "0..=1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r##"{"tool": "Ellipse", "color": "#336699"}"##).unwrap();
        assert_eq!(config.tool, ToolKind::Ellipse);
        assert_eq!(config.color, Rgba::rgb(0x33, 0x66, 0x99));
        assert_eq!(config.width, 2.0);
        assert_eq!(config.background, Rgba::WHITE);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = BoardConfig::from_json(r#"{"width": 90.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "width", .. }));

        let err = BoardConfig::from_json(r#"{"opacity": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "opacity", .. }));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = BoardConfig::from_json(r#"{"color": "blue"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BoardConfig {
            ink: InkType::Watercolor,
            pressure_emulation: true,
            ..BoardConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"engine": "BitmapInk", "ink": "Marker", "ruler": true}}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.engine, EngineMode::BitmapInk);
        assert_eq!(config.ink, InkType::Marker);
        assert!(config.ruler);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
