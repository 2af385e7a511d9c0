//! Editor configuration for PixelKit
//!
//! Settings are grouped into sections:
//! - Canvas (dimensions and background color)
//! - History (undo depth)
//! - Interaction (pointer hit tolerances)
//! - Export (default encoding)
//!
//! Files are read and written as JSON or TOML depending on their extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use pixelkit_core::{Color, ExportFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
const APP_DIR: &str = "pixelkit";
/// Default settings file name inside [`EditorSettings::config_dir`].
const CONFIG_FILE: &str = "settings.toml";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color the canvas is cleared to before shapes are drawn
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots retained
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 50 }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Extra distance in pixels accepted when hit-testing stroked shapes
    pub hit_tolerance: f64,
    /// Radius in pixels within which a control point handle is grabbed
    pub handle_tolerance: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: 6.0,
            handle_tolerance: 8.0,
        }
    }
}

/// Export encoding kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    #[default]
    Png,
    Jpeg,
    Ppm,
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Jpeg => write!(f, "jpeg"),
            Self::Ppm => write!(f, "ppm"),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub format: ExportKind,
    /// JPEG quality, 1..=100
    pub jpeg_quality: u8,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportKind::Png,
            jpeg_quality: 90,
        }
    }
}

impl ExportSettings {
    pub fn to_export_format(&self) -> ExportFormat {
        match self.format {
            ExportKind::Png => ExportFormat::Png,
            ExportKind::Jpeg => ExportFormat::Jpeg {
                quality: self.jpeg_quality,
            },
            ExportKind::Ppm => ExportFormat::Ppm,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas: CanvasSettings,
    pub history: HistorySettings,
    pub interaction: InteractionSettings,
    pub export: ExportSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl EditorSettings {
    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let settings: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate all settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "Canvas dimensions must be > 0",
            ));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid(
                "history.max_depth",
                "History depth must be >= 1",
            ));
        }

        for (key, value) in [
            ("interaction.hit_tolerance", self.interaction.hit_tolerance),
            (
                "interaction.handle_tolerance",
                self.interaction.handle_tolerance,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::invalid(
                    key,
                    "Tolerance must be a finite, non-negative number",
                ));
            }
        }

        if !(1..=100).contains(&self.export.jpeg_quality) {
            return Err(SettingsError::invalid(
                "export.jpeg_quality",
                "JPEG quality must be between 1 and 100",
            ));
        }

        Ok(())
    }

    /// Per-user configuration directory (`<config>/pixelkit`).
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "Could not determine the user configuration directory".to_string(),
                )
            })
    }

    pub fn default_config_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads `path` when it exists, otherwise returns defaults.
    ///
    /// An existing but invalid file is still an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}
