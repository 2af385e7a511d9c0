//! # PixelKit Settings
//!
//! Editor configuration: canvas dimensions and background, history depth,
//! pointer hit tolerances and export defaults. Settings are stored as TOML or
//! JSON in the platform config directory.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, EditorSettings, ExportSettings, ExportKind, HistorySettings,
    InteractionSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
