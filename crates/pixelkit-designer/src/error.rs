//! Error types for the scene engine.

use pixelkit_core::CoreError;
use thiserror::Error;

/// Errors raised by image store lookups.
#[derive(Error, Debug)]
pub enum ImageStoreError {
    /// No record exists for the id.
    #[error("Image '{0}' not found")]
    NotFound(String),

    /// The id cannot be used as a record key (empty or contains a path separator).
    #[error("Invalid image id '{0}'")]
    InvalidId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors raised by whole-scene operations.
///
/// Per-shape failures during deserialization are not errors: a malformed
/// record is skipped and an unresolved image is reported in the load report.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The document's canvas size differs from the scene's buffer.
    #[error(
        "Scene dimensions {width}x{height} do not match canvas {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering or encoding the buffer failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SceneResult<T> = Result<T, SceneError>;
