//! Error types for the core crate.
//!
//! Covers pixel buffer construction and image encoding failures.

use thiserror::Error;

/// Errors raised by core buffer operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Raw pixel data does not match the declared dimensions.
    #[error("Pixel data length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A buffer with a zero dimension was requested.
    #[error("Invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding the buffer into an image format failed.
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
