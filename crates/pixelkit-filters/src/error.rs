//! Error types for the filters crate.

use thiserror::Error;

/// Errors that can occur while applying a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Pixel data does not match the declared dimensions.
    #[error("Pixel data length {actual} does not match {width}x{height} RGBA")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// A convolution kernel is malformed.
    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),

    /// A filter parameter is out of range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Core buffer error.
    #[error(transparent)]
    Core(#[from] pixelkit_core::CoreError),
}

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Checks that `pixels` is exactly `width * height` RGBA pixels.
pub(crate) fn check_dimensions(pixels: &[u8], width: u32, height: u32) -> FilterResult<()> {
    if pixels.len() != width as usize * height as usize * 4 {
        return Err(FilterError::DimensionMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }
    Ok(())
}
