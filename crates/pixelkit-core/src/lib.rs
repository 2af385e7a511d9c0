//! # PixelKit Core
//!
//! Core types shared by the PixelKit crates:
//! - **Geometry**: [`Point`], [`BoundingBox`]
//! - **Color**: 8-bit RGBA [`Color`]
//! - **Identity**: process-unique [`ShapeId`]
//! - **Pixels**: the owned RGBA [`PixelBuffer`] arena and decoded [`RawImage`] data

pub mod buffer;
pub mod error;
pub mod types;

pub use buffer::{ExportFormat, PixelBuffer, RawImage};
pub use error::{CoreError, Result};
pub use types::{BoundingBox, Color, Point, ShapeId};
