//! # PixelKit Filters
//!
//! Pure pixel-processing functions used to pre-process raster image inserts.
//! Every filter takes RGBA bytes plus dimensions and returns new RGBA bytes:
//!
//! - [`binarize`]: fixed or Otsu threshold to black/white
//! - [`morphology`]: dilate/erode/open/close with a square window
//! - [`normalize`]: histogram stretch or equalization
//! - [`convolve`]: blur, sharpen, edge and custom kernels
//!
//! [`FilterPipeline`] bundles optional parameters for each stage and is what
//! image shapes persist.

pub mod binarize;
pub mod convolve;
pub mod error;
pub mod morphology;
pub mod normalize;
pub mod pipeline;

pub use binarize::{binarize, otsu_threshold, BinarizeParams};
pub use convolve::{convolve, ConvolveParams, Kernel};
pub use error::{FilterError, FilterResult};
pub use morphology::{morphology, MorphOp, MorphologyParams};
pub use normalize::{normalize, NormalizeMode, NormalizeParams};
pub use pipeline::FilterPipeline;
