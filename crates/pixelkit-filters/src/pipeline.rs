//! Ordered filter chain stored on image inserts.

use serde::{Deserialize, Serialize};

use pixelkit_core::RawImage;

use crate::binarize::{binarize, BinarizeParams};
use crate::convolve::{convolve, ConvolveParams};
use crate::error::FilterResult;
use crate::morphology::{morphology, MorphologyParams};
use crate::normalize::{normalize, NormalizeParams};

/// Filter settings applied as normalize → convolve → binarize → morphology.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPipeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize: Option<NormalizeParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convolve: Option<ConvolveParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binarize: Option<BinarizeParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morphology: Option<MorphologyParams>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.normalize.is_none()
            && self.convolve.is_none()
            && self.binarize.is_none()
            && self.morphology.is_none()
    }

    /// Runs every configured stage over `source`, returning a new image.
    pub fn apply(&self, source: &RawImage) -> FilterResult<RawImage> {
        let (w, h) = (source.width, source.height);
        let mut pixels = source.pixels.clone();

        if let Some(params) = &self.normalize {
            pixels = normalize(&pixels, w, h, params)?;
        }
        if let Some(params) = &self.convolve {
            pixels = convolve(&pixels, w, h, params)?;
        }
        if let Some(params) = &self.binarize {
            pixels = binarize(&pixels, w, h, params)?;
        }
        if let Some(params) = &self.morphology {
            pixels = morphology(&pixels, w, h, params)?;
        }

        tracing::debug!("Applied filter pipeline to {}x{} image", w, h);
        Ok(RawImage::new(w, h, pixels)?)
    }
}
