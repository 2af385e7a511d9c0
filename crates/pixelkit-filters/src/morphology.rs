//! Grayscale morphology with a square structuring element.
//!
//! Dilation takes the per-channel maximum over the window, erosion the
//! minimum. The square window is separable, so each pass runs as a horizontal
//! sweep followed by a vertical one.

use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, FilterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphOp {
    Dilate,
    Erode,
    /// Erode then dilate.
    Open,
    /// Dilate then erode.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphologyParams {
    pub operation: MorphOp,
    /// Half-width of the square window; 0 is the identity.
    pub radius: u32,
}

#[derive(Clone, Copy)]
enum Extremum {
    Max,
    Min,
}

fn sweep(
    src: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    horizontal: bool,
    ext: Extremum,
) -> Vec<u8> {
    let mut out = src.to_vec();
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 4;
            let (lo, hi, fixed) = if horizontal {
                (x.saturating_sub(radius), (x + radius).min(width - 1), y)
            } else {
                (y.saturating_sub(radius), (y + radius).min(height - 1), x)
            };
            for c in 0..3 {
                let mut acc = match ext {
                    Extremum::Max => 0u8,
                    Extremum::Min => 255u8,
                };
                for k in lo..=hi {
                    let j = if horizontal {
                        (fixed * width + k) * 4
                    } else {
                        (k * width + fixed) * 4
                    };
                    acc = match ext {
                        Extremum::Max => acc.max(src[j + c]),
                        Extremum::Min => acc.min(src[j + c]),
                    };
                }
                out[idx + c] = acc;
            }
        }
    }
    out
}

fn extremum(src: &[u8], width: usize, height: usize, radius: usize, ext: Extremum) -> Vec<u8> {
    let pass = sweep(src, width, height, radius, true, ext);
    sweep(&pass, width, height, radius, false, ext)
}

/// Applies a morphological operation; alpha is preserved.
pub fn morphology(
    pixels: &[u8],
    width: u32,
    height: u32,
    params: &MorphologyParams,
) -> FilterResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;
    if params.radius == 0 || width == 0 || height == 0 {
        return Ok(pixels.to_vec());
    }

    let (w, h, r) = (width as usize, height as usize, params.radius as usize);
    let out = match params.operation {
        MorphOp::Dilate => extremum(pixels, w, h, r, Extremum::Max),
        MorphOp::Erode => extremum(pixels, w, h, r, Extremum::Min),
        MorphOp::Open => {
            let eroded = extremum(pixels, w, h, r, Extremum::Min);
            extremum(&eroded, w, h, r, Extremum::Max)
        }
        MorphOp::Close => {
            let dilated = extremum(pixels, w, h, r, Extremum::Max);
            extremum(&dilated, w, h, r, Extremum::Min)
        }
    };
    Ok(out)
}
