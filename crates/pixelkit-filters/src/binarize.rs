//! Threshold binarization.
//!
//! Pixels are reduced to Rec. 601 luma and mapped to pure black or white.
//! Without an explicit threshold, Otsu's method picks one from the histogram.

use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, FilterResult};

/// Binarization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarizeParams {
    /// Fixed luma threshold; `None` selects Otsu's threshold.
    #[serde(default)]
    pub threshold: Option<u8>,
    /// Swap black and white in the output.
    #[serde(default)]
    pub invert: bool,
}

#[inline]
pub(crate) fn luma(px: &[u8]) -> u8 {
    let l = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
    l.round().clamp(0.0, 255.0) as u8
}

/// Otsu's threshold over a 256-bin histogram.
pub fn otsu_threshold(histogram: &[u64; 256]) -> u8 {
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 127;
    }
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut sum_bg = 0.0;
    let mut weight_bg = 0u64;
    let mut best = 0u8;
    let mut best_var = -1.0;

    for (t, &count) in histogram.iter().enumerate() {
        weight_bg += count;
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }
        sum_bg += t as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum_all - sum_bg) / weight_fg as f64;
        let between = weight_bg as f64 * weight_fg as f64 * (mean_bg - mean_fg).powi(2);
        if between > best_var {
            best_var = between;
            best = t as u8;
        }
    }
    best
}

/// Maps every pixel to black or white; alpha is preserved.
pub fn binarize(
    pixels: &[u8],
    width: u32,
    height: u32,
    params: &BinarizeParams,
) -> FilterResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    let threshold = match params.threshold {
        Some(t) => t,
        None => {
            let mut histogram = [0u64; 256];
            for px in pixels.chunks_exact(4) {
                histogram[luma(px) as usize] += 1;
            }
            otsu_threshold(&histogram)
        }
    };

    let mut out = Vec::with_capacity(pixels.len());
    for px in pixels.chunks_exact(4) {
        let bright = luma(px) > threshold;
        let v = if bright != params.invert { 255 } else { 0 };
        out.extend_from_slice(&[v, v, v, px[3]]);
    }
    Ok(out)
}
