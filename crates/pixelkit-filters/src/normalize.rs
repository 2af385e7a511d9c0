//! Histogram normalization.

use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, FilterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Linear per-channel stretch of `[min, max]` onto `[0, 255]`.
    #[default]
    Stretch,
    /// Per-channel histogram equalization.
    Equalize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeParams {
    #[serde(default)]
    pub mode: NormalizeMode,
}

fn channel_histogram(pixels: &[u8], channel: usize) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for px in pixels.chunks_exact(4) {
        hist[px[channel] as usize] += 1;
    }
    hist
}

fn stretch_lut(hist: &[u64; 256]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    let lo = hist.iter().position(|&c| c > 0);
    let hi = hist.iter().rposition(|&c| c > 0);
    match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => {
            let span = (hi - lo) as f64;
            for (v, slot) in lut.iter_mut().enumerate() {
                let t = (v as f64 - lo as f64) / span;
                *slot = (t * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
        _ => {
            for (v, slot) in lut.iter_mut().enumerate() {
                *slot = v as u8;
            }
        }
    }
    lut
}

fn equalize_lut(hist: &[u64; 256]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    let total: u64 = hist.iter().sum();
    let cdf_min = hist.iter().copied().find(|&c| c > 0).unwrap_or(0);
    if total == 0 || total == cdf_min {
        for (v, slot) in lut.iter_mut().enumerate() {
            *slot = v as u8;
        }
        return lut;
    }
    let mut cdf = 0u64;
    for (v, slot) in lut.iter_mut().enumerate() {
        cdf += hist[v];
        let scaled = (cdf.saturating_sub(cdf_min)) as f64 / (total - cdf_min) as f64 * 255.0;
        *slot = scaled.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Normalizes the RGB channels independently; alpha is preserved.
pub fn normalize(
    pixels: &[u8],
    width: u32,
    height: u32,
    params: &NormalizeParams,
) -> FilterResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    let luts: Vec<[u8; 256]> = (0..3)
        .map(|c| {
            let hist = channel_histogram(pixels, c);
            match params.mode {
                NormalizeMode::Stretch => stretch_lut(&hist),
                NormalizeMode::Equalize => equalize_lut(&hist),
            }
        })
        .collect();

    let mut out = pixels.to_vec();
    for px in out.chunks_exact_mut(4) {
        for (c, lut) in luts.iter().enumerate() {
            px[c] = lut[px[c] as usize];
        }
    }
    Ok(out)
}
