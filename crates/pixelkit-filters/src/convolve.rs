//! Convolution filters.
//!
//! Gaussian blur goes through `image::imageops::blur`; every other kernel is a
//! square odd-sized matrix applied with clamped edges. Alpha is never
//! convolved so edge kernels that sum to zero keep the image opaque.

use serde::{Deserialize, Serialize};

use pixelkit_core::RawImage;

use crate::error::{check_dimensions, FilterError, FilterResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Kernel {
    BoxBlur {
        radius: u32,
    },
    GaussianBlur {
        sigma: f32,
    },
    Sharpen,
    EdgeDetect,
    Emboss,
    /// Row-major `size` x `size` weights; `size` must be odd.
    Custom {
        size: usize,
        weights: Vec<f32>,
        #[serde(default)]
        divisor: Option<f32>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolveParams {
    pub kernel: Kernel,
}

/// A validated square kernel.
struct Matrix {
    size: usize,
    weights: Vec<f32>,
    divisor: f32,
}

impl Matrix {
    fn from_kernel(kernel: &Kernel) -> FilterResult<Option<Self>> {
        let (size, weights, divisor) = match kernel {
            Kernel::GaussianBlur { .. } => return Ok(None),
            Kernel::BoxBlur { radius } => {
                let size = *radius as usize * 2 + 1;
                (size, vec![1.0; size * size], None)
            }
            Kernel::Sharpen => (3, vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0], None),
            Kernel::EdgeDetect => (
                3,
                vec![-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
                None,
            ),
            Kernel::Emboss => (3, vec![-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0], None),
            Kernel::Custom {
                size,
                weights,
                divisor,
            } => (*size, weights.clone(), *divisor),
        };

        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "size must be odd and positive, got {size}"
            )));
        }
        if weights.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for size {size}, got {}",
                size * size,
                weights.len()
            )));
        }

        let divisor = match divisor {
            Some(d) if d != 0.0 => d,
            Some(_) => {
                return Err(FilterError::InvalidKernel("divisor must be non-zero".into()));
            }
            None => {
                let sum: f32 = weights.iter().sum();
                if sum.abs() > f32::EPSILON {
                    sum
                } else {
                    1.0
                }
            }
        };

        Ok(Some(Self {
            size,
            weights,
            divisor,
        }))
    }

    fn apply(&self, pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
        let half = (self.size / 2) as i64;
        let mut out = pixels.to_vec();
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let mut acc = [0f32; 3];
                for ky in 0..self.size as i64 {
                    let sy = (y + ky - half).clamp(0, height as i64 - 1) as usize;
                    for kx in 0..self.size as i64 {
                        let sx = (x + kx - half).clamp(0, width as i64 - 1) as usize;
                        let w = self.weights[(ky as usize) * self.size + kx as usize];
                        let idx = (sy * width + sx) * 4;
                        for (c, slot) in acc.iter_mut().enumerate() {
                            *slot += pixels[idx + c] as f32 * w;
                        }
                    }
                }
                let idx = (y as usize * width + x as usize) * 4;
                for (c, v) in acc.iter().enumerate() {
                    out[idx + c] = (v / self.divisor).round().clamp(0.0, 255.0) as u8;
                }
            }
        }
        out
    }
}

/// Convolves the RGB channels with `params.kernel`.
pub fn convolve(
    pixels: &[u8],
    width: u32,
    height: u32,
    params: &ConvolveParams,
) -> FilterResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;
    if width == 0 || height == 0 {
        return Ok(pixels.to_vec());
    }

    match Matrix::from_kernel(&params.kernel)? {
        Some(matrix) => Ok(matrix.apply(pixels, width as usize, height as usize)),
        None => {
            let Kernel::GaussianBlur { sigma } = params.kernel else {
                return Ok(pixels.to_vec());
            };
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(FilterError::InvalidParameter {
                    name: "sigma".to_string(),
                    reason: format!("must be positive, got {sigma}"),
                });
            }
            let img = RawImage::new(width, height, pixels.to_vec())?.to_rgba_image()?;
            let mut blurred = image::imageops::blur(&img, sigma).into_raw();
            // keep the source alpha
            for (dst, src) in blurred.chunks_exact_mut(4).zip(pixels.chunks_exact(4)) {
                dst[3] = src[3];
            }
            Ok(blurred)
        }
    }
}
