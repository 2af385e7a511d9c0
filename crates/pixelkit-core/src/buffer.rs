//! Owned RGBA pixel storage.
//!
//! [`PixelBuffer`] is the fixed-size arena every shape rasterizes into. Pixels
//! are addressed as `(y * width + x) * 4 + channel`; all public accessors are
//! bounds checked so rasterizers may hand out-of-canvas coordinates freely.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, RgbaImage};

use crate::error::{CoreError, Result};
use crate::types::Color;

/// Encodings available for exporting a composited buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    /// Alpha is dropped; quality is clamped to 1..=100.
    Jpeg { quality: u8 },
    /// Binary PPM (P6), alpha dropped.
    Ppm,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
            ExportFormat::Ppm => "ppm",
        }
    }
}

/// Decoded RGBA pixels owned outside the scene (image store records, filter I/O).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Wraps RGBA bytes, validating the length against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(CoreError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A `width` x `height` image filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixels = color
            .to_array()
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Color::from_slice(&self.pixels[idx..idx + 4])
    }

    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            CoreError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected: self.width as usize * self.height as usize * 4,
                actual: self.pixels.len(),
            },
        )
    }
}

/// Fixed-size RGBA canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Writes one pixel; returns `false` when `(x, y)` is off-canvas.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.data[idx..idx + 4].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .and_then(|idx| Color::from_slice(&self.data[idx..idx + 4]))
    }

    /// Fills the inclusive horizontal span `x0..=x1` on row `y`, clipped to the canvas.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i32 - 1);
        if lo > hi {
            return;
        }
        let px = color.to_array();
        let row = y as usize * self.width as usize;
        for x in lo..=hi {
            let idx = (row + x as usize) * 4;
            self.data[idx..idx + 4].copy_from_slice(&px);
        }
    }

    /// Number of pixels whose value differs from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        let px = color.to_array();
        self.data.chunks_exact(4).filter(|c| *c != px).count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw_image(self) -> RawImage {
        RawImage {
            width: self.width,
            height: self.height,
            pixels: self.data,
        }
    }

    pub fn to_raw_image(&self) -> RawImage {
        self.clone().into_raw_image()
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        self.to_raw_image().to_rgba_image()
    }

    /// Encodes the buffer into `format`.
    ///
    /// A buffer with a zero dimension has nothing to encode and is rejected.
    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let rgba = self.to_rgba_image()?;
        let mut bytes = Vec::new();
        match format {
            ExportFormat::Png => {
                rgba.write_with_encoder(PngEncoder::new(&mut bytes))?;
            }
            ExportFormat::Jpeg { quality } => {
                let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
                rgb.write_with_encoder(JpegEncoder::new_with_quality(
                    &mut bytes,
                    quality.clamp(1, 100),
                ))?;
            }
            ExportFormat::Ppm => {
                let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
                let encoder = PnmEncoder::new(&mut bytes)
                    .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
                rgb.write_with_encoder(encoder)?;
            }
        }
        tracing::debug!(
            "Encoded {}x{} buffer as {} ({} bytes)",
            self.width,
            self.height,
            format.extension(),
            bytes.len()
        );
        Ok(bytes)
    }
}
