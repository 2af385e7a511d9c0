use std::sync::Arc;

use pixelkit_core::{BoundingBox, Color, PixelBuffer, Point, RawImage};
use pixelkit_filters::FilterPipeline;
use serde::{Deserialize, Serialize};

use super::rectangle::{corner_points, move_corner, normalize};
use super::{RasterShape, ShapeStyle};

/// Raster insert referencing pixels held by an image store.
///
/// `source` is resolved from `image_id` when the scene is loaded; `cache`
/// holds the source after the filter pipeline and is what gets blitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShape {
    pub image_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "FilterPipeline::is_empty")]
    pub filters: FilterPipeline,
    #[serde(skip)]
    source: Option<Arc<RawImage>>,
    #[serde(skip)]
    cache: Option<Arc<RawImage>>,
}

impl ImageShape {
    pub fn new(image_id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            image_id: image_id.into(),
            x,
            y,
            width,
            height,
            filters: FilterPipeline::default(),
            source: None,
            cache: None,
        }
    }

    /// Attaches resolved source pixels and rebuilds the cache.
    pub fn attach_source(&mut self, source: Arc<RawImage>) {
        self.source = Some(source);
        self.refresh_cache();
    }

    pub fn with_source(mut self, source: Arc<RawImage>) -> Self {
        self.attach_source(source);
        self
    }

    /// Replaces the filter pipeline and rebuilds the cache.
    pub fn set_filters(&mut self, filters: FilterPipeline) {
        self.filters = filters;
        self.refresh_cache();
    }

    pub fn is_resolved(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&Arc<RawImage>> {
        self.source.as_ref()
    }

    /// The filtered pixels that are drawn.
    pub fn cached(&self) -> Option<&Arc<RawImage>> {
        self.cache.as_ref()
    }

    fn refresh_cache(&mut self) {
        self.cache = self.source.as_ref().map(|src| {
            if self.filters.is_empty() {
                return Arc::clone(src);
            }
            match self.filters.apply(src) {
                Ok(filtered) => Arc::new(filtered),
                Err(e) => {
                    tracing::warn!(
                        "Filters failed for image '{}', drawing unfiltered: {}",
                        self.image_id,
                        e
                    );
                    Arc::clone(src)
                }
            }
        });
    }
}

impl RasterShape for ImageShape {
    /// Nearest-neighbour blit of the cache; fully transparent pixels are skipped.
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        if !style.visible {
            return;
        }
        let Some(img) = &self.cache else {
            return;
        };
        if img.width == 0 || img.height == 0 {
            return;
        }

        let bb = normalize(self.x, self.y, self.width, self.height);
        let (left, top) = (bb.x.round(), bb.y.round());
        let (dest_w, dest_h) = (bb.width.round(), bb.height.round());
        let drawable = dest_w >= 1.0 && dest_h >= 1.0 && !left.is_nan() && !top.is_nan();
        if !drawable {
            return;
        }

        // Destination offsets `lo..=hi` that land on a canvas axis of `len` pixels.
        let visible = |origin: f64, extent: f64, len: u32| {
            let lo = (-origin).max(0.0);
            let hi = (len as f64 - 1.0 - origin).min(extent - 1.0);
            (lo <= hi).then(|| (lo as i64, hi as i64))
        };
        let Some((col0, col1)) = visible(left, dest_w, buf.width()) else {
            return;
        };
        let Some((row0, row1)) = visible(top, dest_h, buf.height()) else {
            return;
        };

        let (src_w, src_h) = (img.width as i128, img.height as i128);
        let (dest_w, dest_h) = (dest_w as i128, dest_h as i128);
        for dy in row0..=row1 {
            let sy = (dy as i128 * src_h / dest_h) as usize;
            let y = (top + dy as f64) as i32;
            for dx in col0..=col1 {
                let sx = (dx as i128 * src_w / dest_w) as usize;
                let idx = (sy * img.width as usize + sx) * 4;
                let Some(px) = img.pixels.get(idx..idx + 4) else {
                    continue;
                };
                if px[3] == 0 {
                    continue;
                }
                if let Some(color) = Color::from_slice(px) {
                    buf.set_pixel((left + dx as f64) as i32, y, color);
                }
            }
        }
    }

    fn contains_point(&self, p: Point, _stroke_width: u32, _tolerance: f64) -> bool {
        normalize(self.x, self.y, self.width, self.height).contains(p)
    }

    fn bounding_box(&self, _stroke_width: u32) -> BoundingBox {
        normalize(self.x, self.y, self.width, self.height)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn control_points(&self) -> Vec<Point> {
        corner_points(self.x, self.y, self.width, self.height)
    }

    fn move_control_point(&mut self, index: usize, pos: Point) -> bool {
        let current = (self.x, self.y, self.width, self.height);
        match move_corner(current, index, pos) {
            Some(next) if next != current => {
                (self.x, self.y, self.width, self.height) = next;
                true
            }
            _ => false,
        }
    }
}
