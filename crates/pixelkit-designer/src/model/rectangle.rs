use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

/// Axis-aligned rectangle. `width`/`height` may be negative while the user is
/// dragging a corner past its opposite; the box is normalized at draw time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub filled: bool,
}

impl RectangleShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            filled: false,
        }
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// The box with non-negative width and height.
    pub fn normalized(&self) -> BoundingBox {
        normalize(self.x, self.y, self.width, self.height)
    }

    /// Inclusive pixel corners `(x0, y0, x1, y1)` of the normalized box.
    fn pixel_bounds(&self) -> (i32, i32, i32, i32) {
        let bb = self.normalized();
        let (left, top) = (bb.x.round(), bb.y.round());
        let right = left + bb.width.round().max(1.0) - 1.0;
        let bottom = top + bb.height.round().max(1.0) - 1.0;
        (
            raster::pixel_coord(left),
            raster::pixel_coord(top),
            raster::pixel_coord(right),
            raster::pixel_coord(bottom),
        )
    }
}

pub(crate) fn normalize(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
    BoundingBox::new(
        x.min(x + width),
        y.min(y + height),
        width.abs(),
        height.abs(),
    )
}

/// Corner handles of a box: top-left, top-right, bottom-right, bottom-left.
pub(crate) fn corner_points(x: f64, y: f64, width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

/// Moves one corner, keeping the opposite corner fixed. Returns the new
/// `(x, y, width, height)`, or `None` for an unknown handle.
pub(crate) fn move_corner(
    (x, y, width, height): (f64, f64, f64, f64),
    index: usize,
    pos: Point,
) -> Option<(f64, f64, f64, f64)> {
    if index >= 4 {
        return None;
    }
    let opposite = corner_points(x, y, width, height)[(index + 2) % 4];
    let (x, width) = if matches!(index, 0 | 3) {
        (pos.x, opposite.x - pos.x)
    } else {
        (opposite.x, pos.x - opposite.x)
    };
    let (y, height) = if matches!(index, 0 | 1) {
        (pos.y, opposite.y - pos.y)
    } else {
        (opposite.y, pos.y - opposite.y)
    };
    Some((x, y, width, height))
}

impl RasterShape for RectangleShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        let (x0, y0, x1, y1) = self.pixel_bounds();
        let color = style.color;

        if self.filled {
            raster::fill_rect(buf, x0, y0, x1, y1, color);
            return;
        }

        let sw = style.stroke_width.clamp(1, raster::MAX_STROKE_WIDTH) as i32;
        let half = sw / 2;
        let band = |c: i32| (c - half, c - half + sw - 1);

        // Top and bottom bands run past both sides so the corners are square.
        let (top0, top1) = band(y0);
        let (bot0, bot1) = band(y1);
        let left = x0 - half;
        let right = x1 - half + sw - 1;
        raster::fill_rect(buf, left, top0, right, top1, color);
        raster::fill_rect(buf, left, bot0, right, bot1, color);

        // Side bands only between the horizontal bands.
        let (inner_top, inner_bottom) = (top1 + 1, bot0 - 1);
        if inner_top <= inner_bottom {
            let (l0, l1) = band(x0);
            let (r0, r1) = band(x1);
            raster::fill_rect(buf, l0, inner_top, l1, inner_bottom, color);
            raster::fill_rect(buf, r0, inner_top, r1, inner_bottom, color);
        }
    }

    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool {
        let bb = self.normalized();
        let reach = tolerance + stroke_width as f64 / 2.0;
        if self.filled {
            return bb.inflate(stroke_width as f64 / 2.0).contains(p);
        }
        let outer = bb.inflate(reach);
        if !outer.contains(p) {
            return false;
        }
        let inner = bb.inflate(-reach);
        inner.width <= 0.0 || inner.height <= 0.0 || !inner.contains(p)
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        if self.filled {
            self.normalized()
        } else {
            self.normalized().inflate(stroke_width as f64 / 2.0)
        }
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
