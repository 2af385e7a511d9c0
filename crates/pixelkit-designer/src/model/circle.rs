use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
    #[serde(default)]
    pub filled: bool,
}

impl CircleShape {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            filled: false,
        }
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }
}

impl RasterShape for CircleShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        let (fx, fy) = (self.center.x.round(), self.center.y.round());
        let r = self.radius.max(0.0);

        if self.filled {
            raster::fill_disc(buf, fx, fy, r, style.color);
            return;
        }

        let half = style.half_stroke();
        let inner = (r - half).max(0.0);
        let outer = r + half;
        let reach = outer.ceil();
        let Some((top, bottom)) = raster::clip_range(fy - reach, fy + reach, buf.height()) else {
            return;
        };
        for y in top..=bottom {
            let dy = y as f64 - fy;
            let span = (outer * outer - dy * dy).max(0.0).sqrt().ceil();
            let Some((left, right)) = raster::clip_range(fx - span, fx + span, buf.width()) else {
                continue;
            };
            for x in left..=right {
                let dx = x as f64 - fx;
                let d = (dx * dx + dy * dy).sqrt();
                if d >= inner && d <= outer {
                    buf.set_pixel(x, y, style.color);
                }
            }
        }
    }

    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool {
        let d = self.center.distance_to(&p);
        let half = stroke_width as f64 / 2.0;
        if self.filled {
            d <= self.radius + half
        } else {
            (d - self.radius).abs() <= half + tolerance
        }
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        let r = if self.filled {
            self.radius
        } else {
            self.radius + stroke_width as f64 / 2.0
        };
        BoundingBox::new(self.center.x - r, self.center.y - r, r * 2.0, r * 2.0)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
    }

    /// Center, then right, bottom, left and top radius handles.
    fn control_points(&self) -> Vec<Point> {
        let Point { x, y } = self.center;
        let r = self.radius;
        vec![
            self.center,
            Point::new(x + r, y),
            Point::new(x, y + r),
            Point::new(x - r, y),
            Point::new(x, y - r),
        ]
    }

    fn move_control_point(&mut self, index: usize, pos: Point) -> bool {
        match index {
            0 if pos != self.center => {
                self.center = pos;
                true
            }
            1..=4 => {
                let radius = self.center.distance_to(&pos);
                if radius == self.radius {
                    return false;
                }
                self.radius = radius;
                true
            }
            _ => false,
        }
    }
}
