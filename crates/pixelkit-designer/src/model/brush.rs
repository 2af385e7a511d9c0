use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

/// Freehand stroke: a disc of radius `size` stamped along the sampled trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushShape {
    pub points: Vec<Point>,
    pub size: f64,
}

impl BrushShape {
    pub fn new(points: Vec<Point>, size: f64) -> Self {
        Self { points, size }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    fn radius(&self) -> f64 {
        self.size.max(1.0)
    }
}

impl RasterShape for BrushShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        let radius = self.radius().min(raster::MAX_STROKE_WIDTH as f64);
        match self.points.as_slice() {
            [] => {}
            [only] => {
                let (x, y) = raster::pixel(*only);
                raster::stamp_disc(buf, x, y, radius, style.color);
            }
            points => {
                for pair in points.windows(2) {
                    let Some((a, b)) = raster::clip_segment(buf, pair[0], pair[1], radius + 2.0)
                    else {
                        continue;
                    };
                    let (x0, y0) = raster::pixel(a);
                    let (x1, y1) = raster::pixel(b);
                    raster::bresenham(x0, y0, x1, y1, |x, y| {
                        raster::stamp_disc(buf, x, y, radius, style.color)
                    });
                }
            }
        }
    }

    fn contains_point(&self, p: Point, _stroke_width: u32, tolerance: f64) -> bool {
        let reach = self.radius() + tolerance;
        let reach_sq = reach * reach;
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance_sq(&p) <= reach_sq,
            points => points
                .windows(2)
                .any(|pair| raster::segment_distance_sq(p, pair[0], pair[1]) <= reach_sq),
        }
    }

    fn bounding_box(&self, _stroke_width: u32) -> BoundingBox {
        BoundingBox::from_points(&self.points)
            .map(|bb| bb.inflate(self.radius()))
            .unwrap_or_default()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn control_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn move_control_point(&mut self, index: usize, pos: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) if *p != pos => {
                *p = pos;
                true
            }
            _ => false,
        }
    }

    fn shows_handles(&self) -> bool {
        false
    }
}
