use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub start: Point,
    pub end: Point,
}

impl LineShape {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl RasterShape for LineShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        raster::draw_line(buf, self.start, self.end, style.stroke_width, style.color);
    }

    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool {
        let reach = tolerance + stroke_width as f64 / 2.0;
        raster::segment_distance_sq(p, self.start, self.end) <= reach * reach
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        BoundingBox::from_points(&[self.start, self.end])
            .unwrap_or_default()
            .inflate(stroke_width as f64 / 2.0)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn move_control_point(&mut self, index: usize, pos: Point) -> bool {
        let target = match index {
            0 => &mut self.start,
            1 => &mut self.end,
            _ => return false,
        };
        if *target == pos {
            return false;
        }
        *target = pos;
        true
    }
}
