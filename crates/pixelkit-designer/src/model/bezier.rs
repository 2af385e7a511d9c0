use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

/// Control points required before the curve is rasterized.
pub const BEZIER_MIN_POINTS: usize = 4;
/// Uniform parameter steps used for both drawing and hit-testing.
pub const BEZIER_STEPS: usize = 200;
/// Accepted squared distance between a sampled curve point and the pointer.
const CURVE_HIT_DISTANCE_SQ: f64 = 16.0;

/// Bezier curve of arbitrary degree over its control-point sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierShape {
    pub points: Vec<Point>,
}

impl BezierShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Evaluates the curve at `t` with De Casteljau's algorithm.
    pub fn evaluate(&self, t: f64) -> Option<Point> {
        let mut work = self.points.clone();
        if work.is_empty() {
            return None;
        }
        for level in 1..work.len() {
            for i in 0..work.len() - level {
                work[i] = work[i].lerp(&work[i + 1], t);
            }
        }
        work.first().copied()
    }

    /// `BEZIER_STEPS + 1` samples over `t ∈ [0, 1]`.
    pub fn samples(&self) -> Vec<Point> {
        (0..=BEZIER_STEPS)
            .filter_map(|i| self.evaluate(i as f64 / BEZIER_STEPS as f64))
            .collect()
    }
}

impl RasterShape for BezierShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        if self.points.len() < BEZIER_MIN_POINTS {
            return;
        }

        if style.selected {
            for pair in self.points.windows(2) {
                raster::draw_line(buf, pair[0], pair[1], 1, raster::GUIDE_COLOR);
            }
        }

        let samples = self.samples();
        for pair in samples.windows(2) {
            raster::draw_line(buf, pair[0], pair[1], style.stroke_width, style.color);
        }
    }

    fn contains_point(&self, p: Point, _stroke_width: u32, tolerance: f64) -> bool {
        let tol_sq = tolerance * tolerance;
        if self.points.iter().any(|cp| cp.distance_sq(&p) <= tol_sq) {
            return true;
        }
        if self.points.len() < BEZIER_MIN_POINTS {
            return false;
        }
        self.samples()
            .iter()
            .any(|s| s.distance_sq(&p) <= CURVE_HIT_DISTANCE_SQ)
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        let pad = stroke_width as f64 / 2.0;
        if self.points.len() < BEZIER_MIN_POINTS {
            return BoundingBox::from_points(&self.points).unwrap_or_default();
        }
        BoundingBox::from_points(&self.samples())
            .unwrap_or_default()
            .inflate(pad)
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
}
