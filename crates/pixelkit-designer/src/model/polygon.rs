use pixelkit_core::{BoundingBox, PixelBuffer, Point};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

/// Polygon with absolute vertices, closed once it has three or more.
///
/// `rotation` only records the accumulated angle; vertices are rotated in
/// place by [`PolygonShape::rotate_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub points: Vec<Point>,
    #[serde(default)]
    pub rotation: f64,
    /// Display-only rotation handle supplied by the tool layer.
    #[serde(skip)]
    pub pivot_handle: Option<Point>,
}

impl PolygonShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            rotation: 0.0,
            pivot_handle: None,
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() >= 3
    }

    /// Mean of all vertices.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Rotates every vertex by `delta` radians around the centroid.
    pub fn rotate_points(&mut self, delta: f64) {
        let Some(c) = self.centroid() else {
            return;
        };
        let (sin, cos) = delta.sin_cos();
        for p in &mut self.points {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            *p = Point::new(c.x + dx * cos - dy * sin, c.y + dx * sin + dy * cos);
        }
        self.rotation += delta;
    }

    /// Edges in drawing order, including the closing edge when closed.
    fn edges(&self) -> Vec<(Point, Point)> {
        let mut edges: Vec<_> = self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if let (true, Some(first), Some(last)) =
            (self.is_closed(), self.points.first(), self.points.last())
        {
            edges.push((*last, *first));
        }
        edges
    }
}

impl RasterShape for PolygonShape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        if let [only] = self.points.as_slice() {
            raster::draw_line(buf, *only, *only, style.stroke_width, style.color);
            return;
        }
        for (a, b) in self.edges() {
            raster::draw_line(buf, a, b, style.stroke_width, style.color);
        }
        if style.selected {
            if let Some(pivot) = self.pivot_handle {
                raster::draw_handle(buf, pivot);
            }
        }
    }

    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool {
        let reach = tolerance + stroke_width as f64 / 2.0;
        let reach_sq = reach * reach;
        if self.points.iter().any(|v| v.distance_sq(&p) <= reach_sq) {
            return true;
        }
        self.edges()
            .into_iter()
            .any(|(a, b)| raster::segment_distance_sq(p, a, b) <= reach_sq)
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        BoundingBox::from_points(&self.points)
            .map(|bb| bb.inflate(stroke_width as f64 / 2.0))
            .unwrap_or_default()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
        if let Some(pivot) = &mut self.pivot_handle {
            *pivot = pivot.translated(dx, dy);
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
