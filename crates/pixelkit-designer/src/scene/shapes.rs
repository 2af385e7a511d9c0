//! Shape operations (add, remove, visibility, edits, hit-testing) for the scene.
//!
//! Structural mutations record a history entry. Geometry edits do not; the
//! tool layer calls [`Scene::save_state`] once a gesture completes.

use pixelkit_core::{Color, Point, ShapeId};
use pixelkit_filters::FilterPipeline;

use super::Scene;
use crate::model::{DrawingObject, RasterShape, Shape};

impl Scene {
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shapes.iter()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&DrawingObject> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    fn shape_mut(&mut self, id: &ShapeId) -> Option<&mut DrawingObject> {
        self.shapes.iter_mut().find(|s| &s.id == id)
    }

    /// Appends a shape on top of the z-order and records a history entry.
    ///
    /// A colliding id is replaced by a fresh one. A shape added already
    /// selected becomes the only selected shape.
    pub fn add_shape(&mut self, mut obj: DrawingObject) -> ShapeId {
        if self.shape(&obj.id).is_some() {
            let fresh = ShapeId::new();
            tracing::debug!("Shape id {} already in scene, reassigned {}", obj.id, fresh);
            obj.id = fresh;
        }
        if obj.selected {
            self.clear_selection();
        }
        let id = obj.id.clone();
        tracing::debug!("Added {} shape {}", obj.shape.type_name(), id);
        self.shapes.push(obj);
        self.save_state();
        id
    }

    /// Removes a shape by id and records a history entry.
    pub fn remove_shape(&mut self, id: &ShapeId) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| &s.id != id);
        if self.shapes.len() == before {
            return false;
        }
        tracing::debug!("Removed shape {}", id);
        self.save_state();
        true
    }

    /// Flips a shape's visibility and records a history entry.
    pub fn toggle_visibility(&mut self, id: &ShapeId) -> bool {
        let Some(obj) = self.shape_mut(id) else {
            return false;
        };
        obj.visible = !obj.visible;
        self.save_state();
        true
    }

    /// Removes every shape and records a history entry.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.save_state();
    }

    /// Topmost visible shape whose hit-test accepts `(x, y)`.
    pub fn find_shape_at_point(&self, x: f64, y: f64) -> Option<ShapeId> {
        let p = Point::new(x, y);
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.visible)
            .find(|s| s.contains_point(p, self.hit_tolerance))
            .map(|s| s.id.clone())
    }

    /// Handle of the selected shape within the handle tolerance of `(x, y)`.
    pub fn find_control_point_at(&self, x: f64, y: f64) -> Option<(ShapeId, usize)> {
        let selected = self.selected_shape()?;
        selected
            .control_point_at(Point::new(x, y), self.handle_tolerance)
            .map(|index| (selected.id.clone(), index))
    }

    pub fn move_shape(&mut self, id: &ShapeId, dx: f64, dy: f64) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        match self.shape_mut(id) {
            Some(obj) => {
                obj.shape.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn move_control_point(&mut self, id: &ShapeId, index: usize, pos: Point) -> bool {
        self.shape_mut(id)
            .is_some_and(|obj| obj.shape.move_control_point(index, pos))
    }

    /// Rotates a polygon around its centroid, or spins a cube about Y.
    pub fn rotate_shape(&mut self, id: &ShapeId, radians: f64) -> bool {
        if radians == 0.0 {
            return false;
        }
        match self.shape_mut(id).map(|obj| &mut obj.shape) {
            Some(Shape::Polygon(polygon)) => {
                polygon.rotate_points(radians);
                true
            }
            Some(Shape::RgbCube(cube)) => {
                cube.rotate(radians, 0.0);
                true
            }
            _ => false,
        }
    }

    /// Adds `dx` to a cube's Y-axis angle and `dy` to its X-axis angle.
    pub fn rotate_cube(&mut self, id: &ShapeId, dx: f64, dy: f64) -> bool {
        match self.shape_mut(id).map(|obj| &mut obj.shape) {
            Some(Shape::RgbCube(cube)) if dx != 0.0 || dy != 0.0 => {
                cube.rotate(dx, dy);
                true
            }
            _ => false,
        }
    }

    /// Appends a point to a brush, Bezier or polygon.
    pub fn append_point(&mut self, id: &ShapeId, p: Point) -> bool {
        match self.shape_mut(id).map(|obj| &mut obj.shape) {
            Some(Shape::Brush(brush)) => brush.push(p),
            Some(Shape::Bezier(bezier)) => bezier.push(p),
            Some(Shape::Polygon(polygon)) => polygon.push(p),
            _ => return false,
        }
        true
    }

    /// Sets the stroke width; a brush's stamp radius follows it.
    pub fn set_stroke_width(&mut self, id: &ShapeId, width: u32) -> bool {
        let Some(obj) = self.shape_mut(id) else {
            return false;
        };
        if obj.stroke_width == width {
            return false;
        }
        obj.stroke_width = width;
        if let Shape::Brush(brush) = &mut obj.shape {
            brush.size = width.max(1) as f64;
        }
        true
    }

    pub fn set_color(&mut self, id: &ShapeId, color: Color) -> bool {
        match self.shape_mut(id) {
            Some(obj) if obj.color != color => {
                obj.color = color;
                true
            }
            _ => false,
        }
    }

    /// Replaces an image's filter pipeline and rebuilds its cache.
    pub fn set_image_filters(&mut self, id: &ShapeId, filters: FilterPipeline) -> bool {
        match self.shape_mut(id).map(|obj| &mut obj.shape) {
            Some(Shape::Image(image)) => {
                image.set_filters(filters);
                true
            }
            _ => false,
        }
    }
}
