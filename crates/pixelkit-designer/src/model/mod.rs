//! Shape model: the eight drawable variants and the capability contract they share.
//!
//! [`Shape`] is a closed tagged union; every dispatch point (draw, hit-test,
//! serialize, history) matches on it exhaustively. [`DrawingObject`] carries
//! the attributes common to every variant (id, color, stroke width, flags).

use pixelkit_core::{BoundingBox, Color, PixelBuffer, Point, ShapeId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::raster;

mod bezier;
mod brush;
mod circle;
mod image;
mod line;
mod polygon;
mod rectangle;
mod rgb_cube;

pub use bezier::{BezierShape, BEZIER_MIN_POINTS, BEZIER_STEPS};
pub use brush::BrushShape;
pub use circle::CircleShape;
pub use image::ImageShape;
pub use line::LineShape;
pub use polygon::PolygonShape;
pub use rectangle::RectangleShape;
pub use rgb_cube::{CubeAxis, CubeFace, FaceHit, RgbCubeShape};

/// Default extra distance (pixels) accepted around outlines when hit-testing.
pub const HIT_TOLERANCE: f64 = 6.0;
/// Default grab radius (pixels) for control-point handles.
pub const HANDLE_TOLERANCE: f64 = 8.0;

/// Per-draw attributes handed to a variant by its [`DrawingObject`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: Color,
    /// Always at least 1.
    pub stroke_width: u32,
    pub selected: bool,
    pub visible: bool,
}

impl ShapeStyle {
    pub fn new(color: Color, stroke_width: u32) -> Self {
        Self {
            color,
            stroke_width: stroke_width.max(1),
            selected: false,
            visible: true,
        }
    }

    /// Half the stroke width, as a hit-test margin.
    pub fn half_stroke(&self) -> f64 {
        self.stroke_width as f64 / 2.0
    }
}

/// Capability contract every shape variant satisfies.
pub trait RasterShape {
    /// Rasterizes into `buf`. Visibility is checked by the caller.
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle);

    /// True when `p` is inside the fill area, or within `tolerance` of the outline.
    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool;

    /// Axis-aligned box covering the rendered extent.
    fn bounding_box(&self, stroke_width: u32) -> BoundingBox;

    fn translate(&mut self, dx: f64, dy: f64);

    /// Editable handles, in variant-specific order.
    fn control_points(&self) -> Vec<Point>;

    /// Moves handle `index` to `pos`. Returns `false` when nothing changed.
    fn move_control_point(&mut self, index: usize, pos: Point) -> bool;

    /// Whether handles are drawn while the shape is selected.
    fn shows_handles(&self) -> bool {
        true
    }
}

/// The eight shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(LineShape),
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Brush(BrushShape),
    Bezier(BezierShape),
    Polygon(PolygonShape),
    #[serde(rename = "rgbcube")]
    RgbCube(RgbCubeShape),
    Image(ImageShape),
}

impl Shape {
    /// Serialized type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Brush(_) => "brush",
            Shape::Bezier(_) => "bezier",
            Shape::Polygon(_) => "polygon",
            Shape::RgbCube(_) => "rgbcube",
            Shape::Image(_) => "image",
        }
    }

    fn inner(&self) -> &dyn RasterShape {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Brush(s) => s,
            Shape::Bezier(s) => s,
            Shape::Polygon(s) => s,
            Shape::RgbCube(s) => s,
            Shape::Image(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn RasterShape {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Brush(s) => s,
            Shape::Bezier(s) => s,
            Shape::Polygon(s) => s,
            Shape::RgbCube(s) => s,
            Shape::Image(s) => s,
        }
    }
}

impl RasterShape for Shape {
    fn draw(&self, buf: &mut PixelBuffer, style: &ShapeStyle) {
        self.inner().draw(buf, style)
    }

    fn contains_point(&self, p: Point, stroke_width: u32, tolerance: f64) -> bool {
        self.inner().contains_point(p, stroke_width, tolerance)
    }

    fn bounding_box(&self, stroke_width: u32) -> BoundingBox {
        self.inner().bounding_box(stroke_width)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.inner_mut().translate(dx, dy)
    }

    fn control_points(&self) -> Vec<Point> {
        self.inner().control_points()
    }

    fn move_control_point(&mut self, index: usize, pos: Point) -> bool {
        self.inner_mut().move_control_point(index, pos)
    }

    fn shows_handles(&self) -> bool {
        self.inner().shows_handles()
    }
}

fn default_visible() -> bool {
    true
}

fn default_stroke_width() -> u32 {
    1
}

/// Stroke widths arrive as plain JSON numbers; fractions round to the
/// nearest pixel and negatives clamp to zero.
fn deserialize_stroke_width<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let width = f64::deserialize(deserializer)?;
    if width.is_nan() {
        return Ok(default_stroke_width());
    }
    Ok(width.round().clamp(0.0, u32::MAX as f64) as u32)
}

/// A shape plus the attributes common to every variant.
///
/// Serializes flat: `{ "id", "type", "color", "selected", "visible",
/// "strokeWidth", ...variant fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingObject {
    pub id: ShapeId,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(
        default = "default_stroke_width",
        deserialize_with = "deserialize_stroke_width"
    )]
    pub stroke_width: u32,
    #[serde(flatten)]
    pub shape: Shape,
}

impl DrawingObject {
    /// Wraps `shape` with a fresh id, black color and a 1px stroke.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: ShapeId::new(),
            color: Color::BLACK,
            selected: false,
            visible: true,
            stroke_width: 1,
            shape,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        if let Shape::Brush(brush) = &mut self.shape {
            brush.size = width.max(1) as f64;
        }
        self
    }

    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.color,
            stroke_width: self.stroke_width.max(1),
            selected: self.selected,
            visible: self.visible,
        }
    }

    /// Draws the shape, then its handles when selected.
    pub fn draw(&self, buf: &mut PixelBuffer) {
        let style = self.style();
        self.shape.draw(buf, &style);
        if self.selected && self.shape.shows_handles() {
            for p in self.shape.control_points() {
                raster::draw_handle(buf, p);
            }
        }
    }

    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.shape
            .contains_point(p, self.stroke_width.max(1), tolerance)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.shape.bounding_box(self.stroke_width.max(1))
    }

    /// Index of the first control point within `tolerance` of `p`.
    pub fn control_point_at(&self, p: Point, tolerance: f64) -> Option<usize> {
        let tol_sq = tolerance * tolerance;
        self.shape
            .control_points()
            .iter()
            .position(|cp| cp.distance_sq(&p) <= tol_sq)
    }
}
