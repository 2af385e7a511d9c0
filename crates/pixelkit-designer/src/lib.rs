//! # PixelKit Designer
//!
//! The shape and scene engine behind the PixelKit canvas. Shapes are
//! rasterized immediately into a fixed-size RGBA buffer as hard,
//! non-antialiased pixels; the scene owns that buffer, the ordered shape
//! list, selection and a bounded undo/redo history.
//!
//! ## Components
//!
//! - **Raster**: Bresenham lines with stroke width, disc stamping, spans
//! - **Model**: Line, Rectangle, Circle, Brush, Bezier, Polygon, RGB cube
//!   and Image variants behind one [`RasterShape`] contract
//! - **Scene**: render loop, hit-testing, control-point editing, history,
//!   JSON documents and export
//! - **Image store**: async lookup of the pixels behind Image shapes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pixelkit_designer::{DrawingObject, LineShape, Scene, Shape};
//! use pixelkit_core::Point;
//!
//! let mut scene = Scene::new(800, 600);
//! let id = scene.add_shape(DrawingObject::new(Shape::Line(LineShape::new(
//!     Point::new(10.0, 10.0),
//!     Point::new(200.0, 120.0),
//! ))));
//! scene.select_shape(Some(&id));
//! let buffer = scene.render();
//! ```

pub mod error;
pub mod image_store;
pub mod model;
pub mod raster;
pub mod scene;

pub use error::{ImageStoreError, SceneError, SceneResult};
pub use image_store::{DirectoryImageStore, ImageStore, MemoryImageStore};
pub use model::{
    BezierShape, BrushShape, CircleShape, CubeAxis, CubeFace, DrawingObject, FaceHit, ImageShape,
    LineShape, PolygonShape, RasterShape, RectangleShape, RgbCubeShape, Shape, ShapeStyle,
};
pub use scene::{History, LoadReport, Scene, SceneDocument};

pub use pixelkit_core::{BoundingBox, Color, ExportFormat, PixelBuffer, Point, RawImage, ShapeId};
