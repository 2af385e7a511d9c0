//! # PixelKit
//!
//! Shape and scene engine for a pixel-canvas raster editor:
//! - Immediate-mode rasterization of lines, rectangles, circles, brush
//!   strokes, Bezier curves, polygons, RGB cubes and filtered images
//! - Hit-testing and control-point editing
//! - Bounded undo/redo history
//! - JSON scene documents and PNG/JPEG/PPM export
//!
//! ## Architecture
//!
//! 1. **pixelkit-core** - Geometry, colors, shape ids, the RGBA pixel buffer
//! 2. **pixelkit-filters** - Image filters and filter pipelines
//! 3. **pixelkit-designer** - Shape model, scene, history, image stores
//! 4. **pixelkit-settings** - Editor settings persisted as TOML or JSON
//! 5. **pixelkit** - Headless binary that renders a scene document

pub use pixelkit_core as core;
pub use pixelkit_designer as designer;
pub use pixelkit_filters as filters;
pub use pixelkit_settings as settings;

pub use pixelkit_core::{BoundingBox, Color, ExportFormat, PixelBuffer, Point, RawImage, ShapeId};

pub use pixelkit_designer::{
    BezierShape, BrushShape, CircleShape, DirectoryImageStore, DrawingObject, History,
    ImageShape, ImageStore, LineShape, LoadReport, MemoryImageStore, PolygonShape, RasterShape,
    RectangleShape, RgbCubeShape, Scene, SceneDocument, SceneError, Shape,
};

pub use pixelkit_filters::FilterPipeline;

pub use pixelkit_settings::{EditorSettings, ExportKind, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("PIXELKIT_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
