//! Scene manager: owns the pixel buffer, the ordered shape list, selection
//! and the undo/redo history.
//!
//! This module is split into submodules:
//! - `shapes`: adding, removing and editing shapes, hit-testing
//! - `selection`: single-shape selection
//! - `history`: bounded snapshot history
//! - `file_io`: scene documents, save/load and export

mod file_io;
mod history;
mod selection;
mod shapes;

pub use file_io::{LoadReport, SceneDocument};
pub use history::History;

use pixelkit_core::{Color, PixelBuffer};
use pixelkit_settings::EditorSettings;

use crate::model::{DrawingObject, HANDLE_TOLERANCE, HIT_TOLERANCE};

/// Default history cap.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// A fixed-size canvas and the shapes drawn onto it.
///
/// Z-order is list order: later shapes are drawn later and win hit-tests.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    background: Color,
    buffer: PixelBuffer,
    shapes: Vec<DrawingObject>,
    history: History,
    hit_tolerance: f64,
    handle_tolerance: f64,
}

impl Scene {
    /// Creates an empty scene with a white background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut scene = Self {
            width,
            height,
            background: Color::WHITE,
            buffer: PixelBuffer::new(width, height),
            shapes: Vec::new(),
            history: History::new(DEFAULT_HISTORY_DEPTH),
            hit_tolerance: HIT_TOLERANCE,
            handle_tolerance: HANDLE_TOLERANCE,
        };
        scene.history.reset(&scene.shapes);
        scene.buffer.clear(scene.background);
        scene
    }

    /// Creates an empty scene from the canvas, history and interaction settings.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        let mut scene = Self::new(settings.canvas.width, settings.canvas.height);
        scene.background = settings.canvas.background;
        scene.buffer.clear(scene.background);
        scene.history = History::new(settings.history.max_depth);
        scene.history.reset(&scene.shapes);
        scene.hit_tolerance = settings.interaction.hit_tolerance;
        scene.handle_tolerance = settings.interaction.handle_tolerance;
        scene
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn hit_tolerance(&self) -> f64 {
        self.hit_tolerance
    }

    pub fn handle_tolerance(&self) -> f64 {
        self.handle_tolerance
    }

    /// Full redraw: clear to the background, then draw every visible shape in order.
    pub fn render(&mut self) -> &PixelBuffer {
        self.buffer.clear(self.background);
        for obj in self.shapes.iter().filter(|s| s.visible) {
            obj.draw(&mut self.buffer);
        }
        &self.buffer
    }

    /// The buffer as of the last render or pixel write.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.buffer.get_pixel(x, y)
    }

    /// Writes directly into the composited buffer; the next render discards it.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.buffer.set_pixel(x, y, color)
    }
}
