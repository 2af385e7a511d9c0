//! Rotatable RGB color cube.
//!
//! The cube is a unit cube scaled to `size`, rotated about X then Y, and
//! perspective-projected around its screen anchor. Each face is scan-filled
//! back to front; every pixel recovers its unrotated 3D coordinate by
//! inverse-distance weighting of the face's four projected corners, and that
//! coordinate maps axis-wise onto red, green and blue.

use nalgebra::{Rotation3, Vector3};
use pixelkit_core::{BoundingBox, Color, PixelBuffer, Point, RawImage};
use serde::{Deserialize, Serialize};

use super::{RasterShape, ShapeStyle};
use crate::raster;

const MIN_CAMERA_DISTANCE: f64 = 200.0;
const WEIGHT_EPSILON: f64 = 1e-6;
/// Side length of a cross-section image.
pub const CROSS_SECTION_SIZE: u32 = 256;

/// Vertex `i` sits at `+s` on X when bit 0 is set, on Y for bit 1, on Z for bit 2.
const FACES: [(CubeFace, [usize; 4]); 6] = [
    (CubeFace::NegX, [0, 2, 6, 4]),
    (CubeFace::PosX, [1, 3, 7, 5]),
    (CubeFace::NegY, [0, 1, 5, 4]),
    (CubeFace::PosY, [2, 3, 7, 6]),
    (CubeFace::NegZ, [0, 1, 3, 2]),
    (CubeFace::PosZ, [4, 5, 7, 6]),
];

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Color axis of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeAxis {
    Red,
    Green,
    Blue,
}

/// One of the six faces, named by the axis it is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl CubeFace {
    pub fn axis(self) -> CubeAxis {
        match self {
            CubeFace::NegX | CubeFace::PosX => CubeAxis::Red,
            CubeFace::NegY | CubeFace::PosY => CubeAxis::Green,
            CubeFace::NegZ | CubeFace::PosZ => CubeAxis::Blue,
        }
    }

    /// Channel value of the face's perpendicular axis (0 or 255).
    pub fn axis_value(self) -> u8 {
        match self {
            CubeFace::NegX | CubeFace::NegY | CubeFace::NegZ => 0,
            CubeFace::PosX | CubeFace::PosY | CubeFace::PosZ => 255,
        }
    }
}

/// Result of [`RgbCubeShape::find_face_at_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    pub face: CubeFace,
    /// Unrotated coordinate in `[-size/2, size/2]` per axis.
    pub local: [f64; 3],
    pub color: Color,
}

/// A face after rotation and projection.
struct ProjectedFace {
    face: CubeFace,
    screen: [Point; 4],
    local: [Vector3<f64>; 4],
    depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbCubeShape {
    /// Screen position of the cube's center.
    pub x: f64,
    pub y: f64,
    /// Edge length in pixels.
    pub size: f64,
    #[serde(default)]
    pub rotation_x: f64,
    #[serde(default)]
    pub rotation_y: f64,
    #[serde(default)]
    pub show_frame: bool,
}

impl RgbCubeShape {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            rotation_x: 0.0,
            rotation_y: 0.0,
            show_frame: false,
        }
    }

    /// Adds `dx` to the Y-axis angle and `dy` to the X-axis angle (radians).
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.rotation_y += dx;
        self.rotation_x += dy;
    }

    fn half(&self) -> f64 {
        self.size / 2.0
    }

    fn local_vertices(&self) -> [Vector3<f64>; 8] {
        let s = self.half();
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 != 0 { s } else { -s },
                if i & 2 != 0 { s } else { -s },
                if i & 4 != 0 { s } else { -s },
            )
        })
    }

    fn rotation(&self) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.rotation_x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.rotation_y);
        ry * rx
    }

    fn project(&self, v: &Vector3<f64>) -> Point {
        let camera = MIN_CAMERA_DISTANCE.max(self.size * 2.0);
        let scale = camera / (camera + v.z);
        Point::new(self.x + v.x * scale, self.y + v.y * scale)
    }

    /// Rotated vertices and their screen projections.
    fn transformed(&self) -> ([Vector3<f64>; 8], [Point; 8]) {
        let rot = self.rotation();
        let rotated = self.local_vertices().map(|v| rot * v);
        let screen = rotated.map(|v| self.project(&v));
        (rotated, screen)
    }

    /// Faces sorted far to near (larger average z first).
    fn projected_faces(&self) -> Vec<ProjectedFace> {
        let local = self.local_vertices();
        let (rotated, screen) = self.transformed();
        let mut faces: Vec<ProjectedFace> = FACES
            .iter()
            .map(|(face, idx)| ProjectedFace {
                face: *face,
                screen: idx.map(|i| screen[i]),
                local: idx.map(|i| local[i]),
                depth: idx.iter().map(|&i| rotated[i].z).sum::<f64>() / 4.0,
            })
            .collect();
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        faces
    }

    /// Recovers the unrotated coordinate of screen point `p` on a face.
    fn interpolate(face: &ProjectedFace, p: Point) -> Vector3<f64> {
        let weights = face
            .screen
            .map(|corner| 1.0 / (corner.distance_to(&p) + WEIGHT_EPSILON));
        let total: f64 = weights.iter().sum();
        face.local
            .iter()
            .zip(weights.iter())
            .fold(Vector3::zeros(), |acc, (v, w)| acc + v * (w / total))
    }

    /// Maps an unrotated coordinate onto RGB.
    pub fn local_to_color(&self, local: [f64; 3]) -> Color {
        let s = self.half();
        let channel = |c: f64| {
            if s <= 0.0 {
                return 0;
            }
            (((c + s) / (2.0 * s)) * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(channel(local[0]), channel(local[1]), channel(local[2]))
    }

    /// The front-most face under `p`, with its local coordinate and color.
    pub fn find_face_at_point(&self, p: Point) -> Option<FaceHit> {
        self.projected_faces()
            .iter()
            .rev()
            .find(|f| raster::point_in_polygon(p, &f.screen))
            .map(|f| {
                let local = Self::interpolate(f, p);
                let local = [local.x, local.y, local.z];
                FaceHit {
                    face: f.face,
                    local,
                    color: self.local_to_color(local),
                }
            })
    }

    /// A 256x256 slice of the RGB cube with `axis` fixed at `value`.
    ///
    /// The two remaining channels increase left to right and top to bottom,
    /// in R, G, B order.
    pub fn cross_section(axis: CubeAxis, value: u8) -> RawImage {
        let mut pixels = Vec::with_capacity((CROSS_SECTION_SIZE * CROSS_SECTION_SIZE * 4) as usize);
        for v in 0..CROSS_SECTION_SIZE {
            for u in 0..CROSS_SECTION_SIZE {
                let (u, v) = (u as u8, v as u8);
                let rgb = match axis {
                    CubeAxis::Red => [value, u, v],
                    CubeAxis::Green => [u, value, v],
                    CubeAxis::Blue => [u, v, value],
                };
                pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        RawImage {
            width: CROSS_SECTION_SIZE,
            height: CROSS_SECTION_SIZE,
            pixels,
        }
    }
}

impl RasterShape for RgbCubeShape {
    fn draw(&self, buf: &mut PixelBuffer, _style: &ShapeStyle) {
        if self.size <= 0.0 {
            return;
        }
        let faces = self.projected_faces();
        for face in &faces {
            let spans = raster::convex_spans(&face.screen, buf.width(), buf.height());
            for (y, x0, x1) in spans {
                for x in x0..=x1 {
                    let p = Point::new(x as f64, y as f64);
                    let local = Self::interpolate(face, p);
                    let color = self.local_to_color([local.x, local.y, local.z]);
                    buf.set_pixel(x, y, color);
                }
            }
        }

        if self.show_frame {
            let (_, screen) = self.transformed();
            for (a, b) in EDGES {
                raster::draw_line(buf, screen[a], screen[b], 1, Color::BLACK);
            }
        }
    }

    /// Bounding-box test against the projected vertices, not exact face membership.
    fn contains_point(&self, p: Point, _stroke_width: u32, _tolerance: f64) -> bool {
        self.bounding_box(1).contains(p)
    }

    fn bounding_box(&self, _stroke_width: u32) -> BoundingBox {
        let (_, screen) = self.transformed();
        BoundingBox::from_points(&screen).unwrap_or_default()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn control_points(&self) -> Vec<Point> {
        vec![Point::new(self.x, self.y)]
    }

    /// The cube is not resized through handles.
    fn move_control_point(&mut self, _index: usize, _pos: Point) -> bool {
        false
    }

    fn shows_handles(&self) -> bool {
        false
    }
}
