//! Immediate-mode rasterization primitives.
//!
//! Every routine writes hard (non-antialiased) pixels through the bounds
//! checked [`PixelBuffer`] accessors, so callers may pass coordinates that
//! fall partly or wholly outside the canvas.

use pixelkit_core::{Color, PixelBuffer, Point};

/// Fill color of control-point handles.
pub const HANDLE_COLOR: Color = Color::rgb(0, 120, 215);
/// Faint guide segments between Bezier control points.
pub const GUIDE_COLOR: Color = Color::rgb(190, 190, 190);
/// Side length of a square control-point handle, in pixels.
pub const HANDLE_SIZE: i32 = 5;
/// Widest stroke the rasterizers draw; larger widths are clamped.
pub const MAX_STROKE_WIDTH: u32 = 1 << 16;

/// Largest pixel coordinate magnitude handed to integer rasterizers.
///
/// Offsets added on top (stroke bands, handle sizes) stay well inside `i32`,
/// and any canvas is far narrower, so a clamped coordinate stays off-canvas.
pub const COORD_LIMIT: i32 = 1 << 28;

/// Rounds a canvas coordinate to a pixel, clamped to `±COORD_LIMIT`.
pub fn pixel_coord(v: f64) -> i32 {
    let limit = COORD_LIMIT as f64;
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(-limit, limit) as i32
}

/// [`pixel_coord`] applied to both axes.
pub fn pixel(p: Point) -> (i32, i32) {
    (pixel_coord(p.x), pixel_coord(p.y))
}

/// Integer range `lo..=hi` (real bounds, rounded inward) intersected with `0..len`.
pub fn clip_range(lo: f64, hi: f64, len: u32) -> Option<(i32, i32)> {
    if lo.is_nan() || hi.is_nan() || len == 0 {
        return None;
    }
    let lo = lo.ceil().max(0.0);
    let hi = hi.floor().min(len as f64 - 1.0);
    (lo <= hi).then(|| (lo as i32, hi as i32))
}

/// Clips segment `a`-`b` to the canvas grown by `margin` (Liang-Barsky).
///
/// Segments already inside the grown canvas come back unchanged; `None`
/// when nothing of the segment lies inside.
pub fn clip_segment(
    buf: &PixelBuffer,
    a: Point,
    b: Point,
    margin: f64,
) -> Option<(Point, Point)> {
    let (min_x, min_y) = (-margin, -margin);
    let max_x = buf.width() as f64 + margin;
    let max_y = buf.height() as f64 + margin;
    let inside = |p: Point| p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y;
    if inside(a) && inside(b) {
        return Some((a, b));
    }

    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-dx, a.x - min_x),
        (dx, max_x - a.x),
        (-dy, a.y - min_y),
        (dy, max_y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    if !(t0.is_finite() && t1.is_finite()) {
        return None;
    }
    Some((
        Point::new(a.x + t0 * dx, a.y + t0 * dy),
        Point::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

/// Walks the Bresenham line from `(x0, y0)` to `(x1, y1)`, endpoints included.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        plot(x as i32, y as i32);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws a line with the given stroke width.
///
/// Widths up to 3 plot a short run perpendicular to the major axis at each
/// step; wider strokes stamp a disc of diameter `width`. Only the part of the
/// line near the canvas is walked.
pub fn draw_line(buf: &mut PixelBuffer, from: Point, to: Point, width: u32, color: Color) {
    let width = width.clamp(1, MAX_STROKE_WIDTH);
    let Some((from, to)) = clip_segment(buf, from, to, width as f64 + 2.0) else {
        return;
    };
    let width = width as i32;
    let (x0, y0) = pixel(from);
    let (x1, y1) = pixel(to);

    if width <= 3 {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let half = width / 2;
        bresenham(x0, y0, x1, y1, |x, y| {
            for offset in -half..(width - half) {
                if steep {
                    buf.set_pixel(x + offset, y, color);
                } else {
                    buf.set_pixel(x, y + offset, color);
                }
            }
        });
    } else {
        let radius = width as f64 / 2.0;
        bresenham(x0, y0, x1, y1, |x, y| stamp_disc(buf, x, y, radius, color));
    }
}

/// Fills every pixel whose offset from `(cx, cy)` satisfies `dx² + dy² <= radius²`.
pub fn stamp_disc(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: f64, color: Color) {
    fill_disc(buf, cx as f64, cy as f64, radius, color);
}

/// [`stamp_disc`] around a whole-pixel center given as `f64`, so centers far
/// outside `i32` still place the visible part of the disc correctly.
///
/// Rows and spans are clipped to the canvas before any pixel is visited.
pub fn fill_disc(buf: &mut PixelBuffer, cx: f64, cy: f64, radius: f64, color: Color) {
    if radius.is_nan() || radius < 0.0 {
        return;
    }
    let reach = radius.floor();
    let Some((top, bottom)) = clip_range(cy - reach, cy + reach, buf.height()) else {
        return;
    };
    let r2 = radius * radius;
    for y in top..=bottom {
        let dy = y as f64 - cy;
        let dx = (r2 - dy * dy).max(0.0).sqrt().floor();
        if let Some((x0, x1)) = clip_range(cx - dx, cx + dx, buf.width()) {
            buf.fill_span(y, x0, x1, color);
        }
    }
}

/// Fills the inclusive pixel rectangle `(x0, y0)..=(x1, y1)`.
pub fn fill_rect(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    let Some((top, bottom)) = clip_range(top as f64, bottom as f64, buf.height()) else {
        return;
    };
    for y in top..=bottom {
        buf.fill_span(y, x0, x1, color);
    }
}

/// Draws a square control-point handle centered on `p`.
pub fn draw_handle(buf: &mut PixelBuffer, p: Point) {
    let (cx, cy) = pixel(p);
    let half = HANDLE_SIZE / 2;
    fill_rect(buf, cx - half, cy - half, cx + half, cy + half, HANDLE_COLOR);
    fill_rect(buf, cx - half + 1, cy - half + 1, cx + half - 1, cy + half - 1, Color::WHITE);
}

/// Squared distance from `p` to the segment `a`-`b`.
pub fn segment_distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance_sq(&a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    p.distance_sq(&Point::new(a.x + t * abx, a.y + t * aby))
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let n = vertices.len();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + n - 1) % n];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
    }
    inside
}

/// Horizontal spans covering a convex polygon, one per visible pixel row.
///
/// Each entry is `(y, x_start, x_end)` with inclusive pixel bounds clipped to
/// a `width` x `height` canvas; span endpoints come from intersecting the row
/// with every edge.
pub fn convex_spans(vertices: &[Point], width: u32, height: u32) -> Vec<(i32, i32, i32)> {
    if vertices.len() < 3 {
        return Vec::new();
    }
    let min_y = vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    if !min_y.is_finite() || !max_y.is_finite() {
        return Vec::new();
    }
    let Some((top, bottom)) = clip_range(min_y, max_y, height) else {
        return Vec::new();
    };

    let n = vertices.len();
    let mut spans = Vec::new();
    for y in top..=bottom {
        let fy = y as f64;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
            if fy < top.y || fy > bottom.y {
                continue;
            }
            if bottom.y == top.y {
                // Horizontal edge lying on this row.
                lo = lo.min(top.x.min(bottom.x));
                hi = hi.max(top.x.max(bottom.x));
            } else {
                let x = top.x + (fy - top.y) * (bottom.x - top.x) / (bottom.y - top.y);
                lo = lo.min(x);
                hi = hi.max(x);
            }
        }
        if let Some((x0, x1)) = clip_range(lo, hi, width) {
            spans.push((y, x0, x1));
        }
    }
    spans
}
