use std::f64::consts::{FRAC_PI_2, PI};

use pixelkit_designer::{Color, PixelBuffer, Point, PolygonShape, RasterShape, ShapeStyle};

fn square() -> PolygonShape {
    PolygonShape::new(vec![
        Point::new(10.0, 10.0),
        Point::new(30.0, 10.0),
        Point::new(30.0, 30.0),
        Point::new(10.0, 30.0),
    ])
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_centroid() {
    assert_eq!(square().centroid(), Some(Point::new(20.0, 20.0)));
    assert_eq!(PolygonShape::new(Vec::new()).centroid(), None);
}

#[test]
fn test_rotate_points_around_centroid() {
    let mut poly = square();
    poly.rotate_points(FRAC_PI_2);
    assert!(close(poly.points[0], Point::new(30.0, 10.0)));
    assert!(close(poly.points[1], Point::new(30.0, 30.0)));
    assert_eq!(poly.rotation, FRAC_PI_2);
    assert!(close(poly.centroid().unwrap(), Point::new(20.0, 20.0)));

    poly.rotate_points(PI + FRAC_PI_2);
    assert!(close(poly.points[0], Point::new(10.0, 10.0)));
}

#[test]
fn test_closing_edge_only_with_three_points() {
    let open = PolygonShape::new(vec![Point::new(2.0, 2.0), Point::new(12.0, 2.0)]);
    assert!(!open.is_closed());

    let mut triangle = open.clone();
    triangle.push(Point::new(2.0, 12.0));
    assert!(triangle.is_closed());

    let mut buf = PixelBuffer::new(16, 16);
    triangle.draw(&mut buf, &ShapeStyle::new(Color::BLACK, 1));
    // Closing edge runs down the left side.
    assert_eq!(buf.get_pixel(2, 8), Some(Color::BLACK));

    let mut buf = PixelBuffer::new(16, 16);
    open.draw(&mut buf, &ShapeStyle::new(Color::BLACK, 1));
    assert_eq!(buf.count_not(Color::TRANSPARENT), 11);
}

#[test]
fn test_hit_test_includes_closing_edge() {
    let poly = square();
    // On the closing edge (10,30) -> (10,10).
    assert!(poly.contains_point(Point::new(11.0, 20.0), 1, 3.0));
    // Interior is not a hit.
    assert!(!poly.contains_point(Point::new(20.0, 20.0), 1, 3.0));
}

#[test]
fn test_translate_moves_pivot_handle() {
    let mut poly = square();
    poly.pivot_handle = Some(Point::new(20.0, 20.0));
    poly.translate(5.0, -5.0);
    assert_eq!(poly.points[0], Point::new(15.0, 5.0));
    assert_eq!(poly.pivot_handle, Some(Point::new(25.0, 15.0)));
}
