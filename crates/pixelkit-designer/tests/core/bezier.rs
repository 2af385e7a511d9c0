use pixelkit_designer::model::{BEZIER_MIN_POINTS, BEZIER_STEPS};
use pixelkit_designer::{BezierShape, Color, DrawingObject, PixelBuffer, Point, RasterShape, Shape, ShapeStyle};

fn cubic() -> BezierShape {
    BezierShape::new(vec![
        Point::new(10.0, 50.0),
        Point::new(30.0, 10.0),
        Point::new(70.0, 10.0),
        Point::new(90.0, 50.0),
    ])
}

#[test]
fn test_de_casteljau_endpoints_and_midpoint() {
    let curve = cubic();
    assert_eq!(curve.evaluate(0.0), Some(Point::new(10.0, 50.0)));
    assert_eq!(curve.evaluate(1.0), Some(Point::new(90.0, 50.0)));
    // Symmetric control polygon: midpoint at x = 50, y = 0.125*50 + 0.75*10 + 0.125*50.
    let mid = curve.evaluate(0.5).unwrap();
    assert!((mid.x - 50.0).abs() < 1e-9);
    assert!((mid.y - 20.0).abs() < 1e-9);
    assert_eq!(curve.samples().len(), BEZIER_STEPS + 1);
}

#[test]
fn test_three_points_draw_nothing_but_hit() {
    let curve = BezierShape::new(vec![
        Point::new(10.0, 10.0),
        Point::new(20.0, 30.0),
        Point::new(30.0, 10.0),
    ]);
    assert!(curve.points.len() < BEZIER_MIN_POINTS);

    let mut buf = PixelBuffer::new(40, 40);
    buf.clear(Color::WHITE);
    let before = buf.clone();
    let mut style = ShapeStyle::new(Color::BLACK, 2);
    style.selected = true;
    curve.draw(&mut buf, &style);
    assert_eq!(buf, before);

    assert!(curve.contains_point(Point::new(21.0, 29.0), 1, 6.0));
    assert!(!curve.contains_point(Point::new(20.0, 18.0), 1, 6.0));
}

#[test]
fn test_curve_hit_within_four_pixels() {
    let curve = cubic();
    let mid = curve.evaluate(0.5).unwrap();
    assert!(curve.contains_point(Point::new(mid.x, mid.y + 3.5), 1, 0.0));
    assert!(!curve.contains_point(Point::new(mid.x, mid.y + 6.0), 1, 0.0));
}

#[test]
fn test_selected_curve_draws_guides_below_curve() {
    let mut obj = DrawingObject::new(Shape::Bezier(cubic()));
    let mut plain = PixelBuffer::new(100, 60);
    obj.draw(&mut plain);
    assert!(plain.count_not(Color::TRANSPARENT) > 0);

    obj.selected = true;
    let mut selected = PixelBuffer::new(100, 60);
    obj.draw(&mut selected);

    // Guide between the two upper control points sits at y = 10, away from the curve.
    assert_eq!(plain.get_pixel(50, 10), Some(Color::TRANSPARENT));
    assert_ne!(selected.get_pixel(50, 10), Some(Color::TRANSPARENT));
    // The curve itself stays on top of the guides.
    let mid = cubic().evaluate(0.5).unwrap().to_pixel();
    assert_eq!(selected.get_pixel(mid.0, mid.1), Some(Color::BLACK));
}

#[test]
fn test_bezier_control_points_move_by_index() {
    let mut curve = cubic();
    assert!(curve.move_control_point(1, Point::new(30.0, 0.0)));
    assert_eq!(curve.points[1], Point::new(30.0, 0.0));
    assert!(!curve.move_control_point(9, Point::new(0.0, 0.0)));
}
