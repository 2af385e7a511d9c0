use std::sync::Arc;

use pixelkit_designer::{
    BrushShape, CircleShape, Color, DrawingObject, ImageShape, LineShape, PixelBuffer, Point,
    RasterShape, RawImage, RectangleShape, RgbCubeShape, Shape, ShapeStyle,
};

fn style(width: u32) -> ShapeStyle {
    ShapeStyle::new(Color::BLACK, width)
}

#[test]
fn test_rectangle_outline_one_pixel() {
    let rect = RectangleShape::new(2.0, 2.0, 5.0, 4.0);
    let mut buf = PixelBuffer::new(12, 12);
    rect.draw(&mut buf, &style(1));

    assert_eq!(buf.count_not(Color::TRANSPARENT), 14);
    assert_eq!(buf.get_pixel(2, 2), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(6, 5), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(4, 3), Some(Color::TRANSPARENT));
}

#[test]
fn test_rectangle_thick_outline_has_square_corners() {
    let rect = RectangleShape::new(10.0, 10.0, 10.0, 10.0);
    let mut buf = PixelBuffer::new(32, 32);
    rect.draw(&mut buf, &style(3));

    // 12x12 outer square minus the 6x6 hole.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 108);
    assert_eq!(buf.get_pixel(9, 9), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(20, 20), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(12, 12), Some(Color::TRANSPARENT));
}

#[test]
fn test_filled_rectangle_with_negative_size() {
    let rect = RectangleShape::new(8.0, 8.0, -4.0, -3.0).filled(true);
    let mut buf = PixelBuffer::new(10, 10);
    rect.draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(Color::TRANSPARENT), 12);
    assert_eq!(buf.get_pixel(4, 5), Some(Color::BLACK));
    assert!(rect.contains_point(Point::new(5.0, 6.0), 1, 0.0));
}

#[test]
fn test_rectangle_corner_drag_keeps_opposite_fixed() {
    let mut rect = RectangleShape::new(10.0, 10.0, 20.0, 10.0);
    assert!(rect.move_control_point(2, Point::new(40.0, 30.0)));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (10.0, 10.0, 30.0, 20.0));

    assert!(rect.move_control_point(0, Point::new(50.0, 50.0)));
    let bb = rect.normalized();
    assert_eq!((bb.x, bb.y, bb.width, bb.height), (40.0, 30.0, 10.0, 20.0));

    // Zero-delta drag is a no-op.
    let corner = rect.control_points()[1];
    assert!(!rect.move_control_point(1, corner));
    assert!(!rect.move_control_point(7, Point::new(0.0, 0.0)));
}

#[test]
fn test_rectangle_outline_hit_test() {
    let rect = RectangleShape::new(0.0, 0.0, 100.0, 100.0);
    assert!(rect.contains_point(Point::new(2.0, 50.0), 1, 6.0));
    assert!(!rect.contains_point(Point::new(50.0, 50.0), 1, 6.0));
    assert!(!rect.contains_point(Point::new(120.0, 50.0), 1, 6.0));
}

#[test]
fn test_circle_containment() {
    let circle = CircleShape::new(Point::new(50.0, 50.0), 20.0).filled(true);
    assert!(circle.contains_point(Point::new(50.0, 50.0), 1, 6.0));
    assert!(!circle.contains_point(Point::new(50.0, 80.0), 1, 6.0));
}

#[test]
fn test_circle_outline_ring() {
    let circle = CircleShape::new(Point::new(10.0, 10.0), 5.0);
    let mut buf = PixelBuffer::new(21, 21);
    circle.draw(&mut buf, &style(1));
    assert_eq!(buf.get_pixel(15, 10), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(10, 5), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(10, 10), Some(Color::TRANSPARENT));
    assert_eq!(buf.get_pixel(17, 10), Some(Color::TRANSPARENT));
}

#[test]
fn test_filled_circle_spans() {
    let circle = CircleShape::new(Point::new(5.0, 5.0), 2.0).filled(true);
    let mut buf = PixelBuffer::new(11, 11);
    circle.draw(&mut buf, &style(1));
    // Rows: 1 + 3 + 5 + 3 + 1 pixels.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 13);
}

#[test]
fn test_circle_handles() {
    let mut circle = CircleShape::new(Point::new(20.0, 20.0), 5.0);
    let handles = circle.control_points();
    assert_eq!(handles.len(), 5);
    assert_eq!(handles[1], Point::new(25.0, 20.0));
    assert_eq!(handles[4], Point::new(20.0, 15.0));

    assert!(circle.move_control_point(3, Point::new(8.0, 20.0)));
    assert_eq!(circle.radius, 12.0);

    assert!(circle.move_control_point(0, Point::new(30.0, 30.0)));
    assert_eq!(circle.center, Point::new(30.0, 30.0));
    assert_eq!(circle.radius, 12.0);
}

#[test]
fn test_line_hit_test_and_translate() {
    let mut line = LineShape::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert!(line.contains_point(Point::new(50.0, 4.0), 1, 6.0));
    assert!(!line.contains_point(Point::new(50.0, 10.0), 1, 6.0));

    line.translate(5.0, 5.0);
    let bb = line.bounding_box(2);
    assert_eq!((bb.x, bb.y, bb.width, bb.height), (4.0, 4.0, 102.0, 2.0));
}

#[test]
fn test_brush_stamps_along_trace() {
    let brush = BrushShape::new(vec![Point::new(5.0, 5.0), Point::new(15.0, 5.0)], 2.0);
    let mut buf = PixelBuffer::new(20, 12);
    brush.draw(&mut buf, &style(2));
    assert_eq!(buf.get_pixel(10, 7), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(10, 8), Some(Color::TRANSPARENT));
    assert_eq!(buf.get_pixel(3, 5), Some(Color::BLACK));
    assert!(brush.contains_point(Point::new(10.0, 9.0), 2, 4.0));
}

#[test]
fn test_selected_object_draws_handles() {
    let mut obj = DrawingObject::new(Shape::Rectangle(RectangleShape::new(
        10.0, 10.0, 20.0, 20.0,
    )));
    let mut plain = PixelBuffer::new(40, 40);
    obj.draw(&mut plain);

    obj.selected = true;
    let mut selected = PixelBuffer::new(40, 40);
    obj.draw(&mut selected);

    assert!(selected.count_not(Color::TRANSPARENT) > plain.count_not(Color::TRANSPARENT));
    assert_eq!(obj.control_point_at(Point::new(31.0, 29.0), 3.0), Some(2));
}

#[test]
fn test_huge_circle_on_small_canvas() {
    let mut buf = PixelBuffer::new(10, 10);
    CircleShape::new(Point::new(5.0, 5.0), 50_000.0).draw(&mut buf, &style(1));
    // The ring lies far outside the canvas.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 0);

    CircleShape::new(Point::new(5.0, 5.0), 50_000.0)
        .filled(true)
        .draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(Color::BLACK), 0);
}

#[test]
fn test_ring_of_far_centered_circle_crosses_canvas() {
    let mut buf = PixelBuffer::new(100, 100);
    let circle = CircleShape::new(Point::new(-3995.0, 50.0), 4000.0);
    circle.draw(&mut buf, &style(1));
    assert_eq!(buf.get_pixel(5, 50), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(0, 50), Some(Color::TRANSPARENT));
    assert_eq!(buf.get_pixel(50, 50), Some(Color::TRANSPARENT));

    let mut far = PixelBuffer::new(10, 10);
    CircleShape::new(Point::new(-1e9, 5.0), 1e9 + 5.0).draw(&mut far, &style(1));
    assert_eq!(far.get_pixel(5, 5), Some(Color::BLACK));
    assert_eq!(far.get_pixel(2, 5), Some(Color::TRANSPARENT));
}

#[test]
fn test_huge_brush_fills_canvas() {
    let mut buf = PixelBuffer::new(10, 10);
    BrushShape::new(vec![Point::new(5.0, 5.0)], 50_000.0).draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(Color::BLACK), 0);

    let mut buf = PixelBuffer::new(10, 10);
    let brush = BrushShape::new(vec![Point::new(-1e9, 5.0), Point::new(1e9, 5.0)], 2.0);
    brush.draw(&mut buf, &style(1));
    // Radius 2 band across the whole canvas: rows 3..=7.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 50);
}

#[test]
fn test_far_line_and_rectangle_are_clipped() {
    let mut buf = PixelBuffer::new(10, 10);
    let line = LineShape::new(Point::new(-1e12, 5.0), Point::new(1e12, 5.0));
    line.draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(Color::TRANSPARENT), 10);

    let mut buf = PixelBuffer::new(10, 10);
    let outline = RectangleShape::new(-1e12, -1e12, 2e12, 2e12);
    outline.draw(&mut buf, &style(3));
    assert_eq!(buf.count_not(Color::TRANSPARENT), 0);
    outline.clone().filled(true).draw(&mut buf, &style(3));
    assert_eq!(buf.count_not(Color::BLACK), 0);

    // Left edge far away, right edge on the canvas at x = 4.
    let mut buf = PixelBuffer::new(10, 10);
    RectangleShape::new(-1e9, 0.0, 1e9 + 5.0, 10.0)
        .filled(true)
        .draw(&mut buf, &style(1));
    assert_eq!(buf.get_pixel(4, 5), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(5, 5), Some(Color::TRANSPARENT));
}

#[test]
fn test_huge_image_and_cube_are_clipped() {
    let red = Color::rgb(255, 0, 0);
    let image = ImageShape::new("big", -1e9, -1e9, 2e9 + 10.0, 2e9 + 10.0)
        .with_source(Arc::new(RawImage::filled(2, 2, red)));
    let mut buf = PixelBuffer::new(10, 10);
    image.draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(red), 0);

    let cube = RgbCubeShape::new(5.0, 5.0, 1e7);
    let mut buf = PixelBuffer::new(10, 10);
    cube.draw(&mut buf, &style(1));
    assert_eq!(buf.count_not(Color::TRANSPARENT), 100);
}
