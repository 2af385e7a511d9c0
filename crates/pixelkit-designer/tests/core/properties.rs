use pixelkit_designer::raster::draw_line;
use pixelkit_designer::{
    Color, DrawingObject, PixelBuffer, Point, PolygonShape, RasterShape, RectangleShape, Shape,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_line_endpoints_are_plotted(
        x0 in 0i32..64, y0 in 0i32..64, x1 in 0i32..64, y1 in 0i32..64, width in 1u32..8
    ) {
        let mut buf = PixelBuffer::new(64, 64);
        let from = Point::new(x0 as f64, y0 as f64);
        let to = Point::new(x1 as f64, y1 as f64);
        draw_line(&mut buf, from, to, width, Color::BLACK);
        prop_assert_eq!(buf.get_pixel(x0, y0), Some(Color::BLACK));
        prop_assert_eq!(buf.get_pixel(x1, y1), Some(Color::BLACK));
    }

    #[test]
    fn prop_translate_shifts_bounding_box(
        x in -100.0f64..100.0, y in -100.0f64..100.0,
        w in -50.0f64..50.0, h in -50.0f64..50.0,
        dx in -20.0f64..20.0, dy in -20.0f64..20.0
    ) {
        let mut obj = DrawingObject::new(Shape::Rectangle(RectangleShape::new(x, y, w, h)));
        let before = obj.bounding_box();
        obj.shape.translate(dx, dy);
        let after = obj.bounding_box();
        prop_assert!((after.x - before.x - dx).abs() < 1e-9);
        prop_assert!((after.y - before.y - dy).abs() < 1e-9);
        prop_assert!((after.width - before.width).abs() < 1e-9);
    }

    #[test]
    fn prop_polygon_rotation_preserves_centroid(
        pts in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..8),
        angle in -6.3f64..6.3
    ) {
        let mut poly = PolygonShape::new(pts.into_iter().map(Point::from).collect());
        let before = poly.centroid().unwrap();
        poly.rotate_points(angle);
        let after = poly.centroid().unwrap();
        prop_assert!(before.distance_to(&after) < 1e-6);
    }

    #[test]
    fn prop_serialized_objects_round_trip(
        cx in -50.0f64..50.0, cy in -50.0f64..50.0, r in 0.0f64..40.0,
        filled in any::<bool>(), stroke in 0u32..10
    ) {
        let obj = DrawingObject::new(Shape::Circle(
            pixelkit_designer::CircleShape::new(Point::new(cx, cy), r).filled(filled),
        ))
        .with_stroke_width(stroke);
        let json = serde_json::to_string(&obj).unwrap();
        let back: DrawingObject = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, obj);
    }
}
