use pixelkit_designer::{
    CircleShape, Color, DrawingObject, ExportFormat, LineShape, Point, PolygonShape,
    RectangleShape, RgbCubeShape, Scene, SceneError, Shape, ShapeId,
};
use pixelkit_filters::{BinarizeParams, FilterPipeline};
use pixelkit_settings::EditorSettings;

fn rect(x: f64, y: f64, w: f64, h: f64) -> DrawingObject {
    DrawingObject::new(Shape::Rectangle(RectangleShape::new(x, y, w, h).filled(true)))
}

#[test]
fn test_new_scene_is_blank() {
    let mut scene = Scene::new(64, 48);
    assert!(scene.is_empty());
    let buf = scene.render();
    assert_eq!((buf.width(), buf.height()), (64, 48));
    assert_eq!(buf.count_not(Color::WHITE), 0);
}

#[test]
fn test_with_settings() {
    let mut settings = EditorSettings::default();
    settings.canvas.width = 32;
    settings.canvas.height = 16;
    settings.canvas.background = Color::rgb(1, 2, 3);
    settings.history.max_depth = 5;
    settings.interaction.hit_tolerance = 1.0;

    let mut scene = Scene::with_settings(&settings);
    assert_eq!((scene.width(), scene.height()), (32, 16));
    assert_eq!(scene.history().max_depth(), 5);
    assert_eq!(scene.hit_tolerance(), 1.0);
    assert_eq!(scene.render().get_pixel(0, 0), Some(Color::rgb(1, 2, 3)));
}

#[test]
fn test_render_in_insertion_order() {
    let mut scene = Scene::new(40, 40);
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    scene.add_shape(rect(0.0, 0.0, 20.0, 20.0).with_color(red));
    scene.add_shape(rect(10.0, 10.0, 20.0, 20.0).with_color(blue));
    scene.render();

    assert_eq!(scene.get_pixel(5, 5), Some(red));
    assert_eq!(scene.get_pixel(15, 15), Some(blue));
    assert_eq!(scene.get_pixel(35, 35), Some(Color::WHITE));
}

#[test]
fn test_hidden_shapes_are_not_drawn_or_hit() {
    let mut scene = Scene::new(40, 40);
    let id = scene.add_shape(rect(0.0, 0.0, 20.0, 20.0));
    assert!(scene.toggle_visibility(&id));
    scene.render();
    assert_eq!(scene.buffer().count_not(Color::WHITE), 0);
    assert_eq!(scene.find_shape_at_point(5.0, 5.0), None);
    assert!(!scene.toggle_visibility(&ShapeId::from("missing")));
}

#[test]
fn test_topmost_shape_wins_hit_test() {
    let mut scene = Scene::new(100, 100);
    let a = scene.add_shape(rect(10.0, 10.0, 40.0, 40.0));
    let b = scene.add_shape(rect(30.0, 30.0, 40.0, 40.0));
    assert_eq!(scene.find_shape_at_point(40.0, 40.0), Some(b));
    assert_eq!(scene.find_shape_at_point(15.0, 15.0), Some(a));
    assert_eq!(scene.find_shape_at_point(90.0, 5.0), None);
}

#[test]
fn test_selection_is_exclusive() {
    let mut scene = Scene::new(100, 100);
    let x = scene.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let y = scene.add_shape(rect(20.0, 20.0, 10.0, 10.0));

    assert!(scene.select_shape(Some(&x)));
    assert!(scene.select_shape(Some(&y)));
    let selected: Vec<_> = scene.shapes().filter(|s| s.selected).map(|s| s.id.clone()).collect();
    assert_eq!(selected, vec![y.clone()]);
    assert_eq!(scene.selected_id(), Some(y));

    assert!(!scene.select_shape(Some(&ShapeId::from("nope"))));
    assert!(scene.selected_shape().is_none());
}

#[test]
fn test_adding_selected_shape_clears_previous() {
    let mut scene = Scene::new(50, 50);
    let first = scene.add_shape(rect(0.0, 0.0, 5.0, 5.0));
    scene.select_shape(Some(&first));
    let mut second = rect(10.0, 10.0, 5.0, 5.0);
    second.selected = true;
    let second = scene.add_shape(second);
    assert_eq!(scene.selected_id(), Some(second));
}

#[test]
fn test_duplicate_id_is_reassigned() {
    let mut scene = Scene::new(50, 50);
    let a = scene.add_shape(rect(0.0, 0.0, 5.0, 5.0).with_id("same"));
    let b = scene.add_shape(rect(10.0, 10.0, 5.0, 5.0).with_id("same"));
    assert_eq!(a, ShapeId::from("same"));
    assert_ne!(a, b);
    assert_eq!(scene.shape_count(), 2);
}

#[test]
fn test_remove_shape() {
    let mut scene = Scene::new(50, 50);
    let a = scene.add_shape(rect(0.0, 0.0, 5.0, 5.0));
    let b = scene.add_shape(rect(10.0, 10.0, 5.0, 5.0));
    assert!(scene.remove_shape(&a));
    assert!(!scene.remove_shape(&a));
    assert_eq!(scene.shape_count(), 1);
    assert!(scene.shape(&b).is_some());
}

#[test]
fn test_control_point_drag_on_selected_shape() {
    let mut scene = Scene::new(100, 100);
    let id = scene.add_shape(DrawingObject::new(Shape::Rectangle(RectangleShape::new(
        10.0, 10.0, 20.0, 20.0,
    ))));
    assert_eq!(scene.find_control_point_at(30.0, 30.0), None);

    scene.select_shape(Some(&id));
    let (hit_id, index) = scene.find_control_point_at(31.0, 29.0).unwrap();
    assert_eq!(hit_id, id);
    assert_eq!(index, 2);

    assert!(scene.move_control_point(&id, index, Point::new(50.0, 40.0)));
    assert!(!scene.move_control_point(&id, index, Point::new(50.0, 40.0)));
    let bb = scene.shape(&id).unwrap().bounding_box();
    assert_eq!(bb.max_x(), 50.5);
}

#[test]
fn test_move_and_rotate_shapes() {
    let mut scene = Scene::new(100, 100);
    let line = scene.add_shape(DrawingObject::new(Shape::Line(LineShape::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
    ))));
    assert!(scene.move_shape(&line, 5.0, 5.0));
    assert!(!scene.move_shape(&line, 0.0, 0.0));
    assert!(!scene.rotate_shape(&line, 1.0));

    let poly = scene.add_shape(DrawingObject::new(Shape::Polygon(PolygonShape::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]))));
    assert!(scene.rotate_shape(&poly, 0.25));
    match &scene.shape(&poly).unwrap().shape {
        Shape::Polygon(p) => assert_eq!(p.rotation, 0.25),
        other => panic!("unexpected shape {:?}", other),
    }

    let cube = scene.add_shape(DrawingObject::new(Shape::RgbCube(RgbCubeShape::new(
        50.0, 50.0, 30.0,
    ))));
    assert!(scene.rotate_cube(&cube, 0.1, 0.2));
    assert!(!scene.rotate_cube(&poly, 0.1, 0.2));
    match &scene.shape(&cube).unwrap().shape {
        Shape::RgbCube(c) => {
            assert_eq!(c.rotation_y, 0.1);
            assert_eq!(c.rotation_x, 0.2);
        }
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_append_point_and_style_edits() {
    let mut scene = Scene::new(100, 100);
    let poly = scene.add_shape(DrawingObject::new(Shape::Polygon(PolygonShape::new(Vec::new()))));
    assert!(scene.append_point(&poly, Point::new(1.0, 1.0)));
    let circle = scene.add_shape(DrawingObject::new(Shape::Circle(CircleShape::new(
        Point::new(5.0, 5.0),
        3.0,
    ))));
    assert!(!scene.append_point(&circle, Point::new(1.0, 1.0)));

    assert!(scene.set_stroke_width(&circle, 4));
    assert!(!scene.set_stroke_width(&circle, 4));
    assert!(scene.set_color(&circle, Color::rgb(9, 9, 9)));
    assert!(!scene.set_color(&circle, Color::rgb(9, 9, 9)));
    assert!(!scene.set_image_filters(
        &circle,
        FilterPipeline {
            binarize: Some(BinarizeParams::default()),
            ..FilterPipeline::default()
        }
    ));
}

#[test]
fn test_direct_pixel_access_and_export() {
    let mut scene = Scene::new(8, 8);
    scene.render();
    assert!(scene.set_pixel(3, 3, Color::BLACK));
    assert!(!scene.set_pixel(8, 3, Color::BLACK));
    assert_eq!(scene.get_pixel(3, 3), Some(Color::BLACK));

    let png = scene.export(ExportFormat::Png).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    // Export re-renders, discarding direct writes.
    assert_eq!(scene.get_pixel(3, 3), Some(Color::WHITE));
}

#[test]
fn test_export_of_empty_canvas_fails() {
    let mut scene = Scene::new(0, 0);
    assert!(matches!(
        scene.export(ExportFormat::Png),
        Err(SceneError::Core(_))
    ));
}
