use pixelkit_designer::raster::draw_line;
use pixelkit_designer::{Color, PixelBuffer, Point};

fn set_pixels(buf: &PixelBuffer, background: Color) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..buf.height() as i32 {
        for x in 0..buf.width() as i32 {
            if buf.get_pixel(x, y) != Some(background) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn test_horizontal_line_sets_exact_pixels() {
    let mut buf = PixelBuffer::new(20, 5);
    draw_line(
        &mut buf,
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        1,
        Color::BLACK,
    );
    let expected: Vec<(i32, i32)> = (0..=10).map(|x| (x, 0)).collect();
    assert_eq!(set_pixels(&buf, Color::TRANSPARENT), expected);
}

#[test]
fn test_width_three_runs_perpendicular() {
    let mut buf = PixelBuffer::new(20, 10);
    draw_line(
        &mut buf,
        Point::new(2.0, 5.0),
        Point::new(6.0, 5.0),
        3,
        Color::BLACK,
    );
    // Rows 4, 5 and 6 for each of the five columns.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 15);
    assert_eq!(buf.get_pixel(2, 4), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(2, 6), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(2, 7), Some(Color::TRANSPARENT));
}

#[test]
fn test_steep_line_runs_horizontally() {
    let mut buf = PixelBuffer::new(10, 10);
    draw_line(
        &mut buf,
        Point::new(5.0, 1.0),
        Point::new(5.0, 3.0),
        2,
        Color::BLACK,
    );
    // width 2: offsets -1 and 0.
    assert_eq!(buf.count_not(Color::TRANSPARENT), 6);
    assert_eq!(buf.get_pixel(4, 2), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(6, 2), Some(Color::TRANSPARENT));
}

#[test]
fn test_wide_line_stamps_discs() {
    let mut buf = PixelBuffer::new(30, 30);
    draw_line(
        &mut buf,
        Point::new(15.0, 15.0),
        Point::new(15.0, 15.0),
        6,
        Color::BLACK,
    );
    // Single disc of radius 3.
    assert_eq!(buf.get_pixel(18, 15), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(15, 12), Some(Color::BLACK));
    assert_eq!(buf.get_pixel(18, 18), Some(Color::TRANSPARENT));
}

#[test]
fn test_line_off_canvas_is_clipped() {
    let mut buf = PixelBuffer::new(5, 5);
    draw_line(
        &mut buf,
        Point::new(-10.0, 2.0),
        Point::new(20.0, 2.0),
        1,
        Color::BLACK,
    );
    assert_eq!(buf.count_not(Color::TRANSPARENT), 5);
}
