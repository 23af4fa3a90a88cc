use super::*;

#[test]
fn clamped_limits_each_axis_independently() {
    let p = Position::new(-12.0, 140.0).clamped();
    assert_eq!(p, Position::new(0.0, 100.0));

    let p = Position::new(37.5, 62.5).clamped();
    assert_eq!(p, Position::new(37.5, 62.5));
}

#[test]
fn offset_by_pixels_converts_to_container_percent() {
    let start = Position::new(50.0, 50.0);
    let moved = start.offset_by_pixels(Vec2::new(80.0, -45.0), Size::new(800.0, 450.0));
    assert!((moved.x - 60.0).abs() < 1e-9);
    assert!((moved.y - 40.0).abs() < 1e-9);
}

#[test]
fn offset_by_pixels_ignores_degenerate_container() {
    let start = Position::new(20.0, 30.0);
    let moved = start.offset_by_pixels(Vec2::new(10.0, 10.0), Size::new(0.0, f64::NAN));
    assert_eq!(moved, start);
}

#[test]
fn canvas_point_scales_percentages() {
    let pt = Position::new(25.0, 50.0).to_canvas_point(Canvas::THUMBNAIL);
    assert_eq!(pt, Point::new(640.0, 720.0));
}

#[test]
fn rgba_with_alpha_keeps_channels() {
    let c = Rgba8::rgb(1, 2, 3).with_alpha(4);
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));
}
