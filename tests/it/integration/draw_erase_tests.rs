//! Draw and erase workflows through the full event flow.

use crate::helpers::{draw_stroke, mouse_down, mouse_move, mouse_up, TestCanvasBuilder};
use sketchboard::geometry::Point;
use sketchboard::{CanvasMode, Color, Settings, SketchCanvas};

#[test]
fn test_drawn_stroke_records_canvas_points() {
    let canvas = TestCanvasBuilder::new()
        .with_stroke(&[(10.0, 10.0), (20.0, 15.0), (30.0, 10.0)])
        .build();

    assert_eq!(canvas.paths().len(), 1);
    let points = &canvas.paths()[0].points;
    assert_eq!(points[0], Point::new(10.0, 10.0));
    assert_eq!(points[2], Point::new(30.0, 10.0));
}

#[test]
fn test_erase_removes_only_the_stroke_under_cursor() {
    let mut canvas = TestCanvasBuilder::new()
        .with_stroke(&[(0.0, 0.0), (100.0, 0.0)])
        .with_stroke(&[(0.0, 100.0), (100.0, 100.0)])
        .with_mode(CanvasMode::Erase)
        .build();

    // Press and sweep across the first stroke.
    canvas.on_mouse_move(mouse_move(50.0, 40.0, 0));
    canvas.on_mouse_down(mouse_down(50.0, 40.0, 0));
    canvas.on_mouse_move(mouse_move(50.0, 10.0, 1));

    assert_eq!(canvas.paths().len(), 1);
    assert_eq!(canvas.paths()[0].points[0], Point::new(0.0, 100.0));
}

#[test]
fn test_erase_requires_held_primary_button() {
    let mut canvas = TestCanvasBuilder::new()
        .with_stroke(&[(0.0, 0.0), (100.0, 0.0)])
        .with_mode(CanvasMode::Erase)
        .build();

    // Hovering over the stroke without pressing erases nothing.
    canvas.on_mouse_move(mouse_move(50.0, 1.0, 0));
    assert_eq!(canvas.paths().len(), 1);
}

#[test]
fn test_click_only_stroke_is_unerasable() {
    let mut canvas = SketchCanvas::default();

    // A click with no intervening move leaves a one-point path.
    canvas.on_mouse_move(mouse_move(50.0, 50.0, 0));
    canvas.on_mouse_down(mouse_down(50.0, 50.0, 0));
    canvas.on_mouse_up(mouse_up(50.0, 50.0, 0));
    assert_eq!(canvas.paths().len(), 1);
    assert_eq!(canvas.paths()[0].points.len(), 1);

    canvas.set_mode(CanvasMode::Erase);
    canvas.on_mouse_down(mouse_down(50.0, 50.0, 0));
    canvas.on_mouse_move(mouse_move(51.0, 50.0, 1));
    assert_eq!(canvas.paths().len(), 1, "single-point paths have no segments");
}

#[test]
fn test_stroke_style_is_captured_at_begin() {
    let mut canvas = SketchCanvas::default();
    canvas.set_stroke_color(Color::new(255, 0, 0));
    canvas.set_stroke_width(4.0);
    draw_stroke(&mut canvas, &[(0.0, 0.0), (10.0, 0.0)]);

    canvas.set_stroke_color(Color::new(0, 255, 0));
    draw_stroke(&mut canvas, &[(0.0, 50.0), (10.0, 50.0)]);

    assert_eq!(canvas.paths()[0].color, Color::new(255, 0, 0));
    assert_eq!(canvas.paths()[0].stroke_width, 4.0);
    assert_eq!(canvas.paths()[1].color, Color::new(0, 255, 0));
}

#[test]
fn test_down_before_any_move_still_begins_at_event_position() {
    let mut canvas = SketchCanvas::default();
    // First ever event is the press itself.
    canvas.on_mouse_down(mouse_down(3.0, 4.0, 0));
    assert_eq!(canvas.paths().len(), 1);
    assert_eq!(canvas.paths()[0].points[0], Point::new(3.0, 4.0));
}

#[test]
fn test_configured_erase_radius_widens_the_sweep() {
    let mut canvas = TestCanvasBuilder::new()
        .with_settings(Settings {
            erase_radius: 50.0,
            ..Settings::default()
        })
        .with_stroke(&[(0.0, 0.0), (100.0, 0.0)])
        .with_mode(CanvasMode::Erase)
        .build();

    // 45 canvas units away: out of reach at the stock radius of 20.
    canvas.on_mouse_move(mouse_move(50.0, 45.0, 0));
    canvas.on_mouse_down(mouse_down(50.0, 45.0, 0));
    canvas.on_mouse_move(mouse_move(51.0, 45.0, 1));
    assert!(canvas.paths().is_empty());
}

#[test]
fn test_erase_sweep_can_remove_multiple_strokes() {
    let mut canvas = TestCanvasBuilder::new()
        .with_stroke(&[(0.0, 0.0), (100.0, 0.0)])
        .with_stroke(&[(0.0, 200.0), (100.0, 200.0)])
        .with_mode(CanvasMode::Erase)
        .build();

    canvas.on_mouse_move(mouse_move(50.0, -30.0, 0));
    canvas.on_mouse_down(mouse_down(50.0, -30.0, 0));
    canvas.on_mouse_move(mouse_move(50.0, 5.0, 1));
    canvas.on_mouse_move(mouse_move(50.0, 195.0, 1));

    assert!(canvas.paths().is_empty());
}
