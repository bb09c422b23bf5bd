//! Geometry tests through the public API.

use sketchboard::geometry::{is_near_polyline, Affine, Point};

#[test]
fn test_compose_is_associative() {
    let a = Affine::translate(3.0, -1.0);
    let b = Affine::scale(2.0);
    let c = Affine::translate(-7.0, 4.0);

    let left = a.multiply(&b).multiply(&c);
    let right = a.multiply(&b.multiply(&c));
    for (l, r) in left.entries().iter().zip(right.entries().iter()) {
        assert!((l - r).abs() < 1e-12);
    }
}

#[test]
fn test_scale_then_translate_maps_origin() {
    // Scale first (no effect on the origin), then translate.
    let m = Affine::compose(&[Affine::translate(5.0, 6.0), Affine::scale(3.0)]);
    assert_eq!(m.apply(Point::new(0.0, 0.0)), Point::new(5.0, 6.0));
    assert_eq!(m.apply(Point::new(1.0, 1.0)), Point::new(8.0, 9.0));
}

#[test]
fn test_inverse_undoes_long_chain() {
    let mut m = Affine::IDENTITY;
    for i in 1..20 {
        let factor = 1.0 + (i as f64) / 10.0;
        m = Affine::compose(&[Affine::translate(i as f64, -i as f64), Affine::scale(factor), m]);
    }
    let p = Point::new(0.25, -3.5);
    let back = m.inverse().apply(m.apply(p));
    assert!((back.x - p.x).abs() < 1e-6);
    assert!((back.y - p.y).abs() < 1e-6);
}

#[test]
fn test_polyline_proximity_zigzag() {
    let zigzag: Vec<Point> = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (30.0, 10.0)]
        .into_iter()
        .map(Point::from)
        .collect();

    // On a vertex.
    assert!(is_near_polyline(Point::new(10.0, 10.0), &zigzag, 1.0));
    // Near the middle of the second segment.
    assert!(is_near_polyline(Point::new(15.0, 5.5), &zigzag, 1.0));
    // In the notch between the arms, farther than the radius.
    assert!(!is_near_polyline(Point::new(10.0, 0.0), &zigzag, 1.0));
}

#[test]
fn test_proximity_radius_scales() {
    let line = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    let probe = Point::new(50.0, 15.0);
    assert!(!is_near_polyline(probe, &line, 10.0));
    assert!(is_near_polyline(probe, &line, 20.0));
}
