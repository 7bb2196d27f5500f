use super::*;

const CURVES: [[f64; 4]; 6] = [
    [0.25, 0.1, 0.25, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.42, 0.0, 0.58, 1.0],
    [0.68, -0.55, 0.265, 1.55],
    [0.927, 0.0, 0.852, 0.953],
    [1.0, 0.0, 0.0, 1.0],
];

#[test]
fn anchors_are_exact() {
    for [x1, y1, x2, y2] in CURVES {
        assert_eq!(evaluate(x1, y1, x2, y2, 0.0), 0.0);
        assert_eq!(evaluate(x1, y1, x2, y2, 1.0), 1.0);
    }
}

#[test]
fn linear_is_identity() {
    for i in 0..=100 {
        let x = f64::from(i) / 100.0;
        let y = CubicBezierCurve::LINEAR.evaluate(x);
        assert!((y - x).abs() < 1e-4, "x={x} y={y}");
    }
}

#[test]
fn ease_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let y = CubicBezierCurve::EASE.evaluate(f64::from(i) / 100.0);
        assert!(y >= prev, "y dropped at sample {i}");
        prev = y;
    }
}

#[test]
fn ease_midpoint_matches_css() {
    let y = evaluate(0.25, 0.1, 0.25, 1.0, 0.5);
    assert!((y - 0.8016).abs() < 1e-2, "y={y}");
    assert!((y - 0.8024).abs() < 1e-3, "y={y}");
}

#[test]
fn solved_parameter_reproduces_x() {
    for c in CURVES {
        let curve = CubicBezierCurve::from(c);
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            let t = curve.solve_t(x);
            assert!(
                (curve.point_at(t).x - x).abs() < 1e-4,
                "curve {c:?} x={x} t={t}"
            );
        }
    }
}

#[test]
fn flat_slope_falls_back_to_bisection() {
    // x'(t) vanishes at t = 0.5 for this curve.
    let curve = CubicBezierCurve::new(1.0, 0.0, 0.0, 1.0);
    for x in [0.45, 0.49, 0.5, 0.51, 0.55] {
        let t = curve.solve_t(x);
        assert!((0.0..=1.0).contains(&t));
        assert!((curve.point_at(t).x - x).abs() < 1e-4);
    }
}

#[test]
fn overshoot_curves_leave_unit_range() {
    let back = CubicBezierCurve::new(0.68, -0.6, 0.32, 1.6);
    let ys: Vec<f64> = back.sample(50).into_iter().map(|p| p.y).collect();
    assert!(ys.iter().any(|&y| y < 0.0));
    assert!(ys.iter().any(|&y| y > 1.0));
}

#[test]
fn sample_spans_unit_interval() {
    let pts = CubicBezierCurve::EASE.sample(10);
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0], Point::ORIGIN);
    assert_eq!(pts[10], Point::new(1.0, 1.0));
}

#[test]
fn point_at_hits_anchors() {
    let c = CubicBezierCurve::new(0.3, 1.4, 0.7, -0.2);
    let p0 = c.point_at(0.0);
    let p1 = c.point_at(1.0);
    assert!(p0.x.abs() < 1e-12 && p0.y.abs() < 1e-12);
    assert!((p1.x - 1.0).abs() < 1e-12 && (p1.y - 1.0).abs() < 1e-12);
}

#[test]
fn to_cubic_bez_keeps_anchors_and_handles() {
    let bez = CubicBezierCurve::EASE.to_cubic_bez();
    assert_eq!(bez.p0, Point::ORIGIN);
    assert_eq!(bez.p1, Point::new(0.25, 0.1));
    assert_eq!(bez.p2, Point::new(0.25, 1.0));
    assert_eq!(bez.p3, Point::new(1.0, 1.0));
}

#[test]
fn serializes_as_bare_array() {
    let s = serde_json::to_string(&CubicBezierCurve::EASE).unwrap();
    assert_eq!(s, "[0.25,0.1,0.25,1.0]");
    let back: CubicBezierCurve = serde_json::from_str("[0.42, 0, 0.58, 1]").unwrap();
    assert_eq!(back, CubicBezierCurve::new(0.42, 0.0, 0.58, 1.0));
}

#[test]
fn default_is_css_ease() {
    assert_eq!(CubicBezierCurve::default(), CubicBezierCurve::EASE);
}
