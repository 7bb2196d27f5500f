use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_curve_scenario() {
    let p = EaseParameters::from_curve(&CubicBezierCurve::EASE);
    assert!(close(p.out_influence, 25.0));
    assert!(close(p.in_influence, 75.0));
    assert!(close(p.out_speed, 10.0));
    assert!(close(p.in_speed, 100.0));
}

#[test]
fn linear_curve_scenario() {
    let p = EaseParameters::from(&CubicBezierCurve::LINEAR);
    assert_eq!(p.out_influence, MIN_INFLUENCE);
    // x2 = 1 leaves no incoming influence, floored like the outgoing side.
    assert_eq!(p.in_influence, MIN_INFLUENCE);
    assert_eq!(p.out_speed, 0.0);
    assert_eq!(p.in_speed, 100.0);
}

#[test]
fn values_are_clamped() {
    let p = EaseParameters::from_curve(&CubicBezierCurve::new(1.5, 2.0, -0.5, -3.0));
    assert_eq!(p.out_influence, 100.0);
    assert_eq!(p.in_influence, 100.0);
    assert_eq!(p.out_speed, 100.0);
    assert_eq!(p.in_speed, 100.0);

    let p = EaseParameters::from_curve(&CubicBezierCurve::new(-1.0, 0.0, 2.0, 0.0));
    assert_eq!(p.out_influence, MIN_INFLUENCE);
    assert_eq!(p.in_influence, MIN_INFLUENCE);
}

#[test]
fn negative_y_uses_magnitude() {
    let p = EaseParameters::from_curve(&CubicBezierCurve::new(0.68, -0.55, 0.265, 1.55));
    assert!(close(p.out_speed, 55.0));
    assert_eq!(p.in_speed, 100.0);
}

#[test]
fn inverse_recovers_in_range_curves() {
    let c = CubicBezierCurve::new(0.42, 0.3, 0.58, 0.9);
    let back = EaseParameters::from_curve(&c).to_curve();
    for (a, b) in c.to_array().iter().zip(back.to_array()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn outgoing_and_incoming_pick_their_side() {
    let p = EaseParameters::from_curve(&CubicBezierCurve::EASE);
    assert_eq!(
        p.outgoing(),
        KeyframeEase {
            speed: p.out_speed,
            influence: p.out_influence
        }
    );
    assert_eq!(p.incoming().influence, p.in_influence);
}

#[test]
fn serializes_with_host_field_names() {
    let p = EaseParameters::from_curve(&CubicBezierCurve::LINEAR);
    let v = serde_json::to_value(p).unwrap();
    for key in ["outInfluence", "inInfluence", "outSpeed", "inSpeed"] {
        assert!(v.get(key).is_some(), "{key}");
    }
}
