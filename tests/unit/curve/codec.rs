use super::*;

#[test]
fn formats_with_three_decimals() {
    assert_eq!(
        format_curve(&CubicBezierCurve::EASE, EXPORT_DECIMALS),
        "[0.250, 0.100, 0.250, 1.000]"
    );
    assert_eq!(
        CubicBezierCurve::new(0.68, -0.55, 0.265, 1.55).to_string(),
        "[0.680, -0.550, 0.265, 1.550]"
    );
}

#[test]
fn formats_css() {
    assert_eq!(
        format_css(&CubicBezierCurve::EASE),
        "cubic-bezier(0.25, 0.1, 0.25, 1)"
    );
}

#[test]
fn text_round_trip_is_within_a_thousandth() {
    let original = CubicBezierCurve::new(0.3333, 0.1234, 0.9876, 0.5555);
    let text = original.to_string();
    let back: CubicBezierCurve = text.parse().unwrap();
    for (a, b) in original.to_array().iter().zip(back.to_array()) {
        assert!((a - b).abs() < 1e-3);
    }
}

#[test]
fn parses_css_form() {
    let c = parse_curve("cubic-bezier( 0.42 , 0, 0.58, 1 )", ImportRange::Strict).unwrap();
    assert_eq!(c, CubicBezierCurve::new(0.42, 0.0, 0.58, 1.0));
}

#[test]
fn rejects_malformed_text() {
    for bad in [
        "",
        "hello",
        "{\"x1\": 0.1}",
        "[0.1, 0.2, 0.3]",
        "[0.1, 0.2, 0.3, 0.4, 0.5]",
        "[0.1, \"a\", 0.3, 0.4]",
        "cubic-bezier(0.1, 0.2, 0.3)",
        "cubic-bezier(0.1, x, 0.3, 0.4)",
    ] {
        let err = parse_curve(bad, ImportRange::Overshoot).unwrap_err();
        assert!(
            matches!(err, EaseflowError::InvalidCurveFormat(_)),
            "{bad}: {err}"
        );
    }
}

#[test]
fn strict_range_rejects_overshoot() {
    let text = "[0.680, -0.550, 0.265, 1.550]";
    assert!(matches!(
        parse_curve(text, ImportRange::Strict),
        Err(EaseflowError::InvalidCurveFormat(_))
    ));
    let c = parse_curve(text, ImportRange::Overshoot).unwrap();
    assert_eq!(c.y1, -0.55);
}

#[test]
fn overshoot_range_still_bounds_x() {
    assert!(parse_curve("[1.5, 0, 0.5, 1]", ImportRange::Overshoot).is_err());
    assert!(parse_curve("[0.5, 0, -0.1, 1]", ImportRange::Overshoot).is_err());
}

#[test]
fn import_range_names_are_snake_case() {
    let r: ImportRange = serde_json::from_str("\"strict\"").unwrap();
    assert_eq!(r, ImportRange::Strict);
    assert_eq!(ImportRange::default(), ImportRange::Overshoot);
}
