use super::*;
use crate::foundation::core::ChannelCount;
use crate::host::applier::{KeyframeApplier, PropertyKind};

/// Replays a canned reply and records what it was sent.
struct Canned {
    reply: EaseflowResult<String>,
    sent: Vec<(String, CubicBezierCurve, EaseParameters)>,
}

impl Canned {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            sent: Vec::new(),
        }
    }
}

impl HostBridge for Canned {
    fn call(
        &mut self,
        curve_name: &str,
        curve: &CubicBezierCurve,
        params: &EaseParameters,
    ) -> EaseflowResult<String> {
        self.sent.push((curve_name.to_string(), *curve, *params));
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(e) => Err(EaseflowError::host_unavailable(e.to_string())),
        }
    }
}

#[test]
fn parse_classifies_replies() {
    assert_eq!(
        HostReply::parse("Success: Applied to 2 properties"),
        HostReply::Success("Success: Applied to 2 properties".to_string())
    );
    assert_eq!(
        HostReply::parse("Error: No layers selected"),
        HostReply::Error("No layers selected".to_string())
    );
    assert_eq!(HostReply::parse("Error"), HostReply::Error("Error".to_string()));
    assert_eq!(HostReply::parse("EvalScript error."), HostReply::Unavailable);
    assert_eq!(
        HostReply::parse("Applied curve: Ease"),
        HostReply::Diagnostic("Applied curve: Ease".to_string())
    );
}

#[test]
fn sends_converted_params_and_returns_success_text() {
    let mut bridge = Canned::replying("Success: Applied to 1 properties");
    let curve = CubicBezierCurve::new(0.25, 0.1, 0.25, 1.0);
    let msg = apply_via_host(&mut bridge, "Ease", &curve).unwrap();
    assert_eq!(msg, "Success: Applied to 1 properties");
    assert_eq!(bridge.sent.len(), 1);
    assert_eq!(bridge.sent[0].0, "Ease");
    assert_eq!(bridge.sent[0].1, curve);
    assert_eq!(bridge.sent[0].2, EaseParameters::from_curve(&curve));
}

#[test]
fn non_success_replies_are_errors() {
    let curve = CubicBezierCurve::LINEAR;

    let err = apply_via_host(&mut Canned::replying("Error: No composition selected"), "x", &curve)
        .unwrap_err();
    assert_eq!(err.to_string(), "host apply failure: No composition selected");

    let err = apply_via_host(&mut Canned::replying("EvalScript error."), "x", &curve).unwrap_err();
    assert!(matches!(err, EaseflowError::HostUnavailable(_)));

    let err = apply_via_host(&mut Canned::replying("hello"), "x", &curve).unwrap_err();
    assert!(matches!(err, EaseflowError::HostApplyFailure(_)));
}

#[test]
fn transport_errors_pass_through() {
    let mut bridge = Canned {
        reply: Err(EaseflowError::host_unavailable("socket closed")),
        sent: Vec::new(),
    };
    let err = apply_via_host(&mut bridge, "x", &CubicBezierCurve::EASE).unwrap_err();
    assert!(matches!(err, EaseflowError::HostUnavailable(_)));
}

fn two_key(name: &str) -> MemoryProperty {
    MemoryProperty::new(name, ChannelCount::One, PropertyKind::Temporal)
        .with_key(0.0, vec![0.0])
        .with_key(1.0, vec![100.0])
}

#[test]
fn memory_host_counts_eased_properties() {
    let single = MemoryProperty::new("Rotation", ChannelCount::One, PropertyKind::Temporal)
        .with_key(0.0, vec![0.0]);
    let mut host = MemoryHost::new(vec![two_key("Opacity"), single, two_key("Rotation")]);
    let curve = CubicBezierCurve::new(0.42, 0.0, 0.58, 1.0);

    let msg = apply_via_host(&mut host, "Ease In-Out", &curve).unwrap();
    assert_eq!(msg, "Success: Applied to 2 properties");

    let selection = host.into_selection();
    let out = &selection[0].keys[0].ease_out[0];
    assert!((out.influence - 42.0).abs() < 1e-9);
    assert!(selection[1].keys[0].ease_out.is_empty());
}

#[test]
fn memory_host_reports_errors_in_band() {
    let mut empty = MemoryHost::default();
    let err = apply_via_host(&mut empty, "Ease", &CubicBezierCurve::EASE).unwrap_err();
    assert_eq!(err.to_string(), "host apply failure: No properties selected");

    let bad = MemoryProperty::new("Scale", ChannelCount::Two, PropertyKind::Temporal)
        .with_key(0.0, vec![1.0])
        .with_key(1.0, vec![2.0, 2.0]);
    let mut host = MemoryHost::new(vec![bad]);
    let err = apply_via_host(&mut host, "Ease", &CubicBezierCurve::EASE).unwrap_err();
    assert!(err.to_string().contains("key 0"), "{err}");
}

fn spatial_path() -> MemoryProperty {
    MemoryProperty::new("Position", ChannelCount::Two, PropertyKind::Spatial)
        .with_key(0.0, vec![0.0, 0.0])
        .with_key(1.0, vec![200.0, 100.0])
}

#[test]
fn memory_host_matches_direct_apply_for_overshoot_curves() {
    // Negative y1 and y2 above 1 are both lost by the ease parameters.
    let curve = CubicBezierCurve::new(0.68, -0.55, 0.265, 1.55);

    let mut direct = spatial_path();
    let opts = direct.options();
    KeyframeApplier::new(curve).apply(&mut direct, opts).unwrap();

    let mut host = MemoryHost::new(vec![spatial_path()]);
    apply_via_host(&mut host, "Back", &curve).unwrap();
    let via_host = host.into_selection().remove(0);

    assert_eq!(via_host, direct);
    let out = via_host.keys[0].out_tangent.as_deref().unwrap();
    assert!(out[0] < 0.0 && out[1] < 0.0, "{out:?}");
}

#[test]
fn memory_host_leaves_selection_untouched_when_any_property_is_invalid() {
    let bad = MemoryProperty::new("Scale", ChannelCount::Two, PropertyKind::Temporal)
        .with_key(0.0, vec![1.0])
        .with_key(1.0, vec![2.0, 2.0]);
    let before = vec![two_key("Opacity"), bad];
    let mut host = MemoryHost::new(before.clone());

    let err = apply_via_host(&mut host, "Ease", &CubicBezierCurve::EASE).unwrap_err();
    assert!(matches!(err, EaseflowError::HostApplyFailure(_)));
    assert_eq!(host.into_selection(), before);
}
