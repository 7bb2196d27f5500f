use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(close(ease.apply(0.0), 0.0), "{ease} at 0");
        assert!(close(ease.apply(1.0), 1.0), "{ease} at 1");
    }
}

#[test]
fn special_cased_endpoints_are_exact() {
    assert_eq!(Ease::InExpo.apply(0.0), 0.0);
    assert_eq!(Ease::OutExpo.apply(1.0), 1.0);
    assert_eq!(Ease::InOutExpo.apply(0.0), 0.0);
    assert_eq!(Ease::InOutExpo.apply(1.0), 1.0);
    for ease in [Ease::InElastic, Ease::OutElastic, Ease::InOutElastic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        if ease.overshoots()
            || matches!(ease, Ease::InBounce | Ease::OutBounce | Ease::InOutBounce)
        {
            continue;
        }
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn known_values() {
    assert!(close(Ease::InQuad.apply(0.5), 0.25));
    assert!(close(Ease::OutQuad.apply(0.5), 0.75));
    assert!(close(Ease::InOutQuad.apply(0.25), 0.125));
    assert!(close(Ease::InOutQuad.apply(0.75), 0.875));
    assert!(close(Ease::InOutCubic.apply(0.5), 0.5));
    assert!(close(Ease::OutCubic.apply(0.5), 0.875));
    assert!(close(Ease::InQuint.apply(0.5), 0.03125));
    assert!(close(Ease::InOutSine.apply(0.5), 0.5));
    assert!(close(Ease::InExpo.apply(0.5), 2f64.powf(-5.0)));
    assert!(close(Ease::OutBounce.apply(1.0 / 2.75), 1.0));
    assert!(close(Ease::InOutBounce.apply(0.5), 0.5));
}

#[test]
fn overshoot_families_leave_the_unit_range() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
    assert!(Ease::OutElastic.apply(0.1) > 1.0);
}

#[test]
fn bounded_families_stay_in_unit_range() {
    for ease in Ease::ALL {
        if ease.overshoots() {
            continue;
        }
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!((-1e-9..=1.0 + 1e-9).contains(&v), "{ease} = {v}");
        }
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InCirc.apply(-0.5), 0.0);
    assert_eq!(Ease::InQuad.apply(-0.5), 0.0);
    assert!(close(Ease::OutCirc.apply(2.0), 1.0));
}

#[test]
fn parses_names_loosely() {
    assert_eq!("InOutQuad".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("in-out-quad".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("out_bounce".parse::<Ease>().unwrap(), Ease::OutBounce);
    assert_eq!("linear".parse::<Ease>().unwrap(), Ease::Linear);
    assert!("wobble".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_variant_names() {
    let s = serde_json::to_string(&Ease::InOutElastic).unwrap();
    assert_eq!(s, "\"InOutElastic\"");
    for ease in Ease::ALL {
        assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);
    }
}
