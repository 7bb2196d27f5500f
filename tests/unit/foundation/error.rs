use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EaseflowError::invalid_format("x")
            .to_string()
            .contains("invalid curve format:")
    );
    assert!(
        EaseflowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        EaseflowError::host_unavailable("x")
            .to_string()
            .contains("host unavailable:")
    );
    assert!(
        EaseflowError::host_failure("x")
            .to_string()
            .contains("host apply failure:")
    );
    assert!(
        EaseflowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn duplicate_name_quotes_the_name() {
    let msg = EaseflowError::duplicate_name("Snappy").to_string();
    assert!(msg.contains("\"Snappy\""));
}

#[test]
fn json_errors_map_to_serde() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(EaseflowError::from(err), EaseflowError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EaseflowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
