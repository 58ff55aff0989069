use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WrapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WrapError::asset("x").to_string().contains("asset error:"));
    assert!(WrapError::render("x").to_string().contains("render error:"));
    assert!(
        WrapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WrapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
