use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DenoyteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DenoyteError::malformed("x")
            .to_string()
            .contains("malformed float image:")
    );
    assert!(
        DenoyteError::export("x")
            .to_string()
            .contains("export error:")
    );
    assert!(
        DenoyteError::denoise("x")
            .to_string()
            .contains("denoise error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DenoyteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
