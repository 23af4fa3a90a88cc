use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ThumbcraftError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(
        ThumbcraftError::image_load("x")
            .to_string()
            .contains("image load error:")
    );
    assert!(
        ThumbcraftError::clipboard("x")
            .to_string()
            .contains("clipboard error:")
    );
    assert!(
        ThumbcraftError::export("x")
            .to_string()
            .contains("export error:")
    );
    assert!(
        ThumbcraftError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThumbcraftError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
