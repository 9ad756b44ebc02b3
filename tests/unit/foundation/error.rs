use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::empty_domain("x")
            .to_string()
            .contains("empty domain:")
    );
    assert!(
        AvatarError::invalid("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(AvatarError::config("x").to_string().contains("config error:"));
    assert!(
        AvatarError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        AvatarError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn batch_item_keeps_key_and_source() {
    let err = AvatarError::batch_item("u1", AvatarError::invalid("empty key"));
    let msg = err.to_string();
    assert!(msg.contains("'u1'"));
    assert!(msg.contains("empty key"));
    let src = std::error::Error::source(&err).unwrap();
    assert!(src.to_string().contains("invalid parameter:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
