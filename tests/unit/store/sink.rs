use super::*;

#[test]
fn logical_names_keep_safe_characters() {
    assert_eq!(logical_name(AvatarKind::Face, "user123"), "avatar_user123");
    assert_eq!(
        logical_name(AvatarKind::Custom, "a/b c-d_e"),
        "custom_avatar_abc-d_e"
    );
    assert_eq!(logical_name(AvatarKind::Initials, "johndoe"), "initials_johndoe");
    assert_eq!(logical_name(AvatarKind::Identicon, "x.y"), "identicon_xy");
}

#[test]
fn unsafe_only_key_falls_back_to_checksum() {
    let name = logical_name(AvatarKind::Face, "日本");
    let hex = format!("{:08x}", crc32("日本".as_bytes()));
    assert_eq!(name, format!("avatar_{hex}"));
    assert_eq!(hex.len(), 8);
}

#[test]
fn in_memory_sink_overwrites_by_name() {
    let sink = InMemorySink::new();
    assert!(sink.is_empty());
    sink.store("avatar_a", "<svg/>").unwrap();
    sink.store("avatar_a", "<svg></svg>").unwrap();
    sink.store("avatar_b", "<svg/>").unwrap();
    assert_eq!(sink.len(), 2);
    assert_eq!(sink.get("avatar_a").as_deref(), Some("<svg></svg>"));
    assert_eq!(sink.names(), vec!["avatar_a", "avatar_b"]);
}

#[test]
fn file_sink_creates_directories() {
    let root = std::env::temp_dir()
        .join(format!("avatarfy-sink-{}", std::process::id()))
        .join("nested");
    let sink = FileSink::new(&root);
    assert_eq!(sink.root(), root.as_path());
    let location = sink.store("avatar_x", "<svg/>").unwrap();
    let written = std::fs::read_to_string(root.join("avatar_x.svg")).unwrap();
    assert_eq!(written, "<svg/>");
    assert!(location.ends_with("avatar_x.svg"));
    let _ = std::fs::remove_dir_all(root.parent().unwrap());
}

#[test]
fn file_sink_rejects_path_like_names() {
    let sink = FileSink::new(std::env::temp_dir());
    assert!(matches!(
        sink.store("../escape", "<svg/>"),
        Err(AvatarError::Storage(_))
    ));
    assert!(matches!(sink.store("", "<svg/>"), Err(AvatarError::Storage(_))));
}
