use super::*;
use crate::attributes::model::Overrides;
use crate::attributes::resolve::resolve;
use crate::config::tables::AvatarConfig;

fn record_with(expression: &str, glasses: bool) -> AttributeRecord {
    let ov = Overrides {
        expression: Some(expression.into()),
        has_glasses: Some(glasses),
        ..Overrides::default()
    };
    resolve(&AvatarConfig::default(), "johndoe", &ov).unwrap()
}

#[test]
fn color_is_byte_sum_modulo_palette() {
    let cfg = AvatarConfig::default();
    // 'J' + 'D' = 142, 142 % 15 = 7
    assert_eq!(
        initials_color("JD", &cfg.initials_palette).unwrap().as_str(),
        "#5F27CD"
    );
    assert!(matches!(
        initials_color("JD", &[]),
        Err(AvatarError::EmptyDomain(_))
    ));
}

#[test]
fn text_is_last_and_sized_from_design_space() {
    let cfg = AvatarConfig::default();
    let scene = compose_initials(
        "JD",
        &record_with("happy", false),
        &cfg.initials_palette,
        Canvas::default(),
    )
    .unwrap();
    match scene.primitives.last().unwrap() {
        Primitive::Text {
            content, style, ..
        } => {
            assert_eq!(content, "JD");
            assert!((style.font_size - 89.6).abs() < 1e-9);
            assert_eq!(style.weight, TextWeight::Bold);
            assert!(style.centered);
        }
        other => panic!("expected text, got {other:?}"),
    }
    match &scene.primitives[0] {
        Primitive::Circle { radius, paint, .. } => {
            assert_eq!(*radius, 118.0);
            assert_eq!(paint.stroke.as_ref().unwrap().width, 4.0);
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn faint_mouth_follows_expression() {
    let cfg = AvatarConfig::default();
    let compose = |e: &str| {
        compose_initials("AB", &record_with(e, false), &cfg.initials_palette, Canvas::default())
            .unwrap()
    };
    assert_eq!(compose("surprised").count_kind("ellipse"), 1);
    assert_eq!(compose("happy").count_kind("path"), 1);
    assert_eq!(compose("sad").count_kind("path"), 1);
    assert_eq!(compose("sad").count_kind("ellipse"), 0);
}

#[test]
fn glasses_add_faint_rings() {
    let cfg = AvatarConfig::default();
    let plain = compose_initials(
        "AB",
        &record_with("neutral", false),
        &cfg.initials_palette,
        Canvas::default(),
    )
    .unwrap();
    let glasses = compose_initials(
        "AB",
        &record_with("neutral", true),
        &cfg.initials_palette,
        Canvas::default(),
    )
    .unwrap();
    assert_eq!(glasses.count_kind("circle"), plain.count_kind("circle") + 2);
}
