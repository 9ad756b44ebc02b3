use super::*;
use crate::attributes::model::{AgeGroup, BackgroundStyle};

fn cfg() -> AvatarConfig {
    AvatarConfig::default()
}

fn with_age(age: u32) -> Overrides {
    Overrides {
        age: Some(AgeInput::Years(age)),
        ..Overrides::default()
    }
}

#[test]
fn same_key_resolves_identically() {
    let a = resolve(&cfg(), "user123", &Overrides::default()).unwrap();
    let b = resolve(&cfg(), "user123", &Overrides::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_key_is_rejected() {
    let err = resolve(&cfg(), "", &Overrides::default()).unwrap_err();
    assert!(matches!(err, AvatarError::InvalidParameter(_)));
}

#[test]
fn age_boundaries() {
    let cases = [
        (12, AgeGroup::Child),
        (13, AgeGroup::Teen),
        (19, AgeGroup::Teen),
        (20, AgeGroup::Adult),
        (59, AgeGroup::Adult),
        (60, AgeGroup::Senior),
    ];
    for (age, group) in cases {
        let r = resolve(&cfg(), "boundary", &with_age(age)).unwrap();
        assert_eq!(r.age_group, group, "age {age}");
        assert_eq!(r.age, Some(age));
    }
}

#[test]
fn proportions_follow_age_group() {
    let child = resolve(&cfg(), "k", &with_age(8)).unwrap();
    assert_eq!(
        (child.face_size, child.eye_size, child.nose_size, child.mouth_size),
        (1.7, 1.2, 0.8, 0.9)
    );
    let senior = resolve(&cfg(), "k", &with_age(70)).unwrap();
    assert_eq!(senior.face_size, 1.85);
    assert_eq!(senior.mouth_size, 0.95);
}

#[test]
fn defaults_come_from_configured_tables() {
    let cfg = cfg();
    for key in ["alice", "bob", "carol", "dave", "eve", "frank"] {
        let r = resolve(&cfg, key, &Overrides::default()).unwrap();
        assert!(cfg.default_ages.contains(&r.age.unwrap()));
        assert!(Gender::DEFAULTABLE.contains(&r.gender));
        assert!(cfg.country_names().contains(&r.country.as_str()));
        assert!(cfg.personality_names().contains(&r.personality.as_str()));
        assert!(cfg.eye_colors.contains(&r.eye_color));
        let country = cfg.country(&r.country).unwrap();
        assert!(country.backgrounds.contains(&r.background_color));
        assert_eq!(cfg.skin_tone(&r.skin_tone_key), Some(&r.skin_tone));
        assert_eq!(r.background, BackgroundStyle::Solid);
    }
}

#[test]
fn skin_tone_respects_country_and_age() {
    let cfg = cfg();
    for key in ["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"] {
        let ov = Overrides {
            country: Some("India".into()),
            ..with_age(30)
        };
        let r = resolve(&cfg, key, &ov).unwrap();
        // India prefers medium/medium_dark/dark, adults allow up to medium_dark.
        assert!(["medium", "medium_dark"].contains(&r.skin_tone_key.as_str()));
    }
}

#[test]
fn skin_tone_falls_back_to_age_list_without_overlap() {
    let ov = Overrides {
        country: Some("Nigeria".into()),
        ..with_age(8)
    };
    let r = resolve(&cfg(), "kid", &ov).unwrap();
    assert!(["light", "medium_light"].contains(&r.skin_tone_key.as_str()));
}

#[test]
fn skin_tone_override_wins_when_known() {
    let ov = Overrides {
        skin_tone: Some("dark".into()),
        ..Overrides::default()
    };
    let r = resolve(&cfg(), "k", &ov).unwrap();
    assert_eq!(r.skin_tone_key, "dark");
    assert_eq!(r.skin_tone.as_str(), "#8D5524");

    let unknown = Overrides {
        skin_tone: Some("purple".into()),
        ..Overrides::default()
    };
    let r2 = resolve(&cfg(), "k", &unknown).unwrap();
    let plain = resolve(&cfg(), "k", &Overrides::default()).unwrap();
    assert_eq!(r2.skin_tone_key, plain.skin_tone_key);
}

#[test]
fn unknown_country_resolves_to_usa() {
    let ov = Overrides {
        country: Some("Atlantis".into()),
        ..Overrides::default()
    };
    let r = resolve(&cfg(), "k", &ov).unwrap();
    assert_eq!(r.country, "USA");
    let usa = cfg().country("USA").unwrap().backgrounds.clone();
    assert!(usa.contains(&r.background_color));
}

#[test]
fn unknown_personality_uses_default_palette_and_neutral_mapping() {
    let cfg = cfg();
    let ov = Overrides {
        personality: Some("grumpy".into()),
        age: Some(AgeInput::Group(AgeGroup::Adult)),
        ..Overrides::default()
    };
    let r = resolve(&cfg, "k", &ov).unwrap();
    assert_eq!(r.personality, "grumpy");
    assert_eq!(r.palette, cfg.default_personality_traits().unwrap().palette);
    assert_eq!(r.expression, Expression::Neutral);
}

#[test]
fn personality_mapping_drives_expression() {
    let ov = Overrides {
        personality: Some("creative".into()),
        ..Overrides::default()
    };
    let r = resolve(&cfg(), "anyone", &ov).unwrap();
    assert_eq!(r.expression, Expression::Surprised);
}

#[test]
fn neutral_personality_picks_from_default_expressions() {
    let cfg = cfg();
    for key in ["p1", "p2", "p3", "p4", "p5"] {
        let ov = Overrides {
            personality: Some("professional".into()),
            ..Overrides::default()
        };
        let r = resolve(&cfg, key, &ov).unwrap();
        assert!(cfg.default_expressions.contains(&r.expression));
    }
}

#[test]
fn legacy_age_group_keeps_mapped_expression() {
    let ov = Overrides {
        age: Some(AgeInput::Group(AgeGroup::Senior)),
        personality: Some("confident".into()),
        ..Overrides::default()
    };
    let r = resolve(&cfg(), "legacy", &ov).unwrap();
    assert_eq!(r.age_group, AgeGroup::Senior);
    assert_eq!(r.age, None);
    assert_eq!(r.expression, Expression::Neutral);
}

#[test]
fn expression_override_is_lenient() {
    let ov = Overrides {
        expression: Some("Laughing".into()),
        ..Overrides::default()
    };
    assert_eq!(
        resolve(&cfg(), "k", &ov).unwrap().expression,
        Expression::Laughing
    );
    let bogus = Overrides {
        expression: Some("ecstatic".into()),
        ..Overrides::default()
    };
    assert_eq!(
        resolve(&cfg(), "k", &bogus).unwrap().expression,
        Expression::Neutral
    );
}

#[test]
fn glasses_only_where_the_country_allows_them() {
    for i in 0..50 {
        let ov = Overrides {
            country: Some("Nigeria".into()),
            ..with_age(70)
        };
        let r = resolve(&cfg(), &format!("user{i}"), &ov).unwrap();
        assert!(!r.has_glasses);
    }
    let seniors_in_japan = (0..50)
        .filter(|i| {
            let ov = Overrides {
                country: Some("Japan".into()),
                ..with_age(70)
            };
            resolve(&cfg(), &format!("user{i}"), &ov).unwrap().has_glasses
        })
        .count();
    assert!(seniors_in_japan > 0);
}

#[test]
fn explicit_overrides_win() {
    let ov = Overrides {
        gender: Some(Gender::Neutral),
        eye_color: Some(Color::new("#123456")),
        has_glasses: Some(true),
        country: Some("Nigeria".into()),
        background: Some(BackgroundStyle::Gradient),
        ..Overrides::default()
    };
    let r = resolve(&cfg(), "k", &ov).unwrap();
    assert_eq!(r.gender, Gender::Neutral);
    assert_eq!(r.eyebrow_thickness, 5.0);
    assert_eq!(r.eye_color.as_str(), "#123456");
    assert!(r.has_glasses);
    assert_eq!(r.background, BackgroundStyle::Gradient);
}

#[test]
fn gender_and_country_use_independent_salts() {
    // Distinct salts must not lock gender to country across keys.
    let mut combos = std::collections::BTreeSet::new();
    for i in 0..64 {
        let r = resolve(&cfg(), &format!("k{i}"), &Overrides::default()).unwrap();
        combos.insert((r.gender, r.country));
    }
    assert!(combos.len() > 8);
}

#[test]
fn background_names_accept_linear_and_radial_spellings() {
    assert_eq!("gradient_linear".parse::<BackgroundStyle>().unwrap(), BackgroundStyle::Gradient);
    assert_eq!("gradient_radial".parse::<BackgroundStyle>().unwrap(), BackgroundStyle::Radial);
    assert!("checkered".parse::<BackgroundStyle>().is_err());

    let ov = Overrides::from_json_str(r#"{"background": "gradient_radial"}"#).unwrap();
    let r = resolve(&cfg(), "k", &ov).unwrap();
    assert_eq!(r.background, BackgroundStyle::Radial);
}
