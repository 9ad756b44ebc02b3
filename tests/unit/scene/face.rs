use super::*;
use crate::attributes::model::{AgeGroup, Palette};
use crate::foundation::core::Color;
use crate::scene::primitive::Fill;

fn record(expression: Expression) -> AttributeRecord {
    AttributeRecord {
        age: Some(30),
        age_group: AgeGroup::Adult,
        gender: Gender::Male,
        country: "USA".into(),
        personality: "confident".into(),
        expression,
        skin_tone_key: "medium".into(),
        skin_tone: Color::new("#E0AC69"),
        eye_color: Color::new("#228B22"),
        background_color: Color::new("#F0F8FF"),
        background: BackgroundStyle::Solid,
        palette: Palette {
            primary: Color::new("#FF6B6B"),
            secondary: Color::new("#4ECDC4"),
            accent: Color::new("#45B7D1"),
        },
        has_glasses: false,
        face_size: 1.8,
        eye_size: 1.0,
        nose_size: 1.0,
        mouth_size: 1.0,
        eyebrow_thickness: 5.0,
    }
}

fn head_rect(scene: &Scene) -> Rect {
    scene
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Rect {
                rect,
                corner_radius,
                ..
            } if *corner_radius == 15.0 => Some(*rect),
            _ => None,
        })
        .unwrap()
}

#[test]
fn every_expression_composes() {
    for e in Expression::ALL {
        let scene = compose_face(&record(e), Canvas::default());
        assert_eq!(scene.primitives[0].kind(), "background");
        assert!(scene.len() > 8, "{e}: only {} primitives", scene.len());
    }
}

#[test]
fn head_size_depends_on_expression() {
    let side = |e| head_rect(&compose_face(&record(e), Canvas::default())).width();
    assert!((side(Expression::Neutral) - 81.0).abs() < 1e-9);
    assert!((side(Expression::Laughing) - 85.5).abs() < 1e-9);
    assert!((side(Expression::Angry) - 78.75).abs() < 1e-9);
    assert!((side(Expression::Surprised) - 83.25).abs() < 1e-9);
}

#[test]
fn head_is_centered_and_scaled_by_face_size() {
    let mut r = record(Expression::Neutral);
    r.face_size = 1.7;
    let rect = head_rect(&compose_face(&r, Canvas::default()));
    assert!((rect.center().x - 128.0).abs() < 1e-9);
    assert!((rect.width() - 45.0 * 1.7).abs() < 1e-9);
}

#[test]
fn happy_big_smile_has_seven_teeth() {
    let scene = compose_face(&record(Expression::Happy), Canvas::default());
    let teeth = scene
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Rect { corner_radius, .. } if *corner_radius == 1.0))
        .count();
    assert_eq!(teeth, 7);
}

#[test]
fn laugh_has_single_teeth_bar_and_dimples() {
    let scene = compose_face(&record(Expression::Laughing), Canvas::default());
    let teeth: Vec<_> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Rect {
                rect,
                corner_radius,
                ..
            } if *corner_radius == 1.0 => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(teeth.len(), 1);
    assert!((teeth[0].width() - 32.0).abs() < 1e-9);
    let dimples = scene
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Ellipse { paint, .. } if paint.opacity == Some(0.5)))
        .count();
    assert_eq!(dimples, 2);
}

#[test]
fn blush_only_for_female() {
    let count_blush = |scene: &Scene| {
        scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Ellipse { paint, .. } if paint.fill_opacity == Some(0.6)))
            .count()
    };
    let male = compose_face(&record(Expression::Neutral), Canvas::default());
    assert_eq!(count_blush(&male), 0);

    let mut r = record(Expression::Neutral);
    r.gender = Gender::Female;
    let female = compose_face(&r, Canvas::default());
    assert_eq!(count_blush(&female), 2);
}

#[test]
fn glasses_add_two_rings_and_three_bars() {
    let plain = compose_face(&record(Expression::Neutral), Canvas::default());
    let mut r = record(Expression::Neutral);
    r.has_glasses = true;
    let with = compose_face(&r, Canvas::default());
    assert_eq!(with.count_kind("circle") - plain.count_kind("circle"), 2);
    assert_eq!(with.count_kind("line") - plain.count_kind("line"), 3);
}

#[test]
fn wink_has_one_shine_and_closed_has_none() {
    let shines = |scene: &Scene| {
        scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { radius, .. } if *radius == 2.0))
            .count()
    };
    assert_eq!(shines(&compose_face(&record(Expression::Wink), Canvas::default())), 1);
    assert_eq!(shines(&compose_face(&record(Expression::Laughing), Canvas::default())), 0);
    assert_eq!(shines(&compose_face(&record(Expression::Happy), Canvas::default())), 0);
    assert_eq!(shines(&compose_face(&record(Expression::Sad), Canvas::default())), 2);
}

#[test]
fn eyebrows_use_gender_thickness() {
    let mut r = record(Expression::Neutral);
    r.eyebrow_thickness = 3.0;
    let scene = compose_face(&r, Canvas::default());
    let widths: Vec<f64> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { paint, .. } => paint.stroke.as_ref().map(|s| s.width),
            _ => None,
        })
        .collect();
    assert!(widths.contains(&3.0));
}

#[test]
fn gradient_background_uses_palette() {
    let mut r = record(Expression::Neutral);
    r.background = BackgroundStyle::Gradient;
    let scene = compose_face(&r, Canvas::default());
    match &scene.primitives[0] {
        Primitive::LinearGradient { id, stops, .. } => {
            assert_eq!(id, BACKGROUND_GRADIENT_ID);
            assert_eq!(stops[0].color.as_str(), "#FF6B6B");
            assert_eq!(stops[1].color.as_str(), "#4ECDC4");
        }
        other => panic!("expected gradient, got {other:?}"),
    }
    match &scene.primitives[1] {
        Primitive::Background { paint } => {
            assert_eq!(paint.fill, Fill::Gradient(BACKGROUND_GRADIENT_ID.into()));
        }
        other => panic!("expected background, got {other:?}"),
    }
}

#[test]
fn radial_background_is_centered_on_the_canvas() {
    let mut r = record(Expression::Neutral);
    r.background = BackgroundStyle::Radial;
    let scene = compose_face(&r, Canvas::default());
    match &scene.primitives[0] {
        Primitive::RadialGradient {
            id,
            center,
            radius,
            stops,
        } => {
            assert_eq!(id, BACKGROUND_GRADIENT_ID);
            assert_eq!(*center, Point::new(128.0, 128.0));
            assert_eq!(*radius, 128.0);
            assert_eq!(stops[0].color.as_str(), "#FF6B6B");
            assert_eq!(stops[1].color.as_str(), "#4ECDC4");
        }
        other => panic!("expected radial gradient, got {other:?}"),
    }
    assert!(matches!(
        &scene.primitives[1],
        Primitive::Background { paint } if paint.fill == Fill::Gradient(BACKGROUND_GRADIENT_ID.into())
    ));
}

#[test]
fn transparent_background_emits_nothing() {
    let mut r = record(Expression::Neutral);
    r.background = BackgroundStyle::Transparent;
    let scene = compose_face(&r, Canvas::default());
    assert_eq!(scene.count_kind("background"), 0);
    assert_eq!(scene.primitives[0].kind(), "rect");
}
