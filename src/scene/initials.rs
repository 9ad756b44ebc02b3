use crate::attributes::model::{AttributeRecord, Expression};
use crate::foundation::core::{Canvas, Color, DESIGN_SIZE, Point};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::scene::primitive::{Paint, Primitive, Scene, TextStyle, TextWeight};
use crate::scene::shapes::{circle, ellipse, pair, path, sag};

pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Background color for an initials badge: byte sum of the initials modulo the palette size.
pub fn initials_color<'a>(initials: &str, palette: &'a [Color]) -> AvatarResult<&'a Color> {
    if palette.is_empty() {
        return Err(AvatarError::empty_domain("initials palette is empty"));
    }
    let sum: usize = initials.bytes().map(usize::from).sum();
    Ok(&palette[sum % palette.len()])
}

/// Colored disc with a faint face sketch behind large centered initials.
///
/// The faint mouth follows the record's expression; faint glasses rings appear when the
/// record has glasses.
#[tracing::instrument(skip(record, palette))]
pub fn compose_initials(
    initials: &str,
    record: &AttributeRecord,
    palette: &[Color],
    canvas: Canvas,
) -> AvatarResult<Scene> {
    let mut scene = Scene::new(canvas);
    let c = Scene::center();
    let faint = |opacity: f64| Paint::outline("#fff", 2.0).with_opacity(opacity);

    scene.push(circle(
        c,
        DESIGN_SIZE / 2.0 - 10.0,
        Paint::fill(initials_color(initials, palette)?.clone()).stroked("#fff", 4.0),
    ));

    let face = Point::new(c.x, c.y - 20.0);
    scene.push(circle(face, 60.0, faint(0.3)));
    scene.extend(pair(face, 15.0, -15.0, |p| {
        circle(p, 4.0, Paint::fill("#fff").with_opacity(0.4))
    }));

    let mouth = Point::new(face.x, face.y + 15.0);
    scene.push(match record.expression {
        Expression::Sad | Expression::Angry => path(sag(mouth, 15.0, -8.0), faint(0.4)),
        Expression::Surprised => ellipse(mouth, 5.0, 7.0, faint(0.4)),
        _ => path(sag(mouth, 15.0, 8.0), faint(0.4)),
    });

    if record.has_glasses {
        scene.extend(pair(face, 15.0, -15.0, |p| circle(p, 9.0, faint(0.3))));
    }

    let font_size = DESIGN_SIZE * 0.35;
    scene.push(Primitive::Text {
        anchor: Point::new(c.x, c.y + font_size * 0.35),
        content: initials.to_string(),
        style: TextStyle {
            font_family: FONT_FAMILY.to_string(),
            font_size,
            weight: TextWeight::Bold,
            centered: true,
        },
        paint: Paint::fill("#fff"),
    });

    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/initials.rs"]
mod tests;
