//! Cartoon face composer.
//!
//! Features are laid out relative to the design-space center; every offset below is in design
//! units. Expression-dependent parts dispatch on the traits bound to the resolved expression.

use crate::attributes::model::{
    AttributeRecord, BackgroundStyle, BrowAngle, EyeShape, Expression, Gender, MouthShape,
};
use crate::foundation::core::{Canvas, DESIGN_SIZE, Point, Rect};
use crate::scene::primitive::{GradientStop, Paint, Primitive, Scene};
use crate::scene::shapes::{
    centered_square, circle, ellipse, line, mirrored_path, pair, path, quad, quad_chain, sag,
    tilted_ellipse,
};

pub const BACKGROUND_GRADIENT_ID: &str = "bg-gradient";

const INK: &str = "#000";
const BROW: &str = "#654321";
const NOSE: &str = "#D4A574";
const NOSE_PLAIN: &str = "#E0AC69";
const NOSE_SHADE: &str = "#C68642";
const NOSE_HIGHLIGHT: &str = "#F1C27D";
const BLUSH: &str = "#FF69B4";
const LIPS: &str = "#FF6B6B";
const THROAT: &str = "#8B0000";

const HEAD_BASE: f64 = 45.0;
const EYE_DX: f64 = 15.0;
const EYE_DY: f64 = -10.0;
const BROW_DY: f64 = -25.0;
const NOSE_DY: f64 = 5.0;
const MOUTH_DY: f64 = 20.0;

#[tracing::instrument(skip(record), fields(expression = %record.expression))]
pub fn compose_face(record: &AttributeRecord, canvas: Canvas) -> Scene {
    let mut scene = Scene::new(canvas);
    let c = Scene::center();

    background(&mut scene, record);
    head(&mut scene, c, record);
    eyes(&mut scene, c, record);
    eyebrows(&mut scene, c, record);
    nose(&mut scene, c, record);
    if record.gender == Gender::Female {
        blush(&mut scene, c);
    }
    mouth(&mut scene, c, record);
    if record.has_glasses {
        glasses(&mut scene, c);
    }

    scene
}

fn background(scene: &mut Scene, record: &AttributeRecord) {
    match record.background {
        BackgroundStyle::Solid => scene.push(Primitive::Background {
            paint: Paint::fill(record.background_color.clone()),
        }),
        BackgroundStyle::Gradient => {
            scene.push(Primitive::LinearGradient {
                id: BACKGROUND_GRADIENT_ID.to_string(),
                from: Point::new(0.0, 0.0),
                to: Point::new(0.0, DESIGN_SIZE),
                stops: palette_stops(record),
            });
            scene.push(Primitive::Background {
                paint: Paint::gradient(BACKGROUND_GRADIENT_ID),
            });
        }
        BackgroundStyle::Radial => {
            scene.push(Primitive::RadialGradient {
                id: BACKGROUND_GRADIENT_ID.to_string(),
                center: Point::new(DESIGN_SIZE / 2.0, DESIGN_SIZE / 2.0),
                radius: DESIGN_SIZE / 2.0,
                stops: palette_stops(record),
            });
            scene.push(Primitive::Background {
                paint: Paint::gradient(BACKGROUND_GRADIENT_ID),
            });
        }
        BackgroundStyle::Transparent => {}
    }
}

fn palette_stops(record: &AttributeRecord) -> Vec<GradientStop> {
    vec![
        GradientStop {
            offset: 0.0,
            color: record.palette.primary.clone(),
        },
        GradientStop {
            offset: 1.0,
            color: record.palette.secondary.clone(),
        },
    ]
}

/// Side of the head square before age scaling.
fn head_multiplier(expression: Expression) -> f64 {
    match expression {
        Expression::Laughing => 1.9,
        Expression::Angry => 1.75,
        Expression::Surprised => 1.85,
        _ => 1.8,
    }
}

fn head(scene: &mut Scene, c: Point, record: &AttributeRecord) {
    // Adults (face_size 1.8) get exactly the base square.
    let size = HEAD_BASE * head_multiplier(record.expression) * record.face_size / 1.8;
    scene.push(centered_square(
        c,
        size,
        15.0,
        Paint::fill(record.skin_tone.clone()).stroked(INK, 2.0),
    ));
}

fn eyes(scene: &mut Scene, c: Point, record: &AttributeRecord) {
    let shape = record.expression_traits().eye_shape;
    let k = record.eye_size;
    let white = || Paint::fill("white").stroked(INK, 2.0);
    let iris = || Paint::fill(record.eye_color.clone());
    let arc = |at: Point, width: f64| path(sag(at, 5.0, 4.0), Paint::outline(INK, width));

    match shape {
        EyeShape::Wide => {
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| circle(p, 8.0, white())));
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| circle(p, 5.0 * k, iris())));
        }
        EyeShape::Narrow => {
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| ellipse(p, 8.0, 4.0, white())));
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| {
                ellipse(p, 4.0 * k, 2.0 * k, iris())
            }));
        }
        EyeShape::Smile => scene.extend(pair(c, EYE_DX, EYE_DY, |p| arc(p, 3.0))),
        EyeShape::Closed => scene.extend(pair(c, EYE_DX, EYE_DY, |p| arc(p, 4.0))),
        EyeShape::Wink => {
            let left = Point::new(c.x - EYE_DX, c.y + EYE_DY);
            let right = Point::new(c.x + EYE_DX, c.y + EYE_DY);
            scene.push(arc(left, 4.0));
            scene.push(circle(right, 8.0, white()));
            scene.push(circle(right, 5.0 * k, iris()));
        }
        EyeShape::Normal => {
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| ellipse(p, 8.0, 6.0, white())));
            scene.extend(pair(c, EYE_DX, EYE_DY, |p| circle(p, 4.0 * k, iris())));
        }
    }

    // Shine dots sit up and to the right of each open pupil.
    let shine = |dx: f64| circle(Point::new(c.x + dx, c.y + EYE_DY - 3.0), 2.0, Paint::fill("white"));
    match shape {
        EyeShape::Smile | EyeShape::Closed => {}
        EyeShape::Wink => scene.push(shine(EYE_DX + 2.0)),
        EyeShape::Wide | EyeShape::Narrow | EyeShape::Normal => {
            scene.push(shine(-EYE_DX + 2.0));
            scene.push(shine(EYE_DX + 2.0));
        }
    }
}

fn eyebrows(scene: &mut Scene, c: Point, record: &AttributeRecord) {
    let y = c.y + BROW_DY;
    let paint = Paint::outline(BROW, record.eyebrow_thickness);
    // Left brow from its outer end (x - 30) to its inner end (x - 14); the right one mirrors it.
    let left_curve = |outer: f64, ctrl: f64, inner: f64| {
        quad(
            Point::new(c.x - 30.0, y + outer),
            Point::new(c.x - 22.0, y + ctrl),
            Point::new(c.x - 14.0, y + inner),
        )
    };
    let straight = |x0: f64, y0: f64, x1: f64, y1: f64| {
        line(
            Point::new(c.x + x0, y + y0),
            Point::new(c.x + x1, y + y1),
            paint.clone(),
        )
    };

    match record.expression_traits().eyebrow_angle {
        BrowAngle::Raised => {
            for p in mirrored_path(c, left_curve(5.0, -3.0, 2.0)) {
                scene.push(path(p, paint.clone()));
            }
        }
        BrowAngle::Down => {
            for p in mirrored_path(c, left_curve(-2.0, 4.0, 2.0)) {
                scene.push(path(p, paint.clone()));
            }
        }
        BrowAngle::Angry => {
            scene.push(straight(-30.0, 6.0, -14.0, -2.0));
            scene.push(straight(14.0, -2.0, 30.0, 6.0));
        }
        BrowAngle::Confused => {
            scene.push(path(left_curve(4.0, -3.0, 2.0), paint.clone()));
            scene.push(straight(14.0, 0.0, 30.0, 0.0));
        }
        BrowAngle::Normal => {
            scene.push(straight(-30.0, 0.0, -14.0, 0.0));
            scene.push(straight(14.0, 0.0, 30.0, 0.0));
        }
    }
}

fn nose(scene: &mut Scene, c: Point, record: &AttributeRecord) {
    let y = c.y + NOSE_DY;
    let n = record.nose_size;
    let at = |dx: f64, dy: f64| Point::new(c.x + dx, y + dy);
    let bridge = || Paint::fill(NOSE).stroked(INK, 1.0);
    let highlight = || ellipse(at(-1.0, -2.0), 1.5 * n, 3.0 * n, Paint::fill(NOSE_HIGHLIGHT));

    match record.expression {
        Expression::Angry => {
            scene.push(ellipse(at(0.0, 0.0), 5.0 * n, 9.0 * n, bridge()));
            scene.extend(pair(at(0.0, 0.0), 3.0, 4.0, |p| {
                ellipse(p, 2.0 * n, 3.0 * n, Paint::fill(NOSE_SHADE))
            }));
        }
        Expression::Surprised => {
            scene.push(ellipse(at(0.0, 0.0), 5.0 * n, 8.0 * n, bridge()));
            scene.push(highlight());
        }
        Expression::Laughing => {
            scene.push(ellipse(at(0.0, 0.0), 4.5 * n, 7.0 * n, bridge()));
            let crease = quad(at(-8.0, -2.0), at(-6.0, 2.0), at(-4.0, 6.0));
            for p in mirrored_path(c, crease) {
                scene.push(path(p, Paint::outline(NOSE_SHADE, 1.0)));
            }
        }
        Expression::Sad => scene.push(ellipse(at(0.0, 1.0), 3.5 * n, 9.0 * n, bridge())),
        Expression::Wink => {
            scene.push(tilted_ellipse(at(0.5, 0.0), 4.0 * n, 8.0 * n, 2.0, bridge()))
        }
        Expression::Confused => {
            scene.push(tilted_ellipse(at(-0.5, 0.0), 4.0 * n, 8.0 * n, -1.5, bridge()))
        }
        Expression::Happy | Expression::Neutral => {
            scene.push(ellipse(
                at(0.0, 0.0),
                4.5 * n,
                8.0 * n,
                Paint::fill(NOSE_PLAIN).stroked(INK, 1.0),
            ));
            scene.push(highlight());
            scene.extend(pair(at(0.0, 0.0), 2.0, 3.0, |p| {
                ellipse(p, n, 2.0 * n, Paint::fill(NOSE_SHADE).with_opacity(0.7))
            }));
        }
    }
}

fn blush(scene: &mut Scene, c: Point) {
    scene.extend(pair(c, 22.0, NOSE_DY + 12.0, |p| {
        ellipse(p, 6.0, 4.0, Paint::fill(BLUSH).with_fill_opacity(0.6))
    }));
}

fn mouth(scene: &mut Scene, c: Point, record: &AttributeRecord) {
    let y = c.y + MOUTH_DY;
    let m = record.mouth_size;
    let at = |dx: f64, dy: f64| Point::new(c.x + dx * m, y + dy);
    let lips = || Paint::outline(INK, 3.0);
    let tooth = |rect: Rect| Primitive::Rect {
        rect,
        corner_radius: 1.0,
        paint: Paint::fill("white"),
    };

    match record.expression_traits().mouth_shape {
        MouthShape::BigSmile => {
            scene.push(path(
                sag(at(0.0, 0.0), 20.0 * m, 12.0),
                Paint::fill(LIPS).stroked(INK, 3.0),
            ));
            for i in -3..=3 {
                let x = c.x + f64::from(i) * 5.0 * m;
                scene.push(tooth(Rect::new(x - 2.0, y + 3.0, x + 2.0, y + 8.0)));
            }
        }
        MouthShape::Smile => scene.push(path(sag(at(0.0, 0.0), 15.0 * m, 8.0), lips())),
        MouthShape::Frown => scene.push(path(sag(at(0.0, 0.0), 15.0 * m, -8.0), lips())),
        MouthShape::Open => scene.push(ellipse(
            at(0.0, 0.0),
            8.0 * m,
            12.0,
            Paint::fill(THROAT).stroked(INK, 2.0),
        )),
        MouthShape::Wavy => {
            let wave = quad_chain(
                at(-15.0, 0.0),
                &[
                    (at(-5.0, -5.0), at(5.0, 0.0)),
                    (at(15.0, 5.0), at(20.0, 0.0)),
                ],
            );
            scene.push(path(wave, lips()));
        }
        MouthShape::Laugh => {
            let outer = quad_chain(
                at(-25.0, 0.0),
                &[
                    (at(-12.0, 20.0), at(0.0, 10.0)),
                    (at(12.0, 20.0), at(25.0, 0.0)),
                ],
            );
            scene.push(path(outer, Paint::fill(LIPS).stroked(INK, 3.0)));
            scene.push(ellipse(at(0.0, 7.0), 16.0 * m, 6.0, Paint::fill(THROAT)));
            scene.push(tooth(Rect::from_points(at(-16.0, 2.0), at(16.0, 8.0))));
            scene.extend(pair(at(0.0, 0.0), 32.0 * m, -3.0, |p| {
                ellipse(p, 3.0, 5.0, Paint::fill(NOSE_SHADE).with_opacity(0.5))
            }));
        }
        MouthShape::Neutral => scene.push(line(at(-10.0, 0.0), at(10.0, 0.0), lips())),
    }
}

fn glasses(scene: &mut Scene, c: Point) {
    let frame = || Paint::outline(INK, 2.0);
    let y = c.y + EYE_DY;
    let bar = |x0: f64, x1: f64| line(Point::new(c.x + x0, y), Point::new(c.x + x1, y), frame());

    scene.extend(pair(c, EYE_DX, EYE_DY, |p| circle(p, 12.0, frame())));
    scene.push(bar(-3.0, 3.0));
    scene.push(bar(-27.0, -32.0));
    scene.push(bar(27.0, 32.0));
}

#[cfg(test)]
#[path = "../../tests/unit/scene/face.rs"]
mod tests;
