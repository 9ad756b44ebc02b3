use std::f64::consts::TAU;

use crate::foundation::core::{DESIGN_SIZE, Point};
use crate::foundation::hash::hash_salted;
use crate::scene::identicon::IdenticonPalette;
use crate::scene::primitive::{GradientStop, Paint, Primitive, Scene};
use crate::scene::shapes::{
    centered_square, circle, path, polar, polygon, regular_polygon, ring_segment, star,
};

pub const GRADIENT_ID: &str = "identicon-bg";
pub const OUTER_SEGMENTS: usize = 12;
pub const MIDDLE_SHAPES: usize = 8;

const OUTER_INNER_R: f64 = 92.0;
const OUTER_OUTER_R: f64 = 112.0;
const SEGMENT_GAP: f64 = 0.05;
const MIDDLE_R: f64 = 62.0;

pub(crate) fn compose(scene: &mut Scene, seed: &str, palette: &IdenticonPalette) {
    let c = Scene::center();

    scene.push(Primitive::LinearGradient {
        id: GRADIENT_ID.to_string(),
        from: Point::new(0.0, 0.0),
        to: Point::new(DESIGN_SIZE, DESIGN_SIZE),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: palette.light.clone(),
            },
            GradientStop {
                offset: 1.0,
                color: palette.secondary.clone(),
            },
        ],
    });
    scene.push(Primitive::Background {
        paint: Paint::gradient(GRADIENT_ID),
    });

    let sweep = TAU / OUTER_SEGMENTS as f64;
    for i in 0..OUTER_SEGMENTS {
        if hash_salted(seed, &format!("outer{i}")) % 3 == 0 {
            continue;
        }
        let color = if i % 2 == 0 {
            &palette.primary
        } else {
            &palette.dark
        };
        let start = i as f64 * sweep + SEGMENT_GAP / 2.0;
        scene.push(path(
            ring_segment(c, OUTER_INNER_R, OUTER_OUTER_R, start, sweep - SEGMENT_GAP),
            Paint::fill(color.clone()),
        ));
    }

    for i in 0..MIDDLE_SHAPES {
        if hash_salted(seed, &format!("middle{i}")) % 2 != 0 {
            continue;
        }
        let angle = TAU * i as f64 / MIDDLE_SHAPES as f64;
        let at = polar(c, MIDDLE_R, angle);
        let paint = Paint::fill(palette.accent.clone());
        scene.push(match i % 4 {
            0 => polygon(regular_polygon(at, 14.0, 4, 0.0), paint),
            1 => polygon(regular_polygon(at, 14.0, 3, angle), paint),
            2 => centered_square(at, 18.0, 2.0, paint),
            _ => circle(at, 10.0, paint),
        });
    }

    let core = Paint::fill(palette.complement.clone());
    match hash_salted(seed, "core") % 4 {
        0 => scene.push(circle(c, 30.0, core)),
        1 => scene.push(polygon(star(c, 34.0, 15.0, 5), core)),
        2 => scene.push(polygon(regular_polygon(c, 32.0, 6, 0.0), core)),
        _ => {
            for (r, width) in [(32.0, 5.0), (22.0, 4.0), (12.0, 3.0)] {
                scene.push(circle(
                    c,
                    r,
                    Paint::outline(palette.complement.clone(), width),
                ));
            }
        }
    }
}
