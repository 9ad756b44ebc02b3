//! Radial, tribal, and crystal identicons.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::hash::hash_salted;
use crate::scene::identicon::IdenticonPalette;
use crate::scene::primitive::{Paint, Primitive, Scene};
use crate::scene::shapes::{circle, line, path, polar, polygon, regular_polygon};

const RAY_INNER: f64 = 20.0;
const RAY_MIN: f64 = 40.0;
const RAY_SPREAD: u32 = 70;

/// Between 8 and 15 rays; lengths from the seed.
pub fn ray_count(seed: &str) -> usize {
    8 + (hash_salted(seed, "rays") % 8) as usize
}

pub(crate) fn radial(scene: &mut Scene, seed: &str, palette: &IdenticonPalette) {
    let c = Scene::center();
    scene.push(Primitive::Background {
        paint: Paint::fill(palette.light.clone()),
    });

    let n = ray_count(seed);
    for i in 0..n {
        let angle = TAU * i as f64 / n as f64 - FRAC_PI_2;
        let length = RAY_MIN + f64::from(hash_salted(seed, &format!("ray{i}")) % RAY_SPREAD);
        let color = if i % 2 == 0 {
            &palette.primary
        } else {
            &palette.secondary
        };
        scene.push(line(
            polar(c, RAY_INNER, angle),
            polar(c, RAY_INNER + length, angle),
            Paint::outline(color.clone(), 6.0),
        ));
    }
    scene.push(circle(c, 18.0, Paint::fill(palette.accent.clone())));
}

/// One zigzag arm along +x from the center, before rotation.
fn chevron_arm(c: Point, teeth: u32, amplitude: f64) -> BezPath {
    const START: f64 = 24.0;
    const END: f64 = 104.0;
    let step = (END - START) / f64::from(teeth * 2);
    let mut p = BezPath::new();
    p.move_to(Point::new(c.x + START, c.y));
    for k in 1..=teeth * 2 {
        let dy = if k % 2 == 1 { -amplitude } else { 0.0 };
        p.line_to(Point::new(c.x + START + step * f64::from(k), c.y + dy));
    }
    p
}

pub(crate) fn tribal(scene: &mut Scene, seed: &str, palette: &IdenticonPalette) {
    let c = Scene::center();
    let h = hash_salted(seed, "tribal");
    let amplitude = 8.0 + f64::from(h % 12);
    let teeth = 3 + (h >> 8) % 3;

    scene.push(Primitive::Background {
        paint: Paint::fill(palette.light.clone()),
    });

    let arm = chevron_arm(c, teeth, amplitude);
    let tip = Point::new(c.x + 104.0, c.y);
    let anchor = Affine::translate(c.to_vec2());
    let unanchor = Affine::translate(-c.to_vec2());
    for k in 0..4 {
        let turn = anchor * Affine::rotate(FRAC_PI_2 * f64::from(k)) * unanchor;
        scene.push(path(turn * arm.clone(), Paint::outline(palette.primary.clone(), 6.0)));
        scene.push(polygon(
            regular_polygon(turn * tip, 9.0, 4, 0.0),
            Paint::fill(palette.accent.clone()),
        ));
    }

    scene.push(polygon(
        regular_polygon(c, 18.0, 4, 0.0),
        Paint::fill(palette.dark.clone()),
    ));
}

pub(crate) fn crystal(scene: &mut Scene, seed: &str, palette: &IdenticonPalette) {
    let c = Scene::center();
    scene.push(Primitive::Background {
        paint: Paint::fill(palette.dark.clone()),
    });

    let colors = palette.colors();
    let hex = regular_polygon(c, 100.0, 6, 0.0);
    for i in 0..hex.len() {
        let next = hex[(i + 1) % hex.len()];
        let pick = hash_salted(seed, &format!("facet{i}")) as usize % colors.len();
        scene.push(polygon(
            vec![c, hex[i], next],
            Paint::fill(colors[pick].clone()).stroked("white", 2.0),
        ));
    }
}
