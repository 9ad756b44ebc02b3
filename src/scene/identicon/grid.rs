use crate::foundation::core::{Point, Rect};
use crate::foundation::hash::hash_salted;
use crate::scene::identicon::IdenticonPalette;
use crate::scene::primitive::{Paint, Primitive, Scene};

pub const CELLS: usize = 5;
pub const MARGIN: f64 = 28.0;
pub const CELL: f64 = 40.0;

/// Whether cell (`row`, `col`) is filled. Columns 3 and 4 mirror columns 1 and 0.
pub fn is_filled(seed: &str, row: usize, col: usize) -> bool {
    let col = col.min(CELLS - 1 - col);
    hash_salted(seed, &format!("cell{}", row * CELLS + col)) % 2 == 0
}

pub(crate) fn compose(scene: &mut Scene, seed: &str, palette: &IdenticonPalette) {
    scene.push(Primitive::Background {
        paint: Paint::fill(palette.light.clone()),
    });
    for row in 0..CELLS {
        for col in 0..CELLS {
            if !is_filled(seed, row, col) {
                continue;
            }
            let origin = Point::new(
                MARGIN + col as f64 * CELL,
                MARGIN + row as f64 * CELL,
            );
            scene.push(Primitive::Rect {
                rect: Rect::from_origin_size(origin, (CELL, CELL)),
                corner_radius: 0.0,
                paint: Paint::fill(palette.primary.clone()),
            });
        }
    }
}
