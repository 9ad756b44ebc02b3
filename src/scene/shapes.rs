//! Drawing helpers shared by every composer.
//!
//! Paired features (eyes, brows, cheeks) are generated from a single center and a horizontal
//! offset, so left/right placement is symmetric by construction.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Affine, BezPath, Point, Rect, Vec2};
use crate::scene::primitive::{Paint, Primitive};

pub fn circle(center: Point, radius: f64, paint: Paint) -> Primitive {
    Primitive::Circle {
        center,
        radius,
        paint,
    }
}

pub fn ellipse(center: Point, rx: f64, ry: f64, paint: Paint) -> Primitive {
    Primitive::Ellipse {
        center,
        radii: Vec2::new(rx, ry),
        rotation_deg: 0.0,
        paint,
    }
}

pub fn tilted_ellipse(center: Point, rx: f64, ry: f64, rotation_deg: f64, paint: Paint) -> Primitive {
    Primitive::Ellipse {
        center,
        radii: Vec2::new(rx, ry),
        rotation_deg,
        paint,
    }
}

pub fn line(from: Point, to: Point, paint: Paint) -> Primitive {
    Primitive::Line { from, to, paint }
}

pub fn path(path: BezPath, paint: Paint) -> Primitive {
    Primitive::Path { path, paint }
}

pub fn polygon(points: Vec<Point>, paint: Paint) -> Primitive {
    Primitive::Polygon { points, paint }
}

/// Axis-aligned square of side `size` centered on `center`.
pub fn centered_square(center: Point, size: f64, corner_radius: f64, paint: Paint) -> Primitive {
    let half = size / 2.0;
    Primitive::Rect {
        rect: Rect::new(center.x - half, center.y - half, center.x + half, center.y + half),
        corner_radius,
        paint,
    }
}

/// Left and right points at `center.x ∓ dx`, `center.y + dy`.
pub fn mirrored(center: Point, dx: f64, dy: f64) -> [Point; 2] {
    [
        Point::new(center.x - dx, center.y + dy),
        Point::new(center.x + dx, center.y + dy),
    ]
}

/// Two copies of a feature, one per side.
pub fn pair(center: Point, dx: f64, dy: f64, draw: impl Fn(Point) -> Primitive) -> [Primitive; 2] {
    mirrored(center, dx, dy).map(draw)
}

/// Reflection across the vertical line through `center`.
pub fn mirror_x(center: Point) -> Affine {
    Affine::new([-1.0, 0.0, 0.0, 1.0, 2.0 * center.x, 0.0])
}

/// `path` and its reflection across the vertical line through `center`.
pub fn mirrored_path(center: Point, path: BezPath) -> [BezPath; 2] {
    let reflected = mirror_x(center) * path.clone();
    [path, reflected]
}

/// Single quadratic segment `start -> end` bent through `ctrl`.
pub fn quad(start: Point, ctrl: Point, end: Point) -> BezPath {
    quad_chain(start, &[(ctrl, end)])
}

/// Chain of quadratic segments starting at `start`.
pub fn quad_chain(start: Point, segments: &[(Point, Point)]) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(start);
    for &(ctrl, end) in segments {
        p.quad_to(ctrl, end);
    }
    p
}

/// Open arc dipping (`depth > 0`) or bulging (`depth < 0`) between two points on a row.
pub fn sag(center: Point, half_width: f64, depth: f64) -> BezPath {
    quad(
        Point::new(center.x - half_width, center.y),
        Point::new(center.x, center.y + depth),
        Point::new(center.x + half_width, center.y),
    )
}

/// Vertices of a regular polygon; `rotation` is in radians, 0 puts a vertex straight up.
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let a = rotation - PI / 2.0 + TAU * (i as f64) / (sides as f64);
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Star outline alternating between `outer` and `inner` radii.
pub fn star(center: Point, outer: f64, inner: f64, points: usize) -> Vec<Point> {
    let n = points * 2;
    (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = -PI / 2.0 + TAU * (i as f64) / (n as f64);
            Point::new(center.x + r * a.cos(), center.y + r * a.sin())
        })
        .collect()
}

/// Closed annular sector between `inner` and `outer` radii, angles in radians.
pub fn ring_segment(center: Point, inner: f64, outer: f64, start: f64, sweep: f64) -> BezPath {
    const TOLERANCE: f64 = 0.05;
    let mut p = BezPath::new();
    p.move_to(polar(center, outer, start));
    let outer_arc = kurbo::Arc {
        center,
        radii: Vec2::new(outer, outer),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    p.extend(outer_arc.append_iter(TOLERANCE));
    p.line_to(polar(center, inner, start + sweep));
    let inner_arc = kurbo::Arc {
        center,
        radii: Vec2::new(inner, inner),
        start_angle: start + sweep,
        sweep_angle: -sweep,
        x_rotation: 0.0,
    };
    p.extend(inner_arc.append_iter(TOLERANCE));
    p.close_path();
    p
}

/// Point at `radius` from `center` along `angle` (radians, 0 = +x, clockwise in y-down space).
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
