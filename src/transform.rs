//! Transform composition: converting between displayed (post-transform)
//! bounding-box edits and affine parameters.
//!
//! The inspector edits a shape's *displayed* position and size, but the
//! document stores untransformed geometry plus an [`AffineTransform`].
//! The functions here solve in both directions, and keep the shape
//! visually pinned when the origin or scale changes out from under it.
//!
//! Transform model: a local point `p` maps to canvas space as
//! `R(S(p − o)) + o + t`, where `o` is the origin point inside the
//! untransformed bounds, `S` scales, `R` rotates, and `t` translates.
//! The displayed position is the canvas-space location of the origin
//! point, `o + t`.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::camera::Point;
use crate::shape::{AffineTransform, Bounds};

/// Which axis an inspector edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Canvas-space position of the transform's origin point.
#[must_use]
pub fn displayed_position(geom: Bounds, t: &AffineTransform) -> Point {
    Point {
        x: geom.x + geom.width * t.origin_x + t.translate_x,
        y: geom.y + geom.height * t.origin_y + t.translate_y,
    }
}

/// Displayed size along both axes (geometry size × scale).
#[must_use]
pub fn displayed_size(geom: Bounds, t: &AffineTransform) -> (f64, f64) {
    (geom.width * t.scale_x, geom.height * t.scale_y)
}

/// Solve the translation component so the displayed position lands on
/// `value` along `axis`, leaving geometry and origin fixed.
pub fn set_displayed_position(geom: Bounds, t: &mut AffineTransform, axis: Axis, value: f64) {
    match axis {
        Axis::X => t.translate_x = value - geom.x - geom.width * t.origin_x,
        Axis::Y => t.translate_y = value - geom.y - geom.height * t.origin_y,
    }
}

/// Recover the geometry size that displays as `value` under the current
/// scale, clamped non-negative. Returns the new geometry bounds; scale is
/// untouched. A zero scale cannot be solved and leaves the bounds as-is.
#[must_use]
pub fn set_displayed_size(geom: Bounds, t: &AffineTransform, axis: Axis, value: f64) -> Bounds {
    let mut out = geom;
    match axis {
        Axis::X => {
            if t.scale_x != 0.0 {
                out.width = (value / t.scale_x).max(0.0);
            }
        }
        Axis::Y => {
            if t.scale_y != 0.0 {
                out.height = (value / t.scale_y).max(0.0);
            }
        }
    }
    out
}

/// Re-anchor the origin without visually moving the shape.
///
/// The reference point shifts by `d = (old − new) ⊙ size` in local space;
/// translation absorbs `d − R(S(d))`, compensating for translation living
/// in the post-scale, post-rotate frame while the origin is defined in
/// local space.
pub fn change_origin(geom: Bounds, t: &mut AffineTransform, new_origin_x: f64, new_origin_y: f64) {
    let dx = (t.origin_x - new_origin_x) * geom.width;
    let dy = (t.origin_y - new_origin_y) * geom.height;
    let (rx, ry) = rotate(dx * t.scale_x, dy * t.scale_y, t.rotate_deg);
    t.translate_x += dx - rx;
    t.translate_y += dy - ry;
    t.origin_x = new_origin_x;
    t.origin_y = new_origin_y;
}

/// Multiply the scale per axis while keeping the displayed position of
/// `anchor` (a canvas-space point, the fixed corner of a drag-resize)
/// invariant.
pub fn apply_scale_resize(
    geom: Bounds,
    t: &mut AffineTransform,
    factor_x: f64,
    factor_y: f64,
    anchor: Point,
) {
    // Pin the anchor as a material point: find its local coordinates
    // under the old transform, then pull it back after scaling.
    let local = local_of(geom, t, anchor);
    t.scale_x *= factor_x;
    t.scale_y *= factor_y;
    let after = apply_to_point(geom, t, local);
    t.translate_x += anchor.x - after.x;
    t.translate_y += anchor.y - after.y;
}

/// Proportional-scale mode: both axes set to the same value in one edit.
pub fn set_uniform_scale(t: &mut AffineTransform, scale: f64) {
    t.scale_x = scale;
    t.scale_y = scale;
}

/// Fold a rotation into (−360, 360) only when it has run past a full
/// turn; values already in range are preserved verbatim so continued
/// dragging never snaps.
#[must_use]
pub fn normalize_rotation(deg: f64) -> f64 {
    if deg.abs() >= 360.0 { deg % 360.0 } else { deg }
}

/// Map a local (untransformed) point to canvas space through `t`.
#[must_use]
pub fn apply_to_point(geom: Bounds, t: &AffineTransform, local: Point) -> Point {
    let ox = geom.x + geom.width * t.origin_x;
    let oy = geom.y + geom.height * t.origin_y;
    let (rx, ry) = rotate((local.x - ox) * t.scale_x, (local.y - oy) * t.scale_y, t.rotate_deg);
    Point { x: rx + ox + t.translate_x, y: ry + oy + t.translate_y }
}

/// Inverse of [`apply_to_point`]: canvas space back to local coordinates.
/// Undefined (passes the point through) when a scale axis is zero.
#[must_use]
pub fn local_of(geom: Bounds, t: &AffineTransform, canvas: Point) -> Point {
    let ox = geom.x + geom.width * t.origin_x;
    let oy = geom.y + geom.height * t.origin_y;
    let (ux, uy) = rotate(
        canvas.x - ox - t.translate_x,
        canvas.y - oy - t.translate_y,
        -t.rotate_deg,
    );
    let sx = if t.scale_x == 0.0 { 1.0 } else { t.scale_x };
    let sy = if t.scale_y == 0.0 { 1.0 } else { t.scale_y };
    Point { x: ux / sx + ox, y: uy / sy + oy }
}

/// Axis-aligned bounds of `geom` pushed through `t` (AABB of the four
/// transformed corners).
#[must_use]
pub fn transformed_bounds(geom: Bounds, t: &AffineTransform) -> Bounds {
    let corners = [
        Point::new(geom.x, geom.y),
        Point::new(geom.x + geom.width, geom.y),
        Point::new(geom.x, geom.y + geom.height),
        Point::new(geom.x + geom.width, geom.y + geom.height),
    ];
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for corner in corners {
        let p = apply_to_point(geom, t, corner);
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Standard 2D rotation by `deg` degrees.
fn rotate(x: f64, y: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}
