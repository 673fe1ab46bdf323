//! Hit-testing: which shape sits under a canvas-space point.
//!
//! The shape list is walked back-to-front (topmost first) and the first
//! geometric match wins, which is exactly the z-order tie-break the user
//! expects. Containers are skipped — layers and groups are only reachable
//! through the layer panel. Shapes carrying a rotation or scale fall back
//! to a slop-expanded bounding-box test; everything axis-aligned gets a
//! precise per-kind predicate.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{BBOX_FALLBACK_SLOP, MIN_PATH_TOLERANCE, PATH_TOLERANCE_FACTOR};
use crate::shape::{Bounds, PathPoint, Shape, ShapeKind, ShapeStore};
use crate::transform;

/// Index of the topmost shape containing `canvas_pt`, or `None`.
#[must_use]
pub fn hit_test(store: &ShapeStore, canvas_pt: Point) -> Option<usize> {
    for index in (0..store.len()).rev() {
        let Some(shape) = store.get(index) else {
            continue;
        };
        if shape.kind.is_container() {
            continue;
        }
        if hits_shape(shape, canvas_pt) {
            return Some(index);
        }
    }
    None
}

fn hits_shape(shape: &Shape, pt: Point) -> bool {
    if !shape.transform.is_axis_aligned() {
        return transformed_fallback(shape, pt);
    }
    // Translation-only transforms are folded into the point instead of
    // the geometry.
    let local = Point::new(pt.x - shape.transform.translate_x, pt.y - shape.transform.translate_y);
    match shape.kind {
        ShapeKind::Rect { x, y, width, height } => {
            x <= local.x && local.x <= x + width && y <= local.y && local.y <= y + height
        }
        ShapeKind::Ellipse { center_x, center_y, radius_x, radius_y } => {
            hits_ellipse(local, center_x, center_y, radius_x, radius_y)
        }
        ShapeKind::Path { ref points, closed } => {
            hits_path(local, points, closed, path_tolerance(shape.stroke_width))
        }
        ShapeKind::Text { .. } => match crate::shape::kind_bounds(&shape.kind) {
            Some(b) => contains(b, local, 0.0),
            None => false,
        },
        ShapeKind::Layer { .. } | ShapeKind::Group { .. } => false,
    }
}

/// Approximate test for rotated/scaled shapes: the post-transform AABB
/// expanded by half the stroke plus a small slop. Imprecise for rotation
/// (the AABB over-covers the true quad); isolated here so an exact
/// rotated-quad test can replace it.
fn transformed_fallback(shape: &Shape, pt: Point) -> bool {
    let Some(geom) = crate::shape::kind_bounds(&shape.kind) else {
        return false;
    };
    let aabb = transform::transformed_bounds(geom, &shape.transform);
    contains(aabb, pt, shape.stroke_width / 2.0 + BBOX_FALLBACK_SLOP)
}

fn contains(b: Bounds, pt: Point, slop: f64) -> bool {
    b.x - slop <= pt.x
        && pt.x <= b.x + b.width + slop
        && b.y - slop <= pt.y
        && pt.y <= b.y + b.height + slop
}

fn hits_ellipse(pt: Point, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (pt.x - cx) / rx;
    let ny = (pt.y - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Hit tolerance for a path stroke in canvas units.
#[must_use]
pub fn path_tolerance(stroke_width: f64) -> f64 {
    (stroke_width * PATH_TOLERANCE_FACTOR).max(MIN_PATH_TOLERANCE)
}

fn hits_path(pt: Point, points: &[PathPoint], closed: bool, tolerance: f64) -> bool {
    if points.len() < 2 {
        return false;
    }
    for pair in points.windows(2) {
        if segment_distance(pt, anchor(&pair[0]), anchor(&pair[1])) <= tolerance {
            return true;
        }
    }
    if closed {
        let first = anchor(&points[0]);
        let last = anchor(&points[points.len() - 1]);
        if segment_distance(pt, last, first) <= tolerance {
            return true;
        }
    }
    false
}

fn anchor(p: &PathPoint) -> Point {
    Point::new(p.x, p.y)
}

/// Distance from `pt` to the segment `a`–`b`: projection clamped to
/// [0, 1], with a point-distance fallback for degenerate segments.
#[must_use]
pub fn segment_distance(pt: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return ((pt.x - a.x).powi(2) + (pt.y - a.y).powi(2)).sqrt();
    }
    let t = (((pt.x - a.x) * abx + (pt.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    let px = a.x + t * abx;
    let py = a.y + t * aby;
    ((pt.x - px).powi(2) + (pt.y - py).powi(2)).sqrt()
}
