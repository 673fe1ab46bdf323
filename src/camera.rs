//! Camera: viewport↔canvas coordinate conversions for pan/zoom.
//!
//! Viewport space is on-screen CSS pixels; canvas space is the document's
//! logical coordinate system. The mapping composes a viewport-center shift,
//! a pan offset, and a uniform zoom. All conversions are pure; the camera
//! holds only the pan offset and zoom factor.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either viewport or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the canvas.
///
/// `offset_x` / `offset_y` are the pan offset in viewport pixels, applied
/// after the viewport-center shift. `zoom` is a scale factor (1.0 = no
/// zoom) and is always positive.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a viewport-space point to canvas coordinates.
    ///
    /// `center` is the viewport center in viewport pixels; canvas (0, 0)
    /// sits at the viewport center when the pan offset is zero.
    #[must_use]
    pub fn to_canvas(&self, viewport: Point, center: Point) -> Point {
        Point {
            x: (viewport.x - center.x - self.offset_x) / self.zoom,
            y: (viewport.y - center.y - self.offset_y) / self.zoom,
        }
    }

    /// Convert a canvas-space point to viewport coordinates. Exact
    /// algebraic inverse of [`Camera::to_canvas`].
    #[must_use]
    pub fn to_viewport(&self, canvas: Point, center: Point) -> Point {
        Point {
            x: canvas.x * self.zoom + center.x + self.offset_x,
            y: canvas.y * self.zoom + center.y + self.offset_y,
        }
    }

    /// Convert a viewport-space distance (pixels) to canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Set the zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan by a viewport-space delta. Non-finite deltas are ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.offset_x += dx;
            self.offset_y += dy;
        }
    }
}

/// Clamp a pan offset component to `[min, max]`.
///
/// Pan bounds are host policy: only the host knows the document extent
/// it wants to keep on screen, so the engine never bounds its own pans.
/// A host enforcing bounds runs each offset component through here
/// before writing it back to the camera.
///
/// Non-finite values fall back to 0.0 rather than propagating NaN into
/// camera state. An inverted range (min > max, e.g. a viewport larger
/// than the pan bounds) skips clamping and passes the raw value through
/// so the view never gets pinned at an unreachable position.
#[must_use]
pub fn clamp_offset(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if min > max {
        return value;
    }
    value.clamp(min, max)
}
