//! Ruler/grid tick generation.
//!
//! Given the camera state, the viewport extent along one axis, and a unit
//! configuration, produce the tick positions and labels covering the
//! visible canvas range. Stateless: everything is recomputed from the
//! inputs on each call, so any zoom/pan/unit change just means calling
//! again.
//!
//! Step selection picks, from a unit-appropriate ladder, the canvas-space
//! step whose on-screen projection is closest to the configured target
//! spacing. Minor ticks subdivide the major step and are suppressed
//! entirely once their screen spacing drops below the legibility cutoff.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{DEFAULT_TICK_TARGET_PX, MIN_MINOR_SPACING_PX, PX_PER_INCH, PX_PER_MM};

/// Which ruler axis ticks are being generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    /// Vertical labels are sign-flipped: canvas y grows downward but
    /// displayed coordinates conventionally grow upward.
    Vertical,
}

/// Measurement unit for ruler labels and step ladders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Unit {
    /// Canvas pixels; steps are powers of two.
    #[default]
    Pixels,
    /// Inches at 96 px/in; steps from a fixed quarter-inch ladder.
    Inches,
    /// Millimeters; steps from the standard metric ladder.
    Millimeters,
    /// Anything else: a 1-2-5 decade ladder over a base grid unit.
    Generic {
        /// Size of one display unit in canvas pixels.
        base_px: f64,
    },
}

/// Ruler configuration.
#[derive(Debug, Clone, Copy)]
pub struct TickConfig {
    pub unit: Unit,
    /// Desired on-screen spacing between major ticks, in pixels.
    pub target_px: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { unit: Unit::Pixels, target_px: DEFAULT_TICK_TARGET_PX }
    }
}

/// One ruler tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the ruler in viewport pixels.
    pub position_px: f64,
    /// Label text; empty for minor ticks.
    pub label: String,
    pub is_major: bool,
}

/// Size of one display unit in canvas pixels.
fn unit_px(unit: Unit) -> f64 {
    match unit {
        Unit::Pixels => 1.0,
        Unit::Inches => PX_PER_INCH,
        Unit::Millimeters => PX_PER_MM,
        Unit::Generic { base_px } => base_px,
    }
}

/// Choose the major step in canvas units for the given zoom.
#[must_use]
pub fn major_step(zoom: f64, config: &TickConfig) -> f64 {
    let target = config.target_px.max(1.0);
    match config.unit {
        Unit::Pixels => {
            let exponent = (target / zoom).log2().round();
            2.0_f64.powf(exponent)
        }
        Unit::Inches => closest_step(&[0.25, 0.5, 1.0, 2.0, 4.0], PX_PER_INCH, zoom, target),
        Unit::Millimeters => closest_step(
            &[10.0, 20.0, 25.0, 50.0, 100.0, 200.0],
            PX_PER_MM,
            zoom,
            target,
        ),
        Unit::Generic { base_px } => decade_step(base_px, zoom, target),
    }
}

/// Pick the ladder entry whose screen projection lands nearest the target.
fn closest_step(ladder: &[f64], unit_px: f64, zoom: f64, target: f64) -> f64 {
    let mut best = ladder[0] * unit_px;
    let mut best_err = f64::INFINITY;
    for &value in ladder {
        let step = value * unit_px;
        let err = (step * zoom - target).abs();
        if err < best_err {
            best_err = err;
            best = step;
        }
    }
    best
}

/// Classic 1-2-5 engineering ladder scaled by powers of ten from the base
/// unit, extended across enough decades to bracket the target.
fn decade_step(base_px: f64, zoom: f64, target: f64) -> f64 {
    let base = if base_px > 0.0 { base_px } else { 1.0 };
    let raw = target / (zoom * base);
    let exponent = raw.log10().floor();
    let magnitude = 10.0_f64.powf(exponent);
    let mut best = magnitude;
    let mut best_err = f64::INFINITY;
    for scale in [1.0, 2.0, 5.0, 10.0] {
        let candidate = magnitude * scale;
        let err = (candidate * zoom * base - target).abs();
        if err < best_err {
            best_err = err;
            best = candidate;
        }
    }
    best * base
}

/// Minor-step divisor per unit: pixels halve, inches quarter, the rest
/// split into fifths.
fn minor_divisor(unit: Unit) -> f64 {
    match unit {
        Unit::Pixels => 2.0,
        Unit::Inches => 4.0,
        Unit::Millimeters | Unit::Generic { .. } => 5.0,
    }
}

/// Generate ticks covering the visible canvas range along one axis.
///
/// `offset` and `center` are the camera pan offset and viewport-center
/// component for this axis, in viewport pixels; `viewport_len` is the
/// ruler length in pixels. Returns an empty set for degenerate input
/// (non-positive zoom or viewport, non-finite offset).
#[must_use]
pub fn ticks(
    axis: Axis,
    zoom: f64,
    offset: f64,
    center: f64,
    viewport_len: f64,
    config: &TickConfig,
) -> Vec<Tick> {
    if zoom <= 0.0 || viewport_len <= 0.0 || !offset.is_finite() {
        return Vec::new();
    }
    let major = major_step(zoom, config);
    if major <= 0.0 || !major.is_finite() {
        return Vec::new();
    }
    let minor = major / minor_divisor(config.unit);
    let draw_minor = minor * zoom >= MIN_MINOR_SPACING_PX;
    let step = if draw_minor { minor } else { major };

    // Visible canvas range for this axis.
    let canvas_min = (0.0 - center - offset) / zoom;
    let canvas_max = (viewport_len - center - offset) / zoom;

    let per_unit = unit_px(config.unit);
    #[allow(clippy::cast_possible_truncation)]
    let ratio = (major / step).round() as i64;
    let mut out = Vec::new();
    #[allow(clippy::cast_possible_truncation)]
    let mut k = (canvas_min / step).ceil() as i64;
    loop {
        #[allow(clippy::cast_precision_loss)]
        let canvas = k as f64 * step;
        if canvas > canvas_max {
            break;
        }
        let is_major = k.rem_euclid(ratio) == 0;
        let label = if is_major {
            let mut value = (canvas / per_unit).round();
            if axis == Axis::Vertical {
                value = -value;
            }
            // Avoid a "-0" label at the origin.
            if value == 0.0 {
                value = 0.0;
            }
            format!("{value}")
        } else {
            String::new()
        };
        out.push(Tick {
            position_px: canvas * zoom + center + offset,
            label,
            is_major,
        });
        k += 1;
    }
    out
}
