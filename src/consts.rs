//! Shared numeric constants for the canvas core.

// ── Camera ──────────────────────────────────────────────────────

/// Minimum zoom factor the camera will accept.
pub const MIN_ZOOM: f64 = 0.01;

/// Maximum zoom factor the camera will accept.
pub const MAX_ZOOM: f64 = 10.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Floor for the path hit tolerance in canvas units, so hairline
/// strokes stay clickable.
pub const MIN_PATH_TOLERANCE: f64 = 1.5;

/// Fraction of the stroke width used as the path hit tolerance.
pub const PATH_TOLERANCE_FACTOR: f64 = 0.6;

/// Slop added to the bounding-box fallback test for transformed shapes.
pub const BBOX_FALLBACK_SLOP: f64 = 0.5;

/// Screen-space hit slop in pixels for path anchors and handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Below this size (canvas units) a drawn shape is discarded on release.
pub const MIN_DRAW_SIZE: f64 = 2.0;

// ── Pan inertia ─────────────────────────────────────────────────

/// Weight of the newest pointer delta in the velocity smoothing filter.
pub const VELOCITY_SMOOTHING: f64 = 0.7;

/// Per-step velocity multiplier after release.
pub const INERTIA_FRICTION: f64 = 0.92;

/// Velocity magnitude below which inertia stops on both axes.
pub const MIN_VELOCITY: f64 = 0.5;

// ── Grid / rulers ───────────────────────────────────────────────

/// CSS pixels per inch for unit conversion.
pub const PX_PER_INCH: f64 = 96.0;

/// CSS pixels per millimeter for unit conversion.
pub const PX_PER_MM: f64 = PX_PER_INCH / 25.4;

/// Minor ticks are dropped when their on-screen spacing falls below this.
pub const MIN_MINOR_SPACING_PX: f64 = 6.0;

/// Default target on-screen spacing between major ticks.
pub const DEFAULT_TICK_TARGET_PX: f64 = 80.0;

// ── Text metrics ────────────────────────────────────────────────

/// Approximate glyph advance as a fraction of the font size. Real
/// measurement lives with the renderer; this is good enough for
/// hit-testing and selection framing.
pub const TEXT_ADVANCE_EM: f64 = 0.6;

/// Approximate line height as a fraction of the font size.
pub const TEXT_LINE_EM: f64 = 1.2;
