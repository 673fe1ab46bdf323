//! Geometry and interaction core for a vector-graphics editor canvas.
//!
//! This crate is the headless logic layer of the editor: it owns the
//! document model, selection, and camera, translates pointer/keyboard
//! events into document mutations, and hands the host a list of
//! [`engine::Action`]s to apply. Rendering, undo/redo history, and file
//! persistence live with the host — the engine marks where undoable
//! gestures begin and end, but never stores history itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`]: events in, actions out |
//! | [`shape`] | Shape variants, transforms, and the in-memory store |
//! | [`selection`] | Selected-shape set with removal re-indexing |
//! | [`camera`] | Viewport↔canvas coordinate conversions |
//! | [`hit`] | Z-order-aware hit testing |
//! | [`path_edit`] | Path point/handle editing with symmetric mirroring |
//! | [`transform`] | Bounding-box ↔ affine-parameter composition |
//! | [`grid`] | Adaptive ruler/grid tick generation |
//! | [`inertia`] | Exponential-decay pan momentum |
//! | [`input`] | Tools, modifiers, and the gesture state machine |
//! | [`consts`] | Shared numeric constants (zoom limits, tolerances) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod grid;
pub mod hit;
pub mod inertia;
pub mod input;
pub mod path_edit;
pub mod selection;
pub mod shape;
pub mod transform;
