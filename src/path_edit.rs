//! Path editing: point/handle selection, movement, and symmetric handle
//! mirroring for the active path.
//!
//! A small state machine over a single path's points. `Idle` means no
//! path is being edited; `Editing` carries the shape index of the active
//! path plus the set of selected point indices. All geometry mutations
//! route through [`ShapeStore::modify_path`] so a bracketed drag lands as
//! one model update, and out-of-range indices are silent no-ops.

#[cfg(test)]
#[path = "path_edit_test.rs"]
mod path_edit_test;

use std::collections::BTreeSet;

use crate::shape::{Handle, ShapeStore};

/// Which bezier handle of a point an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    In,
    Out,
}

/// Outcome of a delete operation, for the engine to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing happened (no selection or not editing).
    Noop,
    /// Points were removed; the path survives.
    PointsRemoved,
    /// The path fell below two points and the whole shape was removed.
    ShapeDeleted,
}

/// Edit-mode state for paths.
#[derive(Debug, Clone, Default)]
pub enum PathEditor {
    /// No path is being edited.
    #[default]
    Idle,
    /// One path is active; zero or more of its points are selected.
    Editing {
        /// Store index of the path being edited.
        shape: usize,
        /// Selected point indices within the path.
        selected: BTreeSet<usize>,
    },
}

impl PathEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Whether a path is currently being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Store index of the active path, if editing.
    #[must_use]
    pub fn active_shape(&self) -> Option<usize> {
        match *self {
            Self::Editing { shape, .. } => Some(shape),
            Self::Idle => None,
        }
    }

    /// Selected point indices in ascending order.
    #[must_use]
    pub fn selected_points(&self) -> Vec<usize> {
        match self {
            Self::Editing { selected, .. } => selected.iter().copied().collect(),
            Self::Idle => Vec::new(),
        }
    }

    /// Enter edit mode on the path at `index`. No-op unless the shape
    /// exists and is a path.
    pub fn begin(&mut self, store: &ShapeStore, index: usize) {
        if store.path_points(index).is_some() {
            *self = Self::Editing { shape: index, selected: BTreeSet::new() };
        }
    }

    /// Leave edit mode (Esc / click outside).
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Select the point at `index`. Non-additive replaces the selection;
    /// additive toggles membership. Out-of-range → no-op.
    pub fn select_point(&mut self, store: &ShapeStore, index: usize, additive: bool) {
        let Self::Editing { shape, ref mut selected } = *self else {
            return;
        };
        let Some(points) = store.path_points(shape) else {
            return;
        };
        if index >= points.len() {
            return;
        }
        if additive {
            if !selected.remove(&index) {
                selected.insert(index);
            }
        } else {
            selected.clear();
            selected.insert(index);
        }
    }

    /// Move the anchor at `index` to a new position. The delta is applied
    /// rigidly to the anchor and both of its handles; when the dragged
    /// point is part of a multi-selection, every selected point translates
    /// by the same delta.
    pub fn move_point(&mut self, store: &mut ShapeStore, index: usize, new_x: f64, new_y: f64) {
        let Self::Editing { shape, ref selected } = *self else {
            return;
        };
        let group: Vec<usize> = if selected.contains(&index) {
            selected.iter().copied().collect()
        } else {
            vec![index]
        };
        store.modify_path(shape, |points, _closed| {
            let Some(dragged) = points.get(index) else {
                return;
            };
            let dx = new_x - dragged.x;
            let dy = new_y - dragged.y;
            for &i in &group {
                let Some(p) = points.get_mut(i) else {
                    continue;
                };
                p.x += dx;
                p.y += dy;
                if let Some(ref mut h) = p.handle_in {
                    h.x += dx;
                    h.y += dy;
                }
                if let Some(ref mut h) = p.handle_out {
                    h.x += dx;
                    h.y += dy;
                }
            }
        });
    }

    /// Move one handle of the point at `index`. Unless `break_symmetry`
    /// is set (or the pair was broken earlier), the opposite handle is
    /// mirrored through the anchor, preserving angle and length:
    /// `opposite = anchor − (new − anchor)`.
    pub fn move_handle(
        &mut self,
        store: &mut ShapeStore,
        index: usize,
        side: HandleSide,
        new_x: f64,
        new_y: f64,
        break_symmetry: bool,
    ) {
        let Self::Editing { shape, .. } = *self else {
            return;
        };
        store.modify_path(shape, |points, _closed| {
            let Some(p) = points.get_mut(index) else {
                return;
            };
            if break_symmetry {
                p.broken = true;
            }
            let moved = Handle::new(new_x, new_y);
            let mirrored = Handle::new(p.x - (new_x - p.x), p.y - (new_y - p.y));
            let mirror = !break_symmetry && !p.broken;
            match side {
                HandleSide::In => {
                    p.handle_in = Some(moved);
                    if mirror && p.handle_out.is_some() {
                        p.handle_out = Some(mirrored);
                    }
                }
                HandleSide::Out => {
                    p.handle_out = Some(moved);
                    if mirror && p.handle_in.is_some() {
                        p.handle_in = Some(mirrored);
                    }
                }
            }
        });
    }

    /// Delete all selected points.
    ///
    /// Fewer than two points remaining kills the whole shape (a path
    /// needs at least two) and exits edit mode; fewer than three forces
    /// the path open (a closed path needs at least three). Otherwise the
    /// geometry updates and the point selection clears.
    pub fn delete_selected(&mut self, store: &mut ShapeStore) -> DeleteOutcome {
        let (shape, doomed) = match self {
            Self::Editing { shape, selected } if !selected.is_empty() => {
                (*shape, selected.clone())
            }
            _ => return DeleteOutcome::Noop,
        };
        let Some(points) = store.path_points(shape) else {
            return DeleteOutcome::Noop;
        };
        let doomed_count = doomed.iter().filter(|&&i| i < points.len()).count();
        if points.len() - doomed_count < 2 {
            store.remove(shape);
            *self = Self::Idle;
            return DeleteOutcome::ShapeDeleted;
        }
        store.modify_path(shape, |points, closed| {
            let mut i = 0;
            points.retain(|_| {
                let keep = !doomed.contains(&i);
                i += 1;
                keep
            });
            if points.len() < 3 {
                *closed = false;
            }
        });
        if let Self::Editing { selected, .. } = self {
            selected.clear();
        }
        DeleteOutcome::PointsRemoved
    }

    /// React to a shape removal in the store: the active path disappearing
    /// exits edit mode; a removal below it shifts the cached index down.
    pub fn reindex_removed(&mut self, removed: usize) {
        if let Self::Editing { ref mut shape, .. } = *self {
            match (*shape).cmp(&removed) {
                std::cmp::Ordering::Equal => *self = Self::Idle,
                std::cmp::Ordering::Greater => *shape -= 1,
                std::cmp::Ordering::Less => {}
            }
        }
    }
}
