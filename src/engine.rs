//! Top-level engine: pointer/keyboard events in, document mutations and
//! host actions out.
//!
//! `EngineCore` owns the shape store, camera, selection, path editor, and
//! inertia state, and runs synchronously on the UI thread. Every handler
//! returns a list of [`Action`]s for the host to process — the host owns
//! rendering, undo history, and persistence. Gestures that mutate the
//! document are bracketed by exactly one `BeginTransaction` /
//! `EndTransaction` pair so a full drag undoes as one step; panning and
//! zooming touch only the camera and are never bracketed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::consts::{HANDLE_RADIUS_PX, MIN_DRAW_SIZE};
use crate::hit;
use crate::inertia::PanInertia;
use crate::input::{Button, GestureState, Key, Modifiers, Tool};
use crate::path_edit::{DeleteOutcome, HandleSide, PathEditor};
use crate::selection::Selection;
use crate::shape::{Bounds, Shape, ShapeKind, ShapeStore, StoreEvent};
use crate::transform::{self, Axis};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A shape was added at this index.
    ShapeAdded { index: usize },
    /// The shape at this index changed.
    ShapeUpdated { index: usize },
    /// The shape at this index was removed (indices above shifted down).
    ShapeDeleted { index: usize },
    /// The selection set changed.
    SelectionChanged,
    /// An undoable gesture started; the host history should open a step.
    BeginTransaction,
    /// The gesture finished; the host history should close the step.
    EndTransaction,
    /// The host should switch the pointer cursor.
    SetCursor(String),
    /// The scene needs repainting.
    RenderNeeded,
}

/// Core editor state and event handling.
pub struct EngineCore {
    pub store: ShapeStore,
    pub camera: Camera,
    pub selection: Selection,
    pub path_editor: PathEditor,
    pub inertia: PanInertia,
    pub tool: Tool,
    pub gesture: GestureState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    in_transaction: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ShapeStore::new(),
            camera: Camera::default(),
            selection: Selection::new(),
            path_editor: PathEditor::new(),
            inertia: PanInertia::new(),
            tool: Tool::default(),
            gesture: GestureState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            in_transaction: false,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport / camera ---

    /// Update viewport dimensions (CSS pixels).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
    }

    /// Viewport center in viewport pixels.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    /// Convert a viewport point to canvas space with the current camera.
    #[must_use]
    pub fn to_canvas(&self, viewport: Point) -> Point {
        self.camera.to_canvas(viewport, self.viewport_center())
    }

    // --- Tool ---

    /// Set the active tool. Leaving the path tool exits edit mode.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == Tool::PathEdit && tool != Tool::PathEdit {
            self.path_editor.end();
        }
        self.tool = tool;
    }

    /// Enter path edit mode on the shape at `index`. No-op unless it is a
    /// path.
    pub fn enter_path_edit(&mut self, index: usize) {
        self.path_editor.begin(&self.store, index);
        if self.path_editor.is_editing() {
            self.tool = Tool::PathEdit;
        }
    }

    // --- Pointer events ---

    pub fn on_pointer_down(
        &mut self,
        viewport_pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        // A fresh press always kills in-flight momentum.
        self.inertia.cancel();
        if button != Button::Primary {
            self.gesture = GestureState::Panning { last_viewport: viewport_pt };
            return actions;
        }
        let canvas_pt = self.to_canvas(viewport_pt);

        if self.tool == Tool::PathEdit && self.path_editor.is_editing() {
            self.pointer_down_path_edit(canvas_pt, modifiers, &mut actions);
            return actions;
        }
        if self.tool.is_draw() {
            self.pointer_down_draw(canvas_pt, &mut actions);
            return actions;
        }
        self.pointer_down_select(canvas_pt, viewport_pt, modifiers, &mut actions);
        actions
    }

    pub fn on_pointer_move(&mut self, viewport_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        let canvas_pt = self.to_canvas(viewport_pt);
        match self.gesture {
            GestureState::Idle => {}
            GestureState::Panning { last_viewport } => {
                let dx = viewport_pt.x - last_viewport.x;
                let dy = viewport_pt.y - last_viewport.y;
                self.inertia.sample(dx, dy);
                self.camera.pan_by(dx, dy);
                self.gesture = GestureState::Panning { last_viewport: viewport_pt };
                actions.push(Action::RenderNeeded);
            }
            GestureState::MovingShapes { last_canvas } => {
                let dx = canvas_pt.x - last_canvas.x;
                let dy = canvas_pt.y - last_canvas.y;
                self.begin_txn(&mut actions);
                for index in self.selection.indices() {
                    if self.store.is_effectively_locked(index) {
                        continue;
                    }
                    if let Some(mut t) = self.store.transform(index) {
                        t.translate_x += dx;
                        t.translate_y += dy;
                        self.store.set_transform(index, t);
                        actions.push(Action::ShapeUpdated { index });
                    }
                }
                self.gesture = GestureState::MovingShapes { last_canvas: canvas_pt };
                actions.push(Action::RenderNeeded);
            }
            GestureState::DrawingShape { index, anchor_canvas } => {
                let bounds = Bounds::new(
                    anchor_canvas.x.min(canvas_pt.x),
                    anchor_canvas.y.min(canvas_pt.y),
                    (canvas_pt.x - anchor_canvas.x).abs(),
                    (canvas_pt.y - anchor_canvas.y).abs(),
                );
                self.store.set_bounding_box(index, bounds);
                actions.push(Action::ShapeUpdated { index });
                actions.push(Action::RenderNeeded);
            }
            GestureState::DraggingPoint { point } => {
                let local = self.path_local_point(canvas_pt);
                self.path_editor.move_point(&mut self.store, point, local.x, local.y);
                if let Some(index) = self.path_editor.active_shape() {
                    actions.push(Action::ShapeUpdated { index });
                }
                actions.push(Action::RenderNeeded);
            }
            GestureState::DraggingHandle { point, side } => {
                let local = self.path_local_point(canvas_pt);
                self.path_editor.move_handle(
                    &mut self.store,
                    point,
                    side,
                    local.x,
                    local.y,
                    modifiers.alt,
                );
                if let Some(index) = self.path_editor.active_shape() {
                    actions.push(Action::ShapeUpdated { index });
                }
                actions.push(Action::RenderNeeded);
            }
        }
        self.drain_store_events(&mut actions);
        actions
    }

    pub fn on_pointer_up(
        &mut self,
        _viewport_pt: Point,
        _button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.gesture {
            GestureState::Idle | GestureState::Panning { .. } => {
                // Inertia keeps whatever velocity the drag built up; the
                // host's frame timer drives it from here via `tick`.
            }
            GestureState::MovingShapes { .. } => {
                self.end_txn(&mut actions);
            }
            GestureState::DrawingShape { index, .. } => {
                let degenerate = match self.store.geometry_bounds(index) {
                    Some(b) => b.width < MIN_DRAW_SIZE && b.height < MIN_DRAW_SIZE,
                    None => true,
                };
                if degenerate {
                    self.store.remove(index);
                    actions.push(Action::ShapeDeleted { index });
                } else {
                    self.selection.replace(index);
                    actions.push(Action::SelectionChanged);
                }
                self.end_txn(&mut actions);
                actions.push(Action::RenderNeeded);
            }
            GestureState::DraggingPoint { .. } | GestureState::DraggingHandle { .. } => {
                self.end_txn(&mut actions);
            }
        }
        self.gesture = GestureState::Idle;
        self.drain_store_events(&mut actions);
        actions
    }

    /// Frame callback (~16 ms): advance pan inertia.
    pub fn tick(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.inertia.is_active() {
            let (dx, dy) = self.inertia.step();
            self.camera.pan_by(dx, dy);
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Wheel input: ctrl-wheel zooms about the cursor, plain wheel pans.
    pub fn on_wheel(&mut self, viewport_pt: Point, dx: f64, dy: f64, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if modifiers.ctrl {
            let before = self.to_canvas(viewport_pt);
            let factor = if dy < 0.0 { 1.1 } else { 1.0 / 1.1 };
            self.camera.set_zoom(self.camera.zoom * factor);
            // Re-solve the offset so the canvas point under the cursor
            // stays put.
            let center = self.viewport_center();
            self.camera.offset_x = viewport_pt.x - center.x - before.x * self.camera.zoom;
            self.camera.offset_y = viewport_pt.y - center.y - before.y * self.camera.zoom;
        } else {
            self.camera.pan_by(-dx, -dy);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        match key.0.as_str() {
            "Escape" => self.handle_escape(&mut actions),
            "Delete" | "Backspace" => self.handle_delete(&mut actions),
            _ => {}
        }
        self.drain_store_events(&mut actions);
        actions
    }

    fn handle_escape(&mut self, actions: &mut Vec<Action>) {
        match self.gesture {
            GestureState::DrawingShape { index, .. } => {
                // Abort without committing: the provisional shape dies.
                self.store.remove(index);
                actions.push(Action::ShapeDeleted { index });
                self.end_txn(actions);
            }
            GestureState::MovingShapes { .. }
            | GestureState::DraggingPoint { .. }
            | GestureState::DraggingHandle { .. } => {
                self.end_txn(actions);
            }
            GestureState::Idle | GestureState::Panning { .. } => {}
        }
        self.gesture = GestureState::Idle;
        if self.path_editor.is_editing() {
            self.path_editor.end();
            self.tool = Tool::Select;
        } else if !self.selection.is_empty() {
            self.selection.clear();
            actions.push(Action::SelectionChanged);
        }
        actions.push(Action::RenderNeeded);
    }

    fn handle_delete(&mut self, actions: &mut Vec<Action>) {
        if self.path_editor.is_editing() {
            if self.path_editor.selected_points().is_empty() {
                return;
            }
            let edited = self.path_editor.active_shape();
            self.begin_txn(actions);
            let outcome = self.path_editor.delete_selected(&mut self.store);
            match outcome {
                DeleteOutcome::Noop => {}
                DeleteOutcome::PointsRemoved => {
                    if let Some(index) = self.path_editor.active_shape() {
                        actions.push(Action::ShapeUpdated { index });
                    }
                    actions.push(Action::RenderNeeded);
                }
                DeleteOutcome::ShapeDeleted => {
                    if let Some(index) = edited {
                        actions.push(Action::ShapeDeleted { index });
                    }
                    self.tool = Tool::Select;
                    actions.push(Action::RenderNeeded);
                }
            }
            self.end_txn(actions);
            return;
        }
        let doomed: Vec<usize> = self
            .selection
            .indices()
            .into_iter()
            .filter(|&i| !self.store.is_effectively_locked(i))
            .collect();
        if doomed.is_empty() {
            return;
        }
        self.begin_txn(actions);
        for &index in doomed.iter().rev() {
            self.store.remove(index);
            actions.push(Action::ShapeDeleted { index });
        }
        self.selection.clear();
        actions.push(Action::SelectionChanged);
        self.end_txn(actions);
        actions.push(Action::RenderNeeded);
    }

    // --- Inspector entry points ---
    //
    // Each is a complete one-shot gesture: index-checked, locked-checked,
    // transaction-bracketed.

    /// Move the shape so its displayed position lands on `value` along
    /// `axis`.
    pub fn set_displayed_position(&mut self, index: usize, axis: Axis, value: f64) -> Vec<Action> {
        self.with_transform_edit(index, |geom, t| {
            transform::set_displayed_position(geom, t, axis, value);
        })
    }

    /// Resize the shape so it displays `value` units along `axis`,
    /// leaving scale untouched.
    pub fn set_displayed_size(&mut self, index: usize, axis: Axis, value: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        if !value.is_finite() || self.store.is_effectively_locked(index) {
            return actions;
        }
        let (Some(geom), Some(t)) = (self.store.geometry_bounds(index), self.store.transform(index))
        else {
            return actions;
        };
        self.begin_txn(&mut actions);
        let bounds = transform::set_displayed_size(geom, &t, axis, value);
        self.store.set_bounding_box(index, bounds);
        actions.push(Action::ShapeUpdated { index });
        self.end_txn(&mut actions);
        self.drain_store_events(&mut actions);
        actions
    }

    /// Set the rotation in degrees. Raw values inside (−360, 360) are
    /// preserved; anything past a full turn is folded back in.
    pub fn set_rotation(&mut self, index: usize, degrees: f64) -> Vec<Action> {
        self.with_transform_edit(index, |_geom, t| {
            t.rotate_deg = transform::normalize_rotation(degrees);
        })
    }

    /// Re-anchor the transform origin without visually moving the shape.
    pub fn set_origin(&mut self, index: usize, origin_x: f64, origin_y: f64) -> Vec<Action> {
        self.with_transform_edit(index, |geom, t| {
            transform::change_origin(geom, t, origin_x, origin_y);
        })
    }

    /// Multiply the scale per axis, keeping `anchor` (canvas space)
    /// visually fixed — the drag-resize primitive.
    pub fn resize_by_factor(
        &mut self,
        index: usize,
        factor_x: f64,
        factor_y: f64,
        anchor: Point,
    ) -> Vec<Action> {
        self.with_transform_edit(index, |geom, t| {
            transform::apply_scale_resize(geom, t, factor_x, factor_y, anchor);
        })
    }

    /// Proportional-scale mode: set both scale axes in one transaction.
    pub fn set_uniform_scale(&mut self, index: usize, scale: f64) -> Vec<Action> {
        self.with_transform_edit(index, |_geom, t| {
            transform::set_uniform_scale(t, scale);
        })
    }

    // --- Queries ---

    /// Canvas-space displayed position of the shape's transform origin.
    #[must_use]
    pub fn displayed_position(&self, index: usize) -> Option<Point> {
        let geom = self.store.geometry_bounds(index)?;
        let t = self.store.transform(index)?;
        Some(transform::displayed_position(geom, &t))
    }

    /// Displayed (post-scale) size of the shape.
    #[must_use]
    pub fn displayed_size(&self, index: usize) -> Option<(f64, f64)> {
        let geom = self.store.geometry_bounds(index)?;
        let t = self.store.transform(index)?;
        Some(transform::displayed_size(geom, &t))
    }

    // --- Internals ---

    fn pointer_down_select(
        &mut self,
        canvas_pt: Point,
        viewport_pt: Point,
        modifiers: Modifiers,
        actions: &mut Vec<Action>,
    ) {
        match hit::hit_test(&self.store, canvas_pt) {
            Some(index) => {
                if modifiers.shift {
                    self.selection.toggle(index);
                } else if !self.selection.contains(index) {
                    self.selection.replace(index);
                }
                actions.push(Action::SelectionChanged);
                if self.store.is_effectively_locked(index) {
                    actions.push(Action::SetCursor("not-allowed".to_owned()));
                } else {
                    self.gesture = GestureState::MovingShapes { last_canvas: canvas_pt };
                }
                actions.push(Action::RenderNeeded);
            }
            None => {
                if !self.selection.is_empty() {
                    self.selection.clear();
                    actions.push(Action::SelectionChanged);
                    actions.push(Action::RenderNeeded);
                }
                self.gesture = GestureState::Panning { last_viewport: viewport_pt };
            }
        }
    }

    fn pointer_down_draw(&mut self, canvas_pt: Point, actions: &mut Vec<Action>) {
        let kind = match self.tool {
            Tool::Rect => ShapeKind::Rect { x: canvas_pt.x, y: canvas_pt.y, width: 0.0, height: 0.0 },
            Tool::Ellipse => ShapeKind::Ellipse {
                center_x: canvas_pt.x,
                center_y: canvas_pt.y,
                radius_x: 0.0,
                radius_y: 0.0,
            },
            Tool::Select | Tool::PathEdit => return,
        };
        self.begin_txn(actions);
        let index = self.store.add(Shape::new(kind));
        actions.push(Action::ShapeAdded { index });
        self.gesture = GestureState::DrawingShape { index, anchor_canvas: canvas_pt };
        actions.push(Action::RenderNeeded);
    }

    fn pointer_down_path_edit(
        &mut self,
        canvas_pt: Point,
        modifiers: Modifiers,
        actions: &mut Vec<Action>,
    ) {
        let local = self.path_local_point(canvas_pt);
        let tolerance = self.camera.screen_dist_to_canvas(HANDLE_RADIUS_PX);
        match self.find_path_target(local, tolerance) {
            Some((point, Some(side))) => {
                self.begin_txn(actions);
                self.gesture = GestureState::DraggingHandle { point, side };
            }
            Some((point, None)) => {
                self.path_editor.select_point(&self.store, point, modifiers.shift);
                self.begin_txn(actions);
                self.gesture = GestureState::DraggingPoint { point };
                actions.push(Action::RenderNeeded);
            }
            None => {
                // Click outside the path exits edit mode.
                self.path_editor.end();
                self.tool = Tool::Select;
                actions.push(Action::RenderNeeded);
            }
        }
    }

    /// Translate a canvas point into the active path's local frame
    /// (path points live under the shape's translation).
    fn path_local_point(&self, canvas_pt: Point) -> Point {
        let Some(index) = self.path_editor.active_shape() else {
            return canvas_pt;
        };
        match self.store.transform(index) {
            Some(t) => Point::new(canvas_pt.x - t.translate_x, canvas_pt.y - t.translate_y),
            None => canvas_pt,
        }
    }

    /// Find the path point or handle under `local`, handles first (they
    /// draw on top of anchors).
    fn find_path_target(&self, local: Point, tolerance: f64) -> Option<(usize, Option<HandleSide>)> {
        let index = self.path_editor.active_shape()?;
        let points = self.store.path_points(index)?;
        for (i, p) in points.iter().enumerate() {
            if let Some(h) = p.handle_in {
                if within(local, h.x, h.y, tolerance) {
                    return Some((i, Some(HandleSide::In)));
                }
            }
            if let Some(h) = p.handle_out {
                if within(local, h.x, h.y, tolerance) {
                    return Some((i, Some(HandleSide::Out)));
                }
            }
        }
        for (i, p) in points.iter().enumerate() {
            if within(local, p.x, p.y, tolerance) {
                return Some((i, None));
            }
        }
        None
    }

    /// One-shot transform edit: lock/range checks, transaction bracket,
    /// event drain.
    fn with_transform_edit<F>(&mut self, index: usize, edit: F) -> Vec<Action>
    where
        F: FnOnce(Bounds, &mut crate::shape::AffineTransform),
    {
        let mut actions = Vec::new();
        if self.store.is_effectively_locked(index) {
            return actions;
        }
        let (Some(geom), Some(mut t)) =
            (self.store.geometry_bounds(index), self.store.transform(index))
        else {
            return actions;
        };
        self.begin_txn(&mut actions);
        edit(geom, &mut t);
        self.store.set_transform(index, t);
        actions.push(Action::ShapeUpdated { index });
        self.end_txn(&mut actions);
        self.drain_store_events(&mut actions);
        actions
    }

    /// Open a history transaction. Transactions never nest: a begin while
    /// one is open is swallowed.
    fn begin_txn(&mut self, actions: &mut Vec<Action>) {
        if !self.in_transaction {
            self.in_transaction = true;
            actions.push(Action::BeginTransaction);
        }
    }

    fn end_txn(&mut self, actions: &mut Vec<Action>) {
        if self.in_transaction {
            self.in_transaction = false;
            actions.push(Action::EndTransaction);
        }
    }

    /// Forward pending store events to index-holding consumers.
    fn drain_store_events(&mut self, actions: &mut Vec<Action>) {
        for event in self.store.take_events() {
            match event {
                StoreEvent::ItemModified(_) => {}
                StoreEvent::ItemRemoved(index) => {
                    let before = self.selection.len();
                    self.selection.reindex_removed(index);
                    self.path_editor.reindex_removed(index);
                    if self.selection.len() != before {
                        actions.push(Action::SelectionChanged);
                    }
                }
                StoreEvent::ItemsCleared => {
                    if !self.selection.is_empty() {
                        self.selection.clear();
                        actions.push(Action::SelectionChanged);
                    }
                    self.path_editor.end();
                }
            }
        }
    }
}

fn within(pt: Point, x: f64, y: f64, tolerance: f64) -> bool {
    let dx = pt.x - x;
    let dy = pt.y - y;
    (dx * dx + dy * dy).sqrt() <= tolerance
}
