//! Document model: shapes, their transforms, and the in-memory store.
//!
//! This module defines the closed set of shape variants that can live on
//! the canvas (`ShapeKind`), the per-shape affine transform
//! (`AffineTransform`), a sparse-update type for incremental edits
//! (`PartialShape`), and the runtime store that owns all live shapes
//! (`ShapeStore`).
//!
//! The store is a flat list; a shape's index in the list is its z-order
//! (index 0 draws first, the last index is topmost). Layers and groups
//! hold their children by id, not by ownership — every shape lives in the
//! flat list and points back at its container through `parent`. Mutations
//! record [`StoreEvent`]s in an internal queue which the engine drains and
//! forwards to index-holding consumers (selection, path editor).

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{TEXT_ADVANCE_EM, TEXT_LINE_EM};
use crate::transform;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// A bezier control handle position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub x: f64,
    pub y: f64,
}

impl Handle {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One anchor point of a path, with optional bezier handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Anchor x in canvas coordinates.
    pub x: f64,
    /// Anchor y in canvas coordinates.
    pub y: f64,
    /// Control handle on the incoming curve segment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Handle>,
    /// Control handle on the outgoing curve segment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Handle>,
    /// True once the user has split the handle pair; mirroring stops.
    #[serde(default)]
    pub broken: bool,
}

impl PathPoint {
    /// A bare anchor with no handles.
    #[must_use]
    pub fn anchor(x: f64, y: f64) -> Self {
        Self { x, y, handle_in: None, handle_out: None, broken: false }
    }
}

/// The geometry of a shape. A closed tagged union: every consumer matches
/// exhaustively, so a shape can never be missing a geometry field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle; width and height are non-negative.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Ellipse described by center and per-axis radii (non-negative).
    Ellipse { center_x: f64, center_y: f64, radius_x: f64, radius_y: f64 },
    /// Bezier path. A live path always has at least two points; `closed`
    /// requires at least three.
    Path { points: Vec<PathPoint>, closed: bool },
    /// A run of text anchored at its top-left corner.
    Text {
        x: f64,
        y: f64,
        content: String,
        font_family: String,
        font_size: f64,
        color: String,
        opacity: f64,
    },
    /// A named layer holding child shapes by id.
    Layer { name: String, children: Vec<ShapeId> },
    /// A named group holding child shapes by id.
    Group { name: String, children: Vec<ShapeId> },
}

impl ShapeKind {
    /// Whether this kind is a container (layer or group). Containers are
    /// managed through the layer panel and are never hit directly on
    /// canvas.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Layer { .. } | Self::Group { .. })
    }
}

/// Per-shape affine transform.
///
/// The origin is the transform pivot, expressed as a 0..1 fraction of the
/// shape's untransformed bounding box (0.5, 0.5 = center). Rotation is in
/// degrees, applied after scaling; translation is applied last, in canvas
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffineTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_deg: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            origin_x: 0.5,
            origin_y: 0.5,
        }
    }
}

impl AffineTransform {
    /// Whether this transform leaves geometry untouched (translation is
    /// allowed; rotation and scaling are not).
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        self.rotate_deg == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

/// An axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest bounds covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width).max(other.x + other.width);
        let y1 = (self.y + self.height).max(other.y + other.height);
        Bounds::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// A shape as stored in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier; stable across reordering and serialization.
    pub id: ShapeId,
    /// Containing layer or group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ShapeId>,
    /// Geometry variant.
    pub kind: ShapeKind,
    /// Affine transform applied on top of the geometry.
    #[serde(default)]
    pub transform: AffineTransform,
    /// Stroke color as a CSS color string.
    #[serde(default = "default_stroke")]
    pub stroke: String,
    /// Fill color as a CSS color string.
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Stroke width in canvas units.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Locked shapes select but refuse edits.
    #[serde(default)]
    pub locked: bool,
}

fn default_stroke() -> String {
    "#1F1A17".to_owned()
}

fn default_fill() -> String {
    "#D94B4B".to_owned()
}

fn default_stroke_width() -> f64 {
    1.0
}

impl Shape {
    /// A new shape with a fresh id, default styles, and identity transform.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent: None,
            kind,
            transform: AffineTransform::default(),
            stroke: default_stroke(),
            fill: default_fill(),
            stroke_width: default_stroke_width(),
            locked: false,
        }
    }
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialShape {
    /// Replacement geometry, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    /// New transform, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<AffineTransform>,
    /// New stroke color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// New stroke width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// New locked flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

/// A change notification recorded by the store.
///
/// Indices refer to the store state at the moment the event was recorded;
/// consumers processing an `ItemRemoved` must shift their own indices
/// before interpreting later events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The shape at this index changed in place.
    ItemModified(usize),
    /// The shape at this index was removed; higher indices shifted down.
    ItemRemoved(usize),
    /// The whole document was cleared.
    ItemsCleared,
}

/// In-memory store of shapes. Index order is z-order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    events: Vec<StoreEvent>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shape at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// All shapes in z-order (bottom first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Index of the shape with the given id.
    #[must_use]
    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == *id)
    }

    /// Drain and return all pending change events.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Mutations ---

    /// Append a shape at the top of the z-order; returns its index.
    pub fn add(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Remove the shape at `index`, returning it.
    ///
    /// The removed shape's id is pruned from its parent's child list, and
    /// any children it held are handed to its own parent (delete a group,
    /// keep its members). Out of range → `None`.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);
        if let Some(parent_id) = removed.parent {
            self.prune_child(&parent_id, &removed.id);
        }
        if let ShapeKind::Layer { ref children, .. } | ShapeKind::Group { ref children, .. } =
            removed.kind
        {
            let orphans = children.clone();
            for child_id in &orphans {
                if let Some(ci) = self.index_of(child_id) {
                    self.shapes[ci].parent = removed.parent;
                }
                if let Some(grandparent) = removed.parent {
                    self.push_child(&grandparent, child_id);
                }
            }
        }
        self.events.push(StoreEvent::ItemRemoved(index));
        Some(removed)
    }

    /// Remove several shapes at once. Indices are deduplicated and
    /// processed in descending order so earlier removals don't shift the
    /// rest.
    pub fn delete_many(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for index in sorted.into_iter().rev() {
            self.remove(index);
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.events.push(StoreEvent::ItemsCleared);
    }

    /// Apply a sparse update to the shape at `index`. Out of range → no-op.
    pub fn update(&mut self, index: usize, partial: &PartialShape) {
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        if let Some(ref kind) = partial.kind {
            shape.kind = kind.clone();
        }
        if let Some(t) = partial.transform {
            shape.transform = t;
        }
        if let Some(ref stroke) = partial.stroke {
            shape.stroke = stroke.clone();
        }
        if let Some(ref fill) = partial.fill {
            shape.fill = fill.clone();
        }
        if let Some(w) = partial.stroke_width {
            shape.stroke_width = w.max(0.0);
        }
        if let Some(locked) = partial.locked {
            shape.locked = locked;
        }
        self.events.push(StoreEvent::ItemModified(index));
    }

    /// Replace the shape's transform. Out of range → no-op.
    pub fn set_transform(&mut self, index: usize, transform: AffineTransform) {
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.transform = transform;
            self.events.push(StoreEvent::ItemModified(index));
        }
    }

    /// The shape's transform, if in range.
    #[must_use]
    pub fn transform(&self, index: usize) -> Option<AffineTransform> {
        self.shapes.get(index).map(|s| s.transform)
    }

    /// Move a shape to a new z-position. Both indices must be in range.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.shapes.len() || to >= self.shapes.len() || from == to {
            return;
        }
        let shape = self.shapes.remove(from);
        self.shapes.insert(to, shape);
        self.events.push(StoreEvent::ItemModified(to));
    }

    /// Duplicate the shapes at `indices`, appending the copies at the top
    /// of the z-order. Containers are skipped (duplicating a group through
    /// the canvas is not supported; the layer panel dissolves to members
    /// first). Returns the indices of the new copies.
    pub fn duplicate_many(&mut self, indices: &[usize]) -> Vec<usize> {
        let mut created = Vec::new();
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for index in sorted {
            let Some(original) = self.shapes.get(index) else {
                continue;
            };
            if original.kind.is_container() {
                continue;
            }
            let mut copy = original.clone();
            copy.id = Uuid::new_v4();
            if let Some(parent_id) = copy.parent {
                let child_id = copy.id;
                self.shapes.push(copy);
                self.push_child(&parent_id, &child_id);
            } else {
                self.shapes.push(copy);
            }
            created.push(self.shapes.len() - 1);
        }
        created
    }

    /// Group the shapes at `indices` under a new group appended at the top
    /// of the z-order. Containers and out-of-range indices are skipped;
    /// grouping fewer than two shapes is a no-op. Returns the group index.
    pub fn group_items(&mut self, indices: &[usize]) -> Option<usize> {
        let mut member_ids = Vec::new();
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for index in sorted {
            if let Some(shape) = self.shapes.get(index) {
                if !shape.kind.is_container() {
                    member_ids.push(shape.id);
                }
            }
        }
        if member_ids.len() < 2 {
            return None;
        }
        let group = Shape::new(ShapeKind::Group {
            name: "Group".to_owned(),
            children: member_ids.clone(),
        });
        let group_id = group.id;
        self.shapes.push(group);
        for id in &member_ids {
            if let Some(index) = self.index_of(id) {
                // Detach from any previous container first.
                if let Some(old_parent) = self.shapes[index].parent {
                    self.prune_child(&old_parent, id);
                }
                self.shapes[index].parent = Some(group_id);
            }
        }
        self.index_of(&group_id)
    }

    /// Dissolve the group at `index`: members move to the group's own
    /// parent and the group shape is removed. No-op unless the shape is a
    /// group.
    pub fn ungroup(&mut self, index: usize) {
        match self.shapes.get(index) {
            Some(shape) if matches!(shape.kind, ShapeKind::Group { .. }) => {
                self.remove(index);
            }
            _ => {}
        }
    }

    /// Move a shape into a different container (or to the root with
    /// `None`). No-ops: out-of-range index, unknown or non-container
    /// parent, or a reparent that would create a containment cycle.
    pub fn reparent(&mut self, index: usize, new_parent: Option<ShapeId>) {
        let Some(shape) = self.shapes.get(index) else {
            return;
        };
        let shape_id = shape.id;
        let old_parent = shape.parent;
        if let Some(parent_id) = new_parent {
            let Some(parent_index) = self.index_of(&parent_id) else {
                return;
            };
            if !self.shapes[parent_index].kind.is_container() {
                return;
            }
            if self.is_ancestor_or_self(&shape_id, &parent_id) {
                return;
            }
        }
        if let Some(old_id) = old_parent {
            self.prune_child(&old_id, &shape_id);
        }
        if let Some(new_id) = new_parent {
            self.push_child(&new_id, &shape_id);
        }
        self.shapes[index].parent = new_parent;
        self.events.push(StoreEvent::ItemModified(index));
    }

    /// Rename a layer or group. No-op for other kinds.
    pub fn rename(&mut self, index: usize, new_name: &str) {
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        match shape.kind {
            ShapeKind::Layer { ref mut name, .. } | ShapeKind::Group { ref mut name, .. } => {
                *name = new_name.to_owned();
                self.events.push(StoreEvent::ItemModified(index));
            }
            _ => {}
        }
    }

    /// Whether the shape or any of its ancestor containers is locked.
    #[must_use]
    pub fn is_effectively_locked(&self, index: usize) -> bool {
        let Some(shape) = self.shapes.get(index) else {
            return false;
        };
        if shape.locked {
            return true;
        }
        let mut current = shape.parent;
        // Hop limit guards against malformed parent cycles.
        let mut hops = self.shapes.len();
        while let Some(id) = current {
            if hops == 0 {
                break;
            }
            hops -= 1;
            let Some(ancestor_index) = self.index_of(&id) else {
                break;
            };
            let ancestor = &self.shapes[ancestor_index];
            if ancestor.locked {
                return true;
            }
            current = ancestor.parent;
        }
        false
    }

    // --- Geometry ---

    /// Untransformed bounds of the shape at `index`. Containers report the
    /// union of their children's geometry bounds; an empty container or a
    /// path with no points has no bounds.
    #[must_use]
    pub fn geometry_bounds(&self, index: usize) -> Option<Bounds> {
        let shape = self.shapes.get(index)?;
        match shape.kind {
            ShapeKind::Layer { ref children, .. } | ShapeKind::Group { ref children, .. } => {
                self.union_of(children, Self::geometry_bounds)
            }
            _ => kind_bounds(&shape.kind),
        }
    }

    /// Post-transform axis-aligned bounds of the shape at `index`.
    #[must_use]
    pub fn bounding_box(&self, index: usize) -> Option<Bounds> {
        let shape = self.shapes.get(index)?;
        match shape.kind {
            ShapeKind::Layer { ref children, .. } | ShapeKind::Group { ref children, .. } => {
                self.union_of(children, Self::bounding_box)
            }
            _ => {
                let geom = kind_bounds(&shape.kind)?;
                Some(transform::transformed_bounds(geom, &shape.transform))
            }
        }
    }

    /// Write a new untransformed bounding box into the shape's geometry.
    /// Width and height are clamped to be non-negative. Containers are
    /// not directly resizable, so this is a no-op for them.
    pub fn set_bounding_box(&mut self, index: usize, bounds: Bounds) {
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        let w = bounds.width.max(0.0);
        let h = bounds.height.max(0.0);
        match shape.kind {
            ShapeKind::Rect { ref mut x, ref mut y, ref mut width, ref mut height } => {
                *x = bounds.x;
                *y = bounds.y;
                *width = w;
                *height = h;
            }
            ShapeKind::Ellipse {
                ref mut center_x,
                ref mut center_y,
                ref mut radius_x,
                ref mut radius_y,
            } => {
                *center_x = bounds.x + w / 2.0;
                *center_y = bounds.y + h / 2.0;
                *radius_x = w / 2.0;
                *radius_y = h / 2.0;
            }
            ShapeKind::Path { ref mut points, .. } => {
                let Some(old) = points_bounds(points) else {
                    return;
                };
                fit_points(points, old, Bounds::new(bounds.x, bounds.y, w, h));
            }
            ShapeKind::Text { ref mut x, ref mut y, .. } => {
                *x = bounds.x;
                *y = bounds.y;
            }
            ShapeKind::Layer { .. } | ShapeKind::Group { .. } => return,
        }
        self.events.push(StoreEvent::ItemModified(index));
    }

    /// The points of the path at `index`, or `None` for other kinds.
    #[must_use]
    pub fn path_points(&self, index: usize) -> Option<&[PathPoint]> {
        match self.shapes.get(index)?.kind {
            ShapeKind::Path { ref points, .. } => Some(points),
            _ => None,
        }
    }

    /// Whether the path at `index` is closed. `None` for other kinds.
    #[must_use]
    pub fn path_closed(&self, index: usize) -> Option<bool> {
        match self.shapes.get(index)?.kind {
            ShapeKind::Path { closed, .. } => Some(closed),
            _ => None,
        }
    }

    /// Mutate a path's points and closed flag through a single model
    /// update. All path edits route through here so a bracketed gesture
    /// lands as one modification. No-op unless the shape is a path.
    pub fn modify_path<F>(&mut self, index: usize, edit: F)
    where
        F: FnOnce(&mut Vec<PathPoint>, &mut bool),
    {
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        if let ShapeKind::Path { ref mut points, ref mut closed } = shape.kind {
            edit(points, closed);
            self.events.push(StoreEvent::ItemModified(index));
        }
    }

    // --- Internal helpers ---

    fn union_of<F>(&self, children: &[ShapeId], bounds_of: F) -> Option<Bounds>
    where
        F: Fn(&Self, usize) -> Option<Bounds>,
    {
        let mut acc: Option<Bounds> = None;
        for id in children {
            if let Some(index) = self.index_of(id) {
                if let Some(b) = bounds_of(self, index) {
                    acc = Some(match acc {
                        Some(prev) => prev.union(&b),
                        None => b,
                    });
                }
            }
        }
        acc
    }

    fn prune_child(&mut self, parent_id: &ShapeId, child_id: &ShapeId) {
        if let Some(parent_index) = self.index_of(parent_id) {
            if let ShapeKind::Layer { ref mut children, .. }
            | ShapeKind::Group { ref mut children, .. } = self.shapes[parent_index].kind
            {
                children.retain(|c| c != child_id);
            }
        }
    }

    fn push_child(&mut self, parent_id: &ShapeId, child_id: &ShapeId) {
        if let Some(parent_index) = self.index_of(parent_id) {
            if let ShapeKind::Layer { ref mut children, .. }
            | ShapeKind::Group { ref mut children, .. } = self.shapes[parent_index].kind
            {
                if !children.contains(child_id) {
                    children.push(*child_id);
                }
            }
        }
    }

    /// Whether `candidate` is `id` itself or one of its descendants.
    fn is_ancestor_or_self(&self, id: &ShapeId, candidate: &ShapeId) -> bool {
        if id == candidate {
            return true;
        }
        let mut current = self.index_of(candidate).and_then(|i| self.shapes[i].parent);
        let mut hops = self.shapes.len();
        while let Some(parent_id) = current {
            if hops == 0 {
                return false;
            }
            hops -= 1;
            if parent_id == *id {
                return true;
            }
            current = self.index_of(&parent_id).and_then(|i| self.shapes[i].parent);
        }
        false
    }
}

/// Untransformed bounds for a non-container kind. Paths include handle
/// positions since the curve stays within the hull of anchors and handles.
#[must_use]
pub fn kind_bounds(kind: &ShapeKind) -> Option<Bounds> {
    match *kind {
        ShapeKind::Rect { x, y, width, height } => Some(Bounds::new(x, y, width, height)),
        ShapeKind::Ellipse { center_x, center_y, radius_x, radius_y } => Some(Bounds::new(
            center_x - radius_x,
            center_y - radius_y,
            radius_x * 2.0,
            radius_y * 2.0,
        )),
        ShapeKind::Path { ref points, .. } => points_bounds(points),
        ShapeKind::Text { x, y, ref content, font_size, .. } => {
            #[allow(clippy::cast_precision_loss)]
            let advance = content.chars().count() as f64;
            Some(Bounds::new(
                x,
                y,
                advance * font_size * TEXT_ADVANCE_EM,
                font_size * TEXT_LINE_EM,
            ))
        }
        ShapeKind::Layer { .. } | ShapeKind::Group { .. } => None,
    }
}

fn points_bounds(points: &[PathPoint]) -> Option<Bounds> {
    let first = points.first()?;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;
    let mut grow = |x: f64, y: f64| {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };
    for p in points {
        grow(p.x, p.y);
        if let Some(h) = p.handle_in {
            grow(h.x, h.y);
        }
        if let Some(h) = p.handle_out {
            grow(h.x, h.y);
        }
    }
    Some(Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Rescale path points (anchors and handles) from `old` bounds into `new`.
/// A degenerate old axis (zero extent) translates instead of scaling.
fn fit_points(points: &mut [PathPoint], old: Bounds, new: Bounds) {
    let sx = if old.width > 0.0 { new.width / old.width } else { 1.0 };
    let sy = if old.height > 0.0 { new.height / old.height } else { 1.0 };
    let map = |x: f64, y: f64| ((x - old.x) * sx + new.x, (y - old.y) * sy + new.y);
    for p in points.iter_mut() {
        let (x, y) = map(p.x, p.y);
        p.x = x;
        p.y = y;
        if let Some(ref mut h) = p.handle_in {
            let (hx, hy) = map(h.x, h.y);
            h.x = hx;
            h.y = hy;
        }
        if let Some(ref mut h) = p.handle_out {
            let (hx, hy) = map(h.x, h.y);
            h.x = hx;
            h.y = hy;
        }
    }
}
