//! Selection: the set of selected shape indices.
//!
//! Indices are stable within a session but shift when a shape is removed,
//! so the engine forwards [`crate::shape::StoreEvent::ItemRemoved`] here
//! and the set re-indexes itself.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

/// A set of selected shape indices. Insertion order is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of selected shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.indices.iter().copied().collect()
    }

    /// Replace the selection with just `index`.
    pub fn replace(&mut self, index: usize) {
        self.indices.clear();
        self.indices.insert(index);
    }

    /// Toggle membership of `index` (additive selection).
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Re-index after the shape at `removed` was deleted: entries equal to
    /// it drop out, entries above it shift down by one.
    pub fn reindex_removed(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter_map(|&i| match i.cmp(&removed) {
                std::cmp::Ordering::Less => Some(i),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some(i - 1),
            })
            .collect();
    }
}
