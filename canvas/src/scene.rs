//! Scene model: the authoritative shape list and state overlay.
//!
//! Shapes and overlay live in two independent [`History`] tracks. Every
//! mutation goes through this type so the cross-entity rules hold:
//!
//! - Components are deleted atomically.
//! - Overlay entries never outlive their component (pruned on every shape
//!   write, committed to the overlay track as its own non-coalesced entry).
//! - Undo/redo step both tracks together.
//!
//! Property edits are routed by an explicit [`ActiveState`] argument: a named
//! state plus a grouped shape writes an override, anything else writes the
//! base shape.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::doc::{GroupId, PartialShape, Property, PropertyValue, Shape, ShapeId};
use crate::history::History;
use crate::overlay::{ActiveState, Overlay, StateError, StateName};

/// How a shape write enters history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Append a new undo step.
    Commit,
    /// Intermediate gesture frame; folded into one step on the next commit.
    Coalesce,
}

/// On-disk form of a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub overlay: Overlay,
}

/// Shapes plus overlay, each with its own undo track.
#[derive(Debug, Clone)]
pub struct SceneModel {
    shapes: History<Vec<Shape>>,
    overlay: History<Overlay>,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: History::new(Vec::new()), overlay: History::new(Overlay::new()) }
    }

    /// Start a fresh history from a saved document. Overlay entries that do
    /// not match the document's components are dropped.
    #[must_use]
    pub fn from_document(doc: SceneDocument) -> Self {
        let overlay = doc.overlay.pruned(&doc.shapes).unwrap_or(doc.overlay);
        Self { shapes: History::new(doc.shapes), overlay: History::new(overlay) }
    }

    /// Snapshot for saving. Overlay entries orphaned by a lockstep undo are
    /// left out.
    #[must_use]
    pub fn to_document(&self) -> SceneDocument {
        let overlay = self.overlay().pruned(self.shapes()).unwrap_or_else(|| self.overlay().clone());
        SceneDocument { shapes: self.shapes().to_vec(), overlay }
    }

    // --- Queries ---

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.shapes.current()
    }

    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        self.overlay.current()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes().iter().find(|s| s.id == id)
    }

    /// Shapes belonging to `group`, in paint order.
    pub fn members(&self, group: GroupId) -> impl Iterator<Item = &Shape> {
        self.shapes().iter().filter(move |s| s.group_id == Some(group))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.shapes.can_undo() || self.overlay.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.shapes.can_redo() || self.overlay.can_redo()
    }

    // --- Shape writes ---

    /// Replace the shape list with `updater(current)`.
    ///
    /// Overlay entries for components that no longer exist are pruned and
    /// committed separately. Returns `true` if either track changed.
    pub fn replace_shapes<F>(&mut self, updater: F, mode: CommitMode) -> bool
    where
        F: FnOnce(&[Shape]) -> Vec<Shape>,
    {
        let next = updater(self.shapes());
        self.set_shapes(next, mode)
    }

    /// Install `next` as the shape list. See [`SceneModel::replace_shapes`].
    pub fn set_shapes(&mut self, next: Vec<Shape>, mode: CommitMode) -> bool {
        let pruned = self.overlay().pruned(&next);
        let shapes_changed = match mode {
            CommitMode::Commit => self.shapes.commit(next),
            CommitMode::Coalesce => self.shapes.commit_coalesced(next),
        };
        let overlay_changed = pruned.is_some_and(|overlay| self.overlay.commit(overlay));
        shapes_changed || overlay_changed
    }

    /// Seal an in-progress coalesced gesture into one undo step.
    pub fn finish_gesture(&mut self) -> bool {
        if !self.shapes.is_coalescing() {
            return false;
        }
        let current = self.shapes().to_vec();
        self.shapes.commit(current)
    }

    /// Append a batch of new shapes as one undo step.
    pub fn insert_batch(&mut self, batch: Vec<Shape>) -> bool {
        if batch.is_empty() {
            return false;
        }
        let count = batch.len();
        let changed = self.replace_shapes(
            |shapes| {
                let mut next = shapes.to_vec();
                next.extend(batch);
                next
            },
            CommitMode::Commit,
        );
        tracing::debug!(count, "inserted shape batch");
        changed
    }

    /// Delete `id`, or its whole component when it is grouped.
    ///
    /// Returns the ids removed, empty if `id` is unknown.
    pub fn delete_shape(&mut self, id: ShapeId) -> Vec<ShapeId> {
        let Some(target) = self.shape(id).cloned() else {
            return Vec::new();
        };
        let (gone, kept): (Vec<Shape>, Vec<Shape>) =
            self.shapes().iter().cloned().partition(|s| target.same_component(s));
        self.set_shapes(kept, CommitMode::Commit);
        tracing::debug!(%id, group = ?target.group_id, removed = gone.len(), "deleted component");
        gone.into_iter().map(|s| s.id).collect()
    }

    /// Route a property edit to the base shape or to the active state.
    ///
    /// With a named `active` state and a grouped target, the update merges
    /// into that state's override for the shape (creating the state if
    /// needed). Otherwise the base shape is updated. Returns `true` if
    /// anything changed.
    pub fn update_shape_property(&mut self, id: ShapeId, update: &PartialShape, active: &ActiveState) -> bool {
        let Some(target) = self.shape(id) else {
            return false;
        };
        match (active.name(), target.group_id) {
            (Some(state), Some(group)) => {
                let mut overlay = self.overlay().clone();
                overlay.upsert_override(group, state, id, update);
                self.overlay.commit(overlay)
            }
            _ => self.replace_shapes(
                |shapes| {
                    shapes.iter().map(|s| if s.id == id { update.applied(s) } else { s.clone() }).collect()
                },
                CommitMode::Commit,
            ),
        }
    }

    /// Read `property` of `id` as seen under `active`.
    ///
    /// Agrees with [`SceneModel::update_shape_property`]: a value written in
    /// a state context is read back in that context, while the base value is
    /// unaffected.
    #[must_use]
    pub fn resolve_display_value(&self, id: ShapeId, property: Property, active: &ActiveState) -> Option<PropertyValue> {
        let shape = self.shape(id)?;
        if let (Some(state), Some(group)) = (active.name(), shape.group_id)
            && let Some(value) = self.overlay().override_for(group, state, id).and_then(|o| o.get(property))
        {
            return Some(value);
        }
        shape.get(property)
    }

    /// Shapes as the render surface should draw them: when a named state is
    /// active, the selected shape's component shows that state's overrides.
    #[must_use]
    pub fn display_shapes(&self, selected: Option<ShapeId>, active: &ActiveState) -> Vec<Shape> {
        let group = selected.and_then(|id| self.shape(id)).and_then(|s| s.group_id);
        let (Some(state), Some(group)) = (active.name(), group) else {
            return self.shapes().to_vec();
        };
        self.shapes()
            .iter()
            .map(|s| match self.overlay().override_for(group, state, s.id) {
                Some(over) if s.group_id == Some(group) => over.applied(s),
                _ => s.clone(),
            })
            .collect()
    }

    // --- States ---

    /// Create an empty state named `raw` on `group`.
    ///
    /// # Errors
    ///
    /// Rejects blank, reserved and duplicate names, and unknown components.
    pub fn add_state(&mut self, group: GroupId, raw: &str) -> Result<StateName, StateError> {
        let name = StateName::parse(raw)?;
        if self.members(group).next().is_none() {
            return Err(StateError::UnknownComponent(group));
        }
        let mut overlay = self.overlay().clone();
        overlay.add_state(group, name.clone())?;
        self.overlay.commit(overlay);
        tracing::debug!(%group, state = %name, "state added");
        Ok(name)
    }

    /// Remove a state and all its overrides. Returns `false` if absent.
    pub fn delete_state(&mut self, group: GroupId, name: &StateName) -> bool {
        let mut overlay = self.overlay().clone();
        if !overlay.delete_state(group, name) {
            return false;
        }
        self.overlay.commit(overlay);
        tracing::debug!(%group, state = %name, "state deleted");
        true
    }

    // --- History ---

    /// Step both tracks back by one. Returns `true` if either moved.
    pub fn undo(&mut self) -> bool {
        let shapes = self.shapes.undo();
        let overlay = self.overlay.undo();
        shapes || overlay
    }

    /// Step both tracks forward by one. Returns `true` if either moved.
    pub fn redo(&mut self) -> bool {
        let shapes = self.shapes.redo();
        let overlay = self.overlay.redo();
        shapes || overlay
    }
}
