//! Export surface: pick a subset of the scene, then emit or preview it.
//!
//! [`ExportSet::collect`] resolves a scope against the scene into a
//! normalized [`Ir`], a component name and a preview id. [`export`] runs a
//! target over it and never fails; every error becomes a placeholder
//! comment.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use canvas::doc::{Shape, ShapeId};
use canvas::overlay::Overlay;

use crate::ir::Ir;
use crate::naming;
use crate::stylesheet::{self, Stylesheet};
use crate::targets::Registry;

/// Output for an empty subset, whatever the target.
pub const EMPTY_EXPORT: &str = "// No elements to export. Add some elements to the canvas.";

/// Preview id used when the subset is not a single grouped component.
pub const SCENE_PREVIEW_ID: &str = "canvas-preview";

/// Which shapes an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Every shape, no states.
    Scene,
    /// The component containing this shape with its states, or the shape
    /// alone when it is ungrouped.
    Selection(ShapeId),
}

/// A resolved export subset.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSet {
    pub ir: Ir,
    pub name: String,
    pub preview_id: String,
}

impl ExportSet {
    /// Resolve `scope` against the scene.
    ///
    /// A selection naming an unknown shape yields an empty set.
    #[must_use]
    pub fn collect(shapes: &[Shape], overlay: &Overlay, scope: ExportScope) -> Self {
        match scope {
            ExportScope::Scene => Self {
                ir: Ir::new(shapes, &[]),
                name: naming::SCENE_COMPONENT_NAME.to_string(),
                preview_id: SCENE_PREVIEW_ID.to_string(),
            },
            ExportScope::Selection(id) => {
                let Some(selected) = shapes.iter().find(|s| s.id == id) else {
                    tracing::debug!(%id, "export selection not found");
                    return Self {
                        ir: Ir::default(),
                        name: naming::SCENE_COMPONENT_NAME.to_string(),
                        preview_id: SCENE_PREVIEW_ID.to_string(),
                    };
                };
                let members: Vec<Shape> = shapes.iter().filter(|s| selected.same_component(s)).cloned().collect();
                let (states, preview_id) = match selected.group_id {
                    Some(group) => (overlay.states(group), group.to_string()),
                    None => (&[][..], SCENE_PREVIEW_ID.to_string()),
                };
                Self { name: naming::selection_name(&members), ir: Ir::new(&members, states), preview_id }
            }
        }
    }

    /// Scope class for [`Self::preview_stylesheet`].
    #[must_use]
    pub fn preview_scope_class(&self) -> String {
        stylesheet::preview_scope_class(&self.preview_id)
    }

    /// Stylesheet for live preview, nested under [`Self::preview_scope_class`].
    #[must_use]
    pub fn preview_stylesheet(&self) -> Stylesheet {
        Stylesheet::preview(&self.ir, &self.preview_scope_class())
    }
}

/// Run `target` over `set`.
///
/// Empty sets produce [`EMPTY_EXPORT`]; unknown or unimplemented targets
/// produce a placeholder comment naming the gap.
#[must_use]
pub fn export(registry: &Registry, set: &ExportSet, target: &str) -> String {
    if set.ir.is_empty() {
        return EMPTY_EXPORT.to_string();
    }
    match registry.emit(target, &set.ir, &set.name) {
        Ok(code) => code,
        Err(err) => {
            tracing::warn!(code = err.error_code(), %err, "export fell back to placeholder");
            err.placeholder()
        }
    }
}
