//! Canonical intermediate representation of an exported shape subset.
//!
//! The IR is `{ elements, states }`: the exported shapes translated so the
//! subset's bounding box starts at the origin, plus the owning component's
//! named states. Position overrides inside the states are translated by the
//! same offset so they stay consistent with the elements they target.
//!
//! The JSON form is the stable interchange format and the output of the `ir`
//! target.

#[cfg(test)]
#[path = "ir_test.rs"]
mod ir_test;

use canvas::doc::Shape;
use canvas::overlay::ComponentState;
use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// Normalized shapes plus the states that apply to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ir {
    pub elements: Vec<Shape>,
    #[serde(default)]
    pub states: Vec<ComponentState>,
}

impl Ir {
    /// Build an IR from absolute canvas shapes, normalizing to the origin.
    #[must_use]
    pub fn new(shapes: &[Shape], states: &[ComponentState]) -> Self {
        let (dx, dy) = origin(shapes);
        let elements = shapes
            .iter()
            .map(|s| Shape { x: s.x - dx, y: s.y - dy, ..s.clone() })
            .collect();
        let states = states
            .iter()
            .map(|state| {
                let mut state = state.clone();
                for update in state.overrides.values_mut() {
                    if let Some(x) = update.x.as_mut() {
                        *x -= dx;
                    }
                    if let Some(y) = update.y.as_mut() {
                        *y -= dy;
                    }
                }
                state
            })
            .collect();
        Self { elements, states }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Far corner of the subset: `(max(x + width), max(y + height))`.
    ///
    /// Zero for an empty IR.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        self.elements.iter().fold((0.0_f64, 0.0_f64), |(w, h), s| {
            (w.max(s.x + s.width), h.max(s.y + s.height))
        })
    }

    /// States toggled by a container class, i.e. everything except `hover`.
    pub fn custom_states(&self) -> impl Iterator<Item = &ComponentState> {
        self.states.iter().filter(|s| !s.name.is_hover())
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CodegenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode IR JSON. Elements are taken as-is; no re-normalization.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Json`] for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Minimum `x` and minimum `y` across `shapes`, `(0, 0)` when empty.
fn origin(shapes: &[Shape]) -> (f64, f64) {
    if shapes.is_empty() {
        return (0.0, 0.0);
    }
    shapes.iter().fold((f64::INFINITY, f64::INFINITY), |(x, y), s| (x.min(s.x), y.min(s.y)))
}
