//! Ingestion of shape descriptors from external producers.
//!
//! Producers (file import, generated layouts) hand the core a finished list
//! of descriptors. `materialize` validates the whole batch before assigning
//! any ids, so a rejected batch never reaches the scene.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::doc::{Shape, ShapeKind};

/// Errors surfaced to callers of the import paths. The scene is left
/// untouched whenever one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no shapes to import")]
    Empty,

    #[error("shape {index} has a non-positive extent ({width} x {height})")]
    InvalidExtent { index: usize, width: f64, height: f64 },

    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No nodes found on the first page of the Figma file.")]
    NoNodes,

    #[error("No compatible elements (rectangles, ellipses, text) were found on the first page.")]
    NoCompatibleNodes,
}

/// A shape without identity, as produced outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    #[serde(flatten)]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(alias = "fillColor")]
    pub fill: String,
}

impl ShapeDescriptor {
    /// Give the descriptor an identity, translated by `offset`.
    #[must_use]
    pub fn into_shape(self, offset: Point, group_id: Option<Uuid>) -> Shape {
        Shape {
            id: Uuid::new_v4(),
            kind: self.kind,
            x: self.x + offset.x,
            y: self.y + offset.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            fill: self.fill,
            group_id,
        }
    }
}

/// Turn a batch of descriptors into shapes ready for insertion.
///
/// Every shape gets a fresh id; a batch of more than one shape also gets one
/// shared fresh group id so it lands as a single component.
///
/// # Errors
///
/// Returns [`ImportError::Empty`] for an empty batch and
/// [`ImportError::InvalidExtent`] if any descriptor has a non-positive width
/// or height.
pub fn materialize(descriptors: Vec<ShapeDescriptor>, offset: Point) -> Result<Vec<Shape>, ImportError> {
    if descriptors.is_empty() {
        return Err(ImportError::Empty);
    }
    if let Some((index, d)) =
        descriptors.iter().enumerate().find(|(_, d)| !(d.width > 0.0 && d.height > 0.0))
    {
        tracing::warn!(index, width = d.width, height = d.height, "rejected descriptor batch");
        return Err(ImportError::InvalidExtent { index, width: d.width, height: d.height });
    }

    let group_id = (descriptors.len() > 1).then(Uuid::new_v4);
    Ok(descriptors.into_iter().map(|d| d.into_shape(offset, group_id)).collect())
}

/// Parse a JSON array of descriptors and materialize it.
///
/// # Errors
///
/// Fails on malformed JSON or any [`materialize`] error.
pub fn materialize_json(json: &str, offset: Point) -> Result<Vec<Shape>, ImportError> {
    let descriptors: Vec<ShapeDescriptor> = serde_json::from_str(json)?;
    materialize(descriptors, offset)
}
