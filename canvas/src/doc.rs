//! Document model: shapes, their properties, and sparse property updates.
//!
//! This module defines the atomic visual element (`Shape`) with its
//! kind-specific fields carried by `ShapeKind`, the sparse-update type used
//! both for base edits and for state overrides (`PartialShape`), and the
//! property addressing used by editors (`Property`, `PropertyValue`).
//!
//! Geometry is stored un-rotated: `x`, `y`, `width`, `height` describe the
//! box before rotation, and `rotation` (degrees, unbounded) is applied around
//! the box center only when drawing or hit-testing.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Identifier shared by all shapes of one component.
pub type GroupId = Uuid;

/// The kind of a shape, carrying only the fields relevant to that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ShapeKind {
    /// Rectangle with optionally rounded corners.
    Rect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        corner_radius: Option<f64>,
    },
    /// Ellipse inscribed within the bounding box.
    #[serde(alias = "circle")]
    Ellipse,
    /// Single line of text laid out inside the bounding box.
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
    },
}

impl ShapeKind {
    /// Lowercase kind name as used on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Ellipse => "ellipse",
            Self::Text { .. } => "text",
        }
    }
}

/// A shape as stored in the scene and in the IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: ShapeId,
    #[serde(flatten)]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees around the box center.
    #[serde(default)]
    pub rotation: f64,
    /// CSS color string; background for boxes, text color for text.
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl Shape {
    /// Center of the un-rotated bounding box; the rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ShapeKind::Text { .. })
    }

    /// Text content for text shapes, `None` for other kinds.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Whether `other` belongs to the same component as this shape.
    ///
    /// Ungrouped shapes only share a component with themselves.
    #[must_use]
    pub fn same_component(&self, other: &Shape) -> bool {
        match self.group_id {
            Some(group) => other.group_id == Some(group),
            None => other.id == self.id,
        }
    }

    /// Read one property. Returns `None` when the property does not apply to
    /// this kind (e.g. `FontSize` on a rect) or is unset.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<PropertyValue> {
        match property {
            Property::X => Some(PropertyValue::Number(self.x)),
            Property::Y => Some(PropertyValue::Number(self.y)),
            Property::Width => Some(PropertyValue::Number(self.width)),
            Property::Height => Some(PropertyValue::Number(self.height)),
            Property::Rotation => Some(PropertyValue::Number(self.rotation)),
            Property::Fill => Some(PropertyValue::Text(self.fill.clone())),
            Property::Text => self.text().map(|t| PropertyValue::Text(t.to_string())),
            Property::FontSize => match self.kind {
                ShapeKind::Text { font_size, .. } => font_size.map(PropertyValue::Number),
                _ => None,
            },
            Property::CornerRadius => match self.kind {
                ShapeKind::Rect { corner_radius } => corner_radius.map(PropertyValue::Number),
                _ => None,
            },
        }
    }
}

/// An overridable shape property. Identity fields (`id`, `kind`, `groupId`)
/// are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Width,
    Height,
    Rotation,
    Fill,
    Text,
    FontSize,
    CornerRadius,
}

/// Value of a single property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl PropertyValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Sparse update for a shape. Only present fields are applied.
///
/// The same type is stored as a per-shape override inside a component state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

impl PartialShape {
    /// Convenience constructor for a fill-only update.
    #[must_use]
    pub fn fill(color: impl Into<String>) -> Self {
        Self { fill: Some(color.into()), ..Self::default() }
    }

    /// Build a single-property update. Values of the wrong type are ignored.
    #[must_use]
    pub fn single(property: Property, value: PropertyValue) -> Self {
        let mut partial = Self::default();
        match (property, value) {
            (Property::X, PropertyValue::Number(n)) => partial.x = Some(n),
            (Property::Y, PropertyValue::Number(n)) => partial.y = Some(n),
            (Property::Width, PropertyValue::Number(n)) => partial.width = Some(n),
            (Property::Height, PropertyValue::Number(n)) => partial.height = Some(n),
            (Property::Rotation, PropertyValue::Number(n)) => partial.rotation = Some(n),
            (Property::FontSize, PropertyValue::Number(n)) => partial.font_size = Some(n),
            (Property::CornerRadius, PropertyValue::Number(n)) => partial.corner_radius = Some(n),
            (Property::Fill, PropertyValue::Text(s)) => partial.fill = Some(s),
            (Property::Text, PropertyValue::Text(s)) => partial.text = Some(s),
            _ => {}
        }
        partial
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Read one property from the update, if present.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<PropertyValue> {
        match property {
            Property::X => self.x.map(PropertyValue::Number),
            Property::Y => self.y.map(PropertyValue::Number),
            Property::Width => self.width.map(PropertyValue::Number),
            Property::Height => self.height.map(PropertyValue::Number),
            Property::Rotation => self.rotation.map(PropertyValue::Number),
            Property::Fill => self.fill.clone().map(PropertyValue::Text),
            Property::Text => self.text.clone().map(PropertyValue::Text),
            Property::FontSize => self.font_size.map(PropertyValue::Number),
            Property::CornerRadius => self.corner_radius.map(PropertyValue::Number),
        }
    }

    /// Merge `other` on top of `self`; fields present in `other` win.
    pub fn merge(&mut self, other: &PartialShape) {
        if other.x.is_some() {
            self.x = other.x;
        }
        if other.y.is_some() {
            self.y = other.y;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        if other.fill.is_some() {
            self.fill.clone_from(&other.fill);
        }
        if other.text.is_some() {
            self.text.clone_from(&other.text);
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.corner_radius.is_some() {
            self.corner_radius = other.corner_radius;
        }
    }

    /// Apply the update to `shape`. Kind-specific fields that do not apply to
    /// the shape's kind are skipped.
    pub fn apply_to(&self, shape: &mut Shape) {
        if let Some(x) = self.x {
            shape.x = x;
        }
        if let Some(y) = self.y {
            shape.y = y;
        }
        if let Some(w) = self.width {
            shape.width = w;
        }
        if let Some(h) = self.height {
            shape.height = h;
        }
        if let Some(r) = self.rotation {
            shape.rotation = r;
        }
        if let Some(ref fill) = self.fill {
            shape.fill.clone_from(fill);
        }
        match &mut shape.kind {
            ShapeKind::Rect { corner_radius } => {
                if self.corner_radius.is_some() {
                    *corner_radius = self.corner_radius;
                }
            }
            ShapeKind::Text { text, font_size } => {
                if let Some(ref t) = self.text {
                    text.clone_from(t);
                }
                if self.font_size.is_some() {
                    *font_size = self.font_size;
                }
            }
            ShapeKind::Ellipse => {}
        }
    }

    /// Return a copy of `shape` with this update applied.
    #[must_use]
    pub fn applied(&self, shape: &Shape) -> Shape {
        let mut out = shape.clone();
        self.apply_to(&mut out);
        out
    }
}
