//! Transform a Figma file payload into scene shapes.
//!
//! Only the first page is read. Rectangles, ellipses and text nodes become
//! shapes; every other node type is skipped but its children are still
//! visited. `GROUP` and `FRAME` nodes open a fresh group id for their whole
//! subtree. The result is translated so its bounding-box origin sits at
//! [`IMPORT_PADDING`] on both axes.

#[cfg(test)]
#[path = "figma_test.rs"]
mod figma_test;

use serde::Deserialize;
use uuid::Uuid;

use crate::consts::{DEFAULT_IMPORT_FILL, IMPORT_PADDING};
use crate::doc::{GroupId, Shape, ShapeKind};
use crate::import::ImportError;

/// Top level of a Figma `GET /v1/files/:key` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaFile {
    pub document: FigmaNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Option<Vec<FigmaNode>>,
    #[serde(default)]
    pub absolute_bounding_box: Option<FigmaBox>,
    #[serde(default)]
    pub fills: Vec<FigmaPaint>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub style: Option<FigmaTypeStyle>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FigmaBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigmaPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default)]
    pub color: Option<FigmaColor>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Color channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FigmaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTypeStyle {
    #[serde(default)]
    pub font_size: Option<f64>,
}

impl FigmaColor {
    /// `#rrggbb`, alpha ignored.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FigmaNode {
    /// First visible solid paint as hex, or the import default.
    #[must_use]
    pub fn fill_hex(&self) -> String {
        self.fills
            .iter()
            .find(|p| p.paint_type == "SOLID" && p.visible != Some(false))
            .and_then(|p| p.color)
            .map_or_else(|| DEFAULT_IMPORT_FILL.to_string(), FigmaColor::to_hex)
    }

    fn opens_group(&self) -> bool {
        matches!(self.node_type.as_str(), "GROUP" | "FRAME")
    }

    fn to_shape(&self, group_id: Option<GroupId>) -> Option<Shape> {
        let kind = match self.node_type.as_str() {
            "RECTANGLE" => ShapeKind::Rect { corner_radius: self.corner_radius },
            "ELLIPSE" => ShapeKind::Ellipse,
            "TEXT" => ShapeKind::Text {
                text: self.characters.clone().unwrap_or_default(),
                font_size: self.style.as_ref().and_then(|s| s.font_size),
            },
            _ => return None,
        };
        let bbox = self.absolute_bounding_box?;
        Some(Shape {
            id: Uuid::new_v4(),
            kind,
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
            rotation: self.rotation.unwrap_or(0.0),
            fill: self.fill_hex(),
            group_id,
        })
    }
}

/// Transform a raw Figma file JSON payload.
///
/// # Errors
///
/// Fails on malformed JSON, when the first page has no children, and when
/// no compatible node is found.
pub fn import_file_json(json: &str) -> Result<Vec<Shape>, ImportError> {
    let file: FigmaFile = serde_json::from_str(json)?;
    import_file(&file)
}

/// Transform the first page of a parsed Figma file.
///
/// # Errors
///
/// See [`import_file_json`].
pub fn import_file(file: &FigmaFile) -> Result<Vec<Shape>, ImportError> {
    let nodes = file
        .document
        .children
        .as_ref()
        .and_then(|pages| pages.first())
        .and_then(|page| page.children.as_ref())
        .ok_or(ImportError::NoNodes)?;

    let shapes = transform_nodes(nodes);
    if shapes.is_empty() {
        tracing::warn!("figma payload had no compatible nodes");
        return Err(ImportError::NoCompatibleNodes);
    }
    tracing::debug!(count = shapes.len(), "figma nodes transformed");
    Ok(shapes)
}

/// Flatten `nodes` into shapes in document order, normalized to the padded
/// origin. Returns an empty list when nothing is compatible.
#[must_use]
pub fn transform_nodes(nodes: &[FigmaNode]) -> Vec<Shape> {
    let mut out = Vec::new();
    for node in nodes {
        traverse(node, None, &mut out);
    }

    let min_x = out.iter().map(|s| s.x).fold(f64::INFINITY, f64::min);
    let min_y = out.iter().map(|s| s.y).fold(f64::INFINITY, f64::min);
    for shape in &mut out {
        shape.x = shape.x - min_x + IMPORT_PADDING;
        shape.y = shape.y - min_y + IMPORT_PADDING;
    }
    out
}

fn traverse(node: &FigmaNode, inherited: Option<GroupId>, out: &mut Vec<Shape>) {
    let group_id = if node.opens_group() { Some(Uuid::new_v4()) } else { inherited };
    if let Some(shape) = node.to_shape(group_id) {
        out.push(shape);
    }
    for child in node.children.iter().flatten() {
        traverse(child, group_id, out);
    }
}
