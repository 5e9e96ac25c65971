//! Per-shape CSS derivation.
//!
//! Every shape becomes one absolutely positioned box. The declaration list
//! is a pure function of the shape, so a state override is expressed as the
//! declarations that differ between the base shape and the shape with the
//! override applied.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use canvas::consts::DEFAULT_FONT_SIZE;
use canvas::doc::{PartialShape, Shape, ShapeKind};

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self { property, value: value.into() }
    }
}

/// A selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {};", decl.property, decl.value)?;
        }
        write!(f, "}}")
    }
}

/// Class applied to the element generated for `shape`.
#[must_use]
pub fn class_name(shape: &Shape) -> String {
    let id = shape.id.to_string();
    format!("el-{}", &id[..8])
}

/// Length in CSS pixels with one decimal.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value:.1}px")
}

/// Full declaration list for a shape in its base form.
#[must_use]
pub fn base_declarations(shape: &Shape) -> Vec<Declaration> {
    let mut out = vec![
        Declaration::new("position", "absolute"),
        Declaration::new("left", px(shape.x)),
        Declaration::new("top", px(shape.y)),
        Declaration::new("width", px(shape.width)),
        Declaration::new("height", px(shape.height)),
    ];
    if shape.is_text() {
        out.push(Declaration::new("background-color", "transparent"));
        out.push(Declaration::new("color", shape.fill.as_str()));
    } else {
        out.push(Declaration::new("background-color", shape.fill.as_str()));
    }
    out.push(Declaration::new("transform", format!("rotate({}deg)", shape.rotation)));
    out.push(Declaration::new("box-sizing", "border-box"));
    out.push(Declaration::new("transition", "all 0.2s ease-in-out"));

    match &shape.kind {
        ShapeKind::Rect { corner_radius: Some(r) } if r.abs() > f64::EPSILON => {
            out.push(Declaration::new("border-radius", format!("{r}px")));
        }
        ShapeKind::Rect { .. } => {}
        ShapeKind::Ellipse => out.push(Declaration::new("border-radius", "50%")),
        ShapeKind::Text { font_size, .. } => {
            let size = font_size.unwrap_or(DEFAULT_FONT_SIZE);
            out.push(Declaration::new("font-size", format!("{size}px")));
            out.push(Declaration::new("display", "flex"));
            out.push(Declaration::new("align-items", "center"));
        }
    }
    out
}

/// Declarations that change when `update` is applied to `shape`.
///
/// Fields that do not apply to the shape's kind, fields equal to the base
/// value, and non-visual fields (text content) produce nothing.
#[must_use]
pub fn override_declarations(shape: &Shape, update: &PartialShape) -> Vec<Declaration> {
    let base = base_declarations(shape);
    base_declarations(&update.applied(shape))
        .into_iter()
        .filter(|decl| !base.contains(decl))
        .collect()
}
