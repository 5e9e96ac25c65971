//! Built-in shape templates: default primitives and component presets.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use rand::Rng;
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{DEFAULT_FONT_SIZE, INSERT_ORIGIN_X, INSERT_ORIGIN_Y};
use crate::doc::{Shape, ShapeKind};
use crate::import::ShapeDescriptor;

/// A primitive the user can add from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Rect,
    Ellipse,
    Text,
}

/// Build a new ungrouped primitive at the insertion origin with a random
/// pastel fill.
pub fn default_shape(primitive: Primitive, rng: &mut impl Rng) -> Shape {
    let (kind, width, height) = match primitive {
        Primitive::Rect => (ShapeKind::Rect { corner_radius: Some(0.0) }, 100.0, 60.0),
        Primitive::Ellipse => (ShapeKind::Ellipse, 80.0, 80.0),
        Primitive::Text => (
            ShapeKind::Text { text: "Hello World".into(), font_size: Some(DEFAULT_FONT_SIZE) },
            120.0,
            24.0,
        ),
    };
    let hue: f64 = rng.random_range(0.0..360.0);
    Shape {
        id: Uuid::new_v4(),
        kind,
        x: INSERT_ORIGIN_X,
        y: INSERT_ORIGIN_Y,
        width,
        height,
        rotation: 0.0,
        fill: format!("hsl({hue:.0}, 70%, 70%)"),
        group_id: None,
    }
}

/// A named multi-shape component template.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub parts: Vec<ShapeDescriptor>,
}

impl Preset {
    /// Instantiate as a new component at the insertion origin. All parts
    /// share one fresh group id.
    #[must_use]
    pub fn instantiate(&self) -> Vec<Shape> {
        let group = Uuid::new_v4();
        let origin = Point::new(INSERT_ORIGIN_X, INSERT_ORIGIN_Y);
        self.parts.iter().cloned().map(|part| part.into_shape(origin, Some(group))).collect()
    }
}

fn part(kind: ShapeKind, x: f64, y: f64, width: f64, height: f64, fill: &str) -> ShapeDescriptor {
    ShapeDescriptor { kind, x, y, width, height, rotation: 0.0, fill: fill.into() }
}

fn label(text: &str, font_size: f64) -> ShapeKind {
    ShapeKind::Text { text: text.into(), font_size: Some(font_size) }
}

/// All built-in presets, in toolbar order.
#[must_use]
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Button",
            parts: vec![
                part(ShapeKind::Rect { corner_radius: Some(8.0) }, 0.0, 0.0, 120.0, 40.0, "#3b82f6"),
                part(label("Click Me", 16.0), 25.0, 10.0, 70.0, 20.0, "#ffffff"),
            ],
        },
        Preset {
            name: "User Profile",
            parts: vec![
                part(ShapeKind::Ellipse, 0.0, 0.0, 50.0, 50.0, "#9ca3af"),
                part(label("User Name", 14.0), 60.0, 8.0, 80.0, 18.0, "#e5e7eb"),
                part(label("@username", 12.0), 60.0, 28.0, 80.0, 16.0, "#6b7281"),
            ],
        },
    ]
}

/// Look up a preset by name, ignoring case.
#[must_use]
pub fn preset(name: &str) -> Option<Preset> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
