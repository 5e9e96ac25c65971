//! Identifier derivation for generated components and their props.

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;

use canvas::doc::Shape;
use canvas::overlay::StateName;

/// Fallback when a selection's text sanitizes to nothing.
pub const DEFAULT_COMPONENT_NAME: &str = "MyComponent";

/// Name used for whole-scene exports.
pub const SCENE_COMPONENT_NAME: &str = "MyCanvasComponent";

/// Component name for a single selected component.
///
/// Derived from the first text shape with non-empty content; otherwise
/// [`SCENE_COMPONENT_NAME`], matching a whole-scene export.
#[must_use]
pub fn selection_name(shapes: &[Shape]) -> String {
    match shapes.iter().filter_map(Shape::text).find(|t| !t.is_empty()) {
        Some(text) => identifier(text),
        None => SCENE_COMPONENT_NAME.to_string(),
    }
}

/// Sanitize free text into a component identifier.
///
/// Drops everything but ASCII alphanumerics, strips leading digits and then
/// upper-cases the first letter. Empty results fall back to
/// [`DEFAULT_COMPONENT_NAME`].
#[must_use]
pub fn identifier(raw: &str) -> String {
    let clean: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
    let name = capitalize(clean.trim_start_matches(|c: char| c.is_ascii_digit()));
    if name.is_empty() { DEFAULT_COMPONENT_NAME.to_string() } else { name }
}

/// Boolean prop toggling a state: `is` plus the capitalized state name.
#[must_use]
pub fn prop_name(state: &StateName) -> String {
    format!("is{}", capitalize(state.as_str()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
