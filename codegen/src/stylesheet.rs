//! Stylesheets for a normalized shape subset.
//!
//! A component stylesheet has a container rule, then for each element its
//! base rule followed by one rule per state that overrides it. State rules
//! qualify the container: `hover` becomes `.container:hover`, any other
//! state `.container.<name>` so the host toggles it with a class.
//!
//! A preview stylesheet prefixes every selector with a caller-provided scope
//! class so several previews can coexist on one page.

#[cfg(test)]
#[path = "stylesheet_test.rs"]
mod stylesheet_test;

use std::fmt;

use canvas::overlay::ComponentState;

use crate::ir::Ir;
use crate::style::{self, Declaration, Rule};

/// Class carried by the generated container element.
pub const CONTAINER_CLASS: &str = "container";

/// An ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Stylesheet for a generated component file.
    #[must_use]
    pub fn component(ir: &Ir) -> Self {
        Self::build(ir, "")
    }

    /// Stylesheet with every selector nested under `.{scope_class}`.
    #[must_use]
    pub fn preview(ir: &Ir, scope_class: &str) -> Self {
        Self::build(ir, &format!(".{scope_class} "))
    }

    fn build(ir: &Ir, prefix: &str) -> Self {
        let container = format!("{prefix}.{CONTAINER_CLASS}");
        let (width, height) = ir.extent();
        let mut rules = vec![Rule {
            selector: container.clone(),
            declarations: vec![
                Declaration { property: "position", value: "relative".into() },
                Declaration { property: "width", value: style::px(width) },
                Declaration { property: "height", value: style::px(height) },
            ],
        }];

        for element in &ir.elements {
            let class = style::class_name(element);
            rules.push(Rule {
                selector: format!("{prefix}.{class}"),
                declarations: style::base_declarations(element),
            });
            for state in &ir.states {
                let Some(update) = state.overrides.get(&element.id) else {
                    continue;
                };
                let declarations = style::override_declarations(element, update);
                if declarations.is_empty() {
                    continue;
                }
                rules.push(Rule {
                    selector: format!("{} .{class}", state_selector(&container, state)),
                    declarations,
                });
            }
        }
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Container selector qualified by `state`.
fn state_selector(container: &str, state: &ComponentState) -> String {
    if state.name.is_hover() {
        format!("{container}:hover")
    } else {
        format!("{container}.{}", state.name)
    }
}

/// Preview scope class for an id: `preview-` plus its ASCII alphanumerics.
#[must_use]
pub fn preview_scope_class(id: &str) -> String {
    let clean: String = id.chars().filter(char::is_ascii_alphanumeric).collect();
    format!("preview-{clean}")
}
