//! React function component target.
//!
//! Emits a TSX component whose root element carries the `container` class
//! plus one class per active custom state, driven by optional boolean props.
//! The stylesheet is appended as a commented block for the matching `.css`
//! file.

use canvas::doc::Shape;

use super::Emitter;
use crate::error::CodegenError;
use crate::ir::Ir;
use crate::naming;
use crate::style;
use crate::stylesheet::{CONTAINER_CLASS, Stylesheet};

pub struct ReactEmitter;

impl Emitter for ReactEmitter {
    fn id(&self) -> &'static str {
        "react"
    }

    fn label(&self) -> &'static str {
        "React"
    }

    fn emit(&self, ir: &Ir, name: &str) -> Result<String, CodegenError> {
        Ok(render(ir, name))
    }
}

fn render(ir: &Ir, name: &str) -> String {
    let toggles: Vec<(String, &str)> =
        ir.custom_states().map(|s| (naming::prop_name(&s.name), s.name.as_str())).collect();

    let mut out = format!("import React from 'react';\nimport './{name}.css';\n\n");

    if toggles.is_empty() {
        out.push_str(&format!("interface {name}Props {{}}\n\n"));
        out.push_str(&format!("const {name}: React.FC<{name}Props> = () => {{\n"));
        out.push_str(&format!("  const containerClasses = '{CONTAINER_CLASS}';\n\n"));
    } else {
        out.push_str(&format!("interface {name}Props {{\n"));
        for (prop, _) in &toggles {
            out.push_str(&format!("  {prop}?: boolean;\n"));
        }
        out.push_str("}\n\n");

        let props: Vec<&str> = toggles.iter().map(|(prop, _)| prop.as_str()).collect();
        out.push_str(&format!("const {name}: React.FC<{name}Props> = ({{ {} }}) => {{\n", props.join(", ")));
        out.push_str(&format!("  const containerClasses = [\n    '{CONTAINER_CLASS}',\n"));
        for (prop, class) in &toggles {
            out.push_str(&format!("    {prop} && '{class}',\n"));
        }
        out.push_str("  ].filter(Boolean).join(' ');\n\n");
    }

    out.push_str("  return (\n    <div className={containerClasses}>\n");
    for element in &ir.elements {
        out.push_str(&format!("      {}\n", element_markup(element)));
    }
    out.push_str("    </div>\n  );\n};\n\n");
    out.push_str(&format!("export default {name};\n\n"));

    out.push_str(&format!("/* In {name}.css */\n/*\n{}\n*/\n", Stylesheet::component(ir)));
    out
}

fn element_markup(shape: &Shape) -> String {
    let class = style::class_name(shape);
    let content = shape.text().map(escape_jsx).unwrap_or_default();
    format!("<div className=\"{class}\">{content}</div>")
}

/// Escape characters JSX would interpret inside element text.
fn escape_jsx(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "react_test.rs"]
mod react_test;
