//! Export of a small button component, with and without a hover state.

use canvas::doc::{PartialShape, Shape, ShapeKind};
use canvas::overlay::{Overlay, StateName};
use codegen::{ExportScope, ExportSet, Ir, Registry, export};
use uuid::Uuid;

fn button(group: Uuid) -> Vec<Shape> {
    vec![
        Shape {
            id: Uuid::new_v4(),
            kind: ShapeKind::Rect { corner_radius: None },
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 60.0,
            rotation: 0.0,
            fill: "#3b82f6".into(),
            group_id: Some(group),
        },
        Shape {
            id: Uuid::new_v4(),
            kind: ShapeKind::Text { text: "Click Me".into(), font_size: None },
            x: 25.0,
            y: 10.0,
            width: 70.0,
            height: 20.0,
            rotation: 0.0,
            fill: "#ffffff".into(),
            group_id: Some(group),
        },
    ]
}

#[test]
fn ir_export_is_already_normalized_and_stateless() {
    let group = Uuid::new_v4();
    let shapes = button(group);
    let set = ExportSet::collect(&shapes, &Overlay::new(), ExportScope::Selection(shapes[0].id));

    let json = export(&Registry::default(), &set, "ir");
    let ir = Ir::from_json(&json).unwrap();

    assert_eq!(ir.elements, shapes);
    assert!(ir.states.is_empty());
}

#[test]
fn hover_fill_override_yields_one_hover_rule() {
    let group = Uuid::new_v4();
    let shapes = button(group);
    let hover = StateName::parse("hover").unwrap();
    let mut overlay = Overlay::new();
    overlay.add_state(group, hover.clone()).unwrap();
    overlay.upsert_override(group, &hover, shapes[0].id, &PartialShape::fill("#1d4ed8"));

    let set = ExportSet::collect(&shapes, &overlay, ExportScope::Selection(shapes[0].id));
    let code = export(&Registry::default(), &set, "react");

    let hover_rules: Vec<&str> = code.split("\n\n").filter(|block| block.contains(":hover")).collect();
    assert_eq!(hover_rules.len(), 1);
    let rule = hover_rules[0];
    assert!(rule.starts_with(".container:hover .el-"));
    assert!(rule.contains("  background-color: #1d4ed8;\n}"));
    assert_eq!(rule.matches(';').count(), 1);
    assert!(code.contains("const ClickMe: React.FC<ClickMeProps> = () => {"));
}

#[test]
fn hover_state_ir_keeps_the_override() {
    let group = Uuid::new_v4();
    let shapes = button(group);
    let hover = StateName::parse("hover").unwrap();
    let mut overlay = Overlay::new();
    overlay.add_state(group, hover.clone()).unwrap();
    overlay.upsert_override(group, &hover, shapes[0].id, &PartialShape::fill("#1d4ed8"));

    let set = ExportSet::collect(&shapes, &overlay, ExportScope::Selection(shapes[1].id));
    let ir = Ir::from_json(&export(&Registry::default(), &set, "IR (JSON)")).unwrap();

    assert_eq!(ir.states.len(), 1);
    assert_eq!(ir.states[0].name.as_str(), "hover");
    assert_eq!(ir.states[0].overrides[&shapes[0].id].fill.as_deref(), Some("#1d4ed8"));
}
