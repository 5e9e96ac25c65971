//! End-to-end editing session driven through the public engine API.

use canvas::camera::Point;
use canvas::doc::{Property, PropertyValue};
use canvas::engine::{Action, EngineConfig, EngineCore};
use canvas::input::{Button, Key, Modifiers};
use canvas::library::{self, Primitive};
use canvas::overlay::ActiveState;
use canvas::scene::{SceneDocument, SceneModel};

fn mods() -> Modifiers {
    Modifiers::default()
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Modifiers::default() }
}

#[test]
fn compose_button_with_hover_state_then_delete_and_undo() {
    let mut engine = EngineCore::new(EngineConfig::default());
    engine.add_preset(&library::preset("Button").unwrap());
    engine.add_shape(Primitive::Ellipse);

    // Grab the button body at (160, 105) and drag it 40px right.
    engine.on_pointer_down(Point::new(160.0, 105.0), Button::Primary, mods());
    for step in 1..=8 {
        engine.on_pointer_move(Point::new(160.0 + f64::from(step) * 5.0, 105.0), mods());
    }
    let up = engine.on_pointer_up(Point::new(200.0, 105.0), Button::Primary, mods());
    assert_eq!(up, vec![Action::SceneChanged]);

    let body = engine.selected_shape().unwrap().clone();
    assert_eq!(body.x, 190.0);
    let group = body.group_id.unwrap();
    assert!(engine.scene.members(group).all(|s| s.x >= 190.0));

    engine.add_state("Hover").unwrap();
    engine.update_selected_property(Property::Fill, PropertyValue::Text("#1d4ed8".into()));
    assert_eq!(engine.scene.overlay().states(group).len(), 1);

    engine.on_key_down(&Key("Delete".into()), mods());
    assert!(engine.scene.members(group).next().is_none());
    assert!(engine.scene.overlay().component(group).is_none());
    assert_eq!(engine.scene.shapes().len(), 1);

    engine.on_key_down(&Key("z".into()), ctrl());
    assert_eq!(engine.scene.members(group).count(), 2);
    let hover = ActiveState::from_name("hover").unwrap();
    assert_eq!(
        engine.scene.resolve_display_value(body.id, Property::Fill, &hover),
        Some(PropertyValue::Text("#1d4ed8".into()))
    );
}

#[test]
fn saved_document_reloads_into_fresh_history() {
    let mut engine = EngineCore::new(EngineConfig::default());
    engine.add_preset(&library::preset("User Profile").unwrap());
    engine.add_state("active").unwrap();
    engine.update_selected_property(Property::Width, PropertyValue::Number(64.0));

    let json = serde_json::to_string_pretty(&engine.scene.to_document()).unwrap();
    let doc: SceneDocument = serde_json::from_str(&json).unwrap();
    let scene = SceneModel::from_document(doc);

    assert_eq!(scene.shapes(), engine.scene.shapes());
    assert_eq!(scene.overlay(), engine.scene.overlay());
    assert!(!scene.can_undo());
}
