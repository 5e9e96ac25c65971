#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::doc::ShapeKind;
use crate::geometry::{Handle, world_corners};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn no_mods() -> Modifiers {
    Modifiers::default()
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Modifiers::default() }
}

fn key(name: &str) -> Key {
    Key(name.into())
}

fn rect_at(x: f64, y: f64, group: Option<GroupId>) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Rect { corner_radius: None },
        x,
        y,
        width: 100.0,
        height: 60.0,
        rotation: 0.0,
        fill: "#3b82f6".into(),
        group_id: group,
    }
}

fn engine_with(shapes: Vec<Shape>) -> EngineCore {
    EngineCore::with_document(EngineConfig::default(), SceneDocument { shapes, ..SceneDocument::default() })
}

fn drag(engine: &mut EngineCore, from: Point, path: &[Point]) {
    engine.on_pointer_down(from, Button::Primary, no_mods());
    for p in path {
        engine.on_pointer_move(*p, no_mods());
    }
    let end = path.last().copied().unwrap_or(from);
    engine.on_pointer_up(end, Button::Primary, no_mods());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn pointer_down_on_shape_selects_it() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    let actions = engine.on_pointer_down(pt(50.0, 30.0), Button::Primary, no_mods());
    assert_eq!(actions, vec![Action::SelectionChanged(Some(r.id))]);
    assert_eq!(engine.selection(), Some(r.id));
    assert!(matches!(engine.input, InputState::Moving { .. }));
}

#[test]
fn pointer_down_on_empty_canvas_clears_selection() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    let actions = engine.on_pointer_down(pt(500.0, 500.0), Button::Primary, no_mods());
    assert_eq!(actions, vec![Action::SelectionChanged(None)]);
    assert!(engine.input.is_idle());
}

#[test]
fn pointer_down_during_gesture_does_not_deselect() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.on_pointer_down(pt(50.0, 30.0), Button::Primary, no_mods());
    let actions = engine.on_pointer_down(pt(500.0, 500.0), Button::Secondary, no_mods());
    assert!(actions.is_empty());
    assert_eq!(engine.selection(), Some(r.id));
}

#[test]
fn selecting_shape_resets_active_state_to_base() {
    let group = Uuid::new_v4();
    let r = rect_at(0.0, 0.0, Some(group));
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.active_state = ActiveState::from_name("hover").unwrap();
    let actions = engine.on_pointer_down(pt(10.0, 10.0), Button::Primary, no_mods());
    assert!(actions.contains(&Action::ActiveStateChanged(ActiveState::Base)));
    assert!(engine.active_state().is_base());
}

// =============================================================
// Move
// =============================================================

#[test]
fn drag_moves_whole_component_as_one_undo_step() {
    let group = Uuid::new_v4();
    let a = rect_at(0.0, 0.0, Some(group));
    let b = rect_at(200.0, 0.0, Some(group));
    let loose = rect_at(0.0, 300.0, None);
    let mut engine = engine_with(vec![a.clone(), b.clone(), loose.clone()]);

    drag(&mut engine, pt(50.0, 30.0), &[pt(55.0, 35.0), pt(60.0, 40.0), pt(70.0, 50.0)]);

    assert_eq!((engine.scene.shape(a.id).unwrap().x, engine.scene.shape(a.id).unwrap().y), (20.0, 20.0));
    assert_eq!(engine.scene.shape(b.id).unwrap().x, 220.0);
    assert_eq!(engine.scene.shape(loose.id).unwrap(), &loose);

    engine.undo();
    assert_eq!(engine.scene.shape(a.id).unwrap().x, 0.0);
    assert_eq!(engine.scene.shape(b.id).unwrap().x, 200.0);
    assert!(!engine.scene.can_undo());
}

#[test]
fn click_without_move_creates_no_history() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r]);
    drag(&mut engine, pt(50.0, 30.0), &[]);
    assert!(!engine.scene.can_undo());
}

#[test]
fn drag_back_to_start_creates_no_history() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r]);
    drag(&mut engine, pt(50.0, 30.0), &[pt(80.0, 30.0), pt(50.0, 30.0)]);
    assert!(!engine.scene.can_undo());
}

#[test]
fn move_respects_zoom() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.camera.zoom = 2.0;
    drag(&mut engine, pt(20.0, 20.0), &[pt(40.0, 20.0)]);
    assert_eq!(engine.scene.shape(r.id).unwrap().x, 10.0);
}

// =============================================================
// Resize and rotate
// =============================================================

#[test]
fn resize_handle_requires_selection() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.on_pointer_down(pt(100.0, 60.0), Button::Primary, no_mods());
    assert!(matches!(engine.input, InputState::Moving { .. }));
}

#[test]
fn dragging_corner_handle_resizes_selected_shape() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    drag(&mut engine, pt(100.0, 60.0), &[pt(110.0, 65.0), pt(120.0, 80.0)]);
    let resized = engine.scene.shape(r.id).unwrap();
    assert!(approx_eq(resized.width, 120.0));
    assert!(approx_eq(resized.height, 80.0));
    engine.undo();
    assert_eq!(engine.scene.shape(r.id).unwrap().width, 100.0);
}

#[test]
fn resize_below_minimum_keeps_last_valid_frame() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    drag(&mut engine, pt(100.0, 60.0), &[pt(50.0, 60.0), pt(5.0, 60.0)]);
    assert!(approx_eq(engine.scene.shape(r.id).unwrap().width, 50.0));
}

#[test]
fn rotated_resize_keeps_opposite_corner() {
    let mut r = rect_at(0.0, 0.0, None);
    r.rotation = 30.0;
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    let corners = world_corners(&r);
    let grab = corners[2];
    drag(&mut engine, grab, &[pt(grab.x + 12.0, grab.y + 7.0)]);
    let after = world_corners(engine.scene.shape(r.id).unwrap());
    assert!(approx_eq(after[0].x, corners[0].x));
    assert!(approx_eq(after[0].y, corners[0].y));
}

#[test]
fn handles_follow_base_geometry_under_a_geometry_state() {
    let r = rect_at(0.0, 0.0, Some(Uuid::new_v4()));
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    engine.add_state("wide").unwrap();
    engine.update_selected_property(Property::Width, PropertyValue::Number(200.0));

    let actions = engine.on_pointer_down(pt(100.0, 60.0), Button::Primary, no_mods());

    assert!(matches!(engine.input, InputState::Resizing { handle: Handle::BottomRight, .. }));
    assert!(actions.contains(&Action::ActiveStateChanged(ActiveState::Base)));
    engine.on_pointer_move(pt(120.0, 60.0), no_mods());
    engine.on_pointer_up(pt(120.0, 60.0), Button::Primary, no_mods());
    assert!(approx_eq(engine.scene.shape(r.id).unwrap().width, 120.0));
}

#[test]
fn rotate_handle_rotates_selected_shape() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    // Rotate handle sits at (50, -25); swing it to the right of center.
    drag(&mut engine, pt(50.0, -25.0), &[pt(105.0, 30.0)]);
    let rotated = engine.scene.shape(r.id).unwrap();
    assert!(approx_eq(rotated.rotation, 90.0));
    assert_eq!((rotated.x, rotated.width), (0.0, 100.0));
}

// =============================================================
// Pan and zoom
// =============================================================

#[test]
fn space_arms_pan_and_drag_moves_camera() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.on_key_down(&key(" "), no_mods());
    assert!(engine.ui.pan_armed);
    engine.on_pointer_down(pt(300.0, 300.0), Button::Primary, no_mods());
    let actions = engine.on_pointer_move(pt(330.0, 280.0), no_mods());
    assert_eq!(actions, vec![Action::ViewChanged]);
    assert_eq!((engine.camera.pan_x, engine.camera.pan_y), (30.0, -20.0));
    assert_eq!(engine.scene.shape(r.id).unwrap(), &r);
    assert!(!engine.scene.can_undo());
}

#[test]
fn space_click_on_shape_neither_pans_nor_selects() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.on_key_down(&key(" "), no_mods());
    assert!(engine.on_pointer_down(pt(50.0, 30.0), Button::Primary, no_mods()).is_empty());
    assert!(engine.input.is_idle());
    assert_eq!(engine.selection(), None);
    assert!(engine.on_pointer_move(pt(80.0, 10.0), no_mods()).is_empty());
    assert_eq!((engine.camera.pan_x, engine.camera.pan_y), (0.0, 0.0));
}

#[test]
fn middle_button_pans_over_shapes() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r]);
    engine.on_pointer_down(pt(50.0, 30.0), Button::Middle, no_mods());
    assert!(matches!(engine.input, InputState::Panning { .. }));
}

#[test]
fn releasing_space_ends_pan() {
    let mut engine = engine_with(Vec::new());
    engine.on_key_down(&key("Space"), no_mods());
    engine.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_mods());
    engine.on_key_up(&key("Space"), no_mods());
    assert!(!engine.ui.pan_armed);
    assert!(engine.input.is_idle());
    assert!(engine.on_pointer_move(pt(10.0, 10.0), no_mods()).is_empty());
}

#[test]
fn middle_button_pans_without_space() {
    let mut engine = engine_with(Vec::new());
    engine.on_pointer_down(pt(0.0, 0.0), Button::Middle, no_mods());
    engine.on_pointer_move(pt(5.0, 5.0), no_mods());
    engine.on_pointer_up(pt(5.0, 5.0), Button::Middle, no_mods());
    assert_eq!((engine.camera.pan_x, engine.camera.pan_y), (5.0, 5.0));
}

#[test]
fn wheel_zoom_anchors_pointer_and_skips_history() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r]);
    let anchor = pt(50.0, 50.0);
    engine.on_wheel(anchor, WheelDelta { dx: 0.0, dy: -100.0 }, no_mods());
    assert!(approx_eq(engine.camera.zoom, 1.1));
    let world = engine.camera.screen_to_world(anchor);
    assert!(approx_eq(world.x, 50.0));
    assert!(approx_eq(world.y, 50.0));
    assert!(!engine.scene.can_undo());
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_key_removes_component_and_clears_selection() {
    let group = Uuid::new_v4();
    let a = rect_at(0.0, 0.0, Some(group));
    let b = rect_at(200.0, 0.0, Some(group));
    let mut engine = engine_with(vec![a.clone(), b]);
    engine.ui.selected_id = Some(a.id);
    let actions = engine.on_key_down(&key("Backspace"), no_mods());
    assert!(actions.contains(&Action::SceneChanged));
    assert!(engine.scene.shapes().is_empty());
    assert_eq!(engine.selection(), None);
}

#[test]
fn delete_during_drag_is_ignored() {
    let group = Uuid::new_v4();
    let a = rect_at(0.0, 0.0, Some(group));
    let b = rect_at(200.0, 0.0, Some(group));
    let mut engine = engine_with(vec![a.clone(), b]);

    engine.on_pointer_down(pt(10.0, 10.0), Button::Primary, no_mods());
    engine.on_pointer_move(pt(20.0, 20.0), no_mods());
    assert!(engine.on_key_down(&key("Delete"), no_mods()).is_empty());
    engine.on_pointer_move(pt(30.0, 30.0), no_mods());
    engine.on_pointer_up(pt(30.0, 30.0), Button::Primary, no_mods());

    assert_eq!(engine.scene.shapes().len(), 2);
    assert_eq!(engine.scene.shape(a.id).unwrap().x, 20.0);
    assert_eq!(engine.selection(), Some(a.id));

    engine.on_key_down(&key("Delete"), no_mods());
    assert!(engine.scene.shapes().is_empty());
    engine.undo();
    assert_eq!(engine.scene.shape(a.id).unwrap().x, 20.0);
}

#[test]
fn undo_during_drag_is_ignored() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.add_shape(Primitive::Ellipse);

    engine.on_pointer_down(pt(10.0, 10.0), Button::Primary, no_mods());
    engine.on_pointer_move(pt(20.0, 10.0), no_mods());
    assert!(engine.on_key_down(&key("z"), ctrl()).is_empty());
    assert!(engine.on_key_down(&key("y"), ctrl()).is_empty());
    engine.on_pointer_up(pt(20.0, 10.0), Button::Primary, no_mods());

    assert_eq!(engine.scene.shapes().len(), 2);
    assert_eq!(engine.scene.shape(r.id).unwrap().x, 10.0);
    engine.undo();
    assert_eq!(engine.scene.shape(r.id).unwrap().x, 0.0);
    assert_eq!(engine.scene.shapes().len(), 2);
}

#[test]
fn delete_without_selection_is_noop() {
    let mut engine = engine_with(vec![rect_at(0.0, 0.0, None)]);
    assert!(engine.on_key_down(&key("Delete"), no_mods()).is_empty());
    assert_eq!(engine.scene.shapes().len(), 1);
}

#[test]
fn platform_modifier_selects_undo_shortcut() {
    let mut engine = engine_with(Vec::new());
    engine.add_shape(Primitive::Rect);
    assert!(engine.on_key_down(&key("z"), Modifiers { meta: true, ..Modifiers::default() }).is_empty());
    assert_eq!(engine.scene.shapes().len(), 1);
    engine.on_key_down(&key("Z"), ctrl());
    assert!(engine.scene.shapes().is_empty());
    engine.on_key_down(&key("y"), ctrl());
    assert_eq!(engine.scene.shapes().len(), 1);

    let mut mac = EngineCore::new(EngineConfig { platform: Platform::Mac });
    mac.add_shape(Primitive::Ellipse);
    mac.on_key_down(&key("z"), Modifiers { meta: true, ..Modifiers::default() });
    assert!(mac.scene.shapes().is_empty());
}

#[test]
fn undo_of_insert_drops_dangling_selection() {
    let mut engine = engine_with(Vec::new());
    engine.add_shape(Primitive::Text);
    assert!(engine.selection().is_some());
    let actions = engine.undo();
    assert!(actions.contains(&Action::SelectionChanged(None)));
}

// =============================================================
// Commands
// =============================================================

#[test]
fn add_preset_inserts_grouped_component_and_selects_first() {
    let mut engine = engine_with(Vec::new());
    let button = library::preset("Button").unwrap();
    engine.add_preset(&button);
    let shapes = engine.scene.shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(engine.selection(), Some(shapes[0].id));
    assert!(shapes[0].group_id.is_some());
}

#[test]
fn insert_descriptors_is_atomic() {
    let mut engine = engine_with(Vec::new());
    let good = ShapeDescriptor {
        kind: ShapeKind::Ellipse,
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
        rotation: 0.0,
        fill: "#000".into(),
    };
    let bad = ShapeDescriptor { width: -1.0, ..good.clone() };
    assert!(engine.insert_descriptors(vec![good.clone(), bad]).is_err());
    assert!(engine.scene.shapes().is_empty());
    assert!(!engine.scene.can_undo());

    engine.insert_descriptors(vec![good.clone(), good]).unwrap();
    let shapes = engine.scene.shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!((shapes[0].x, shapes[0].y), (50.0, 50.0));
    assert_eq!(shapes[0].group_id, shapes[1].group_id);
}

#[test]
fn failed_figma_import_leaves_scene_untouched() {
    let mut engine = engine_with(vec![rect_at(0.0, 0.0, None)]);
    assert!(engine.import_figma(r#"{"document":{"type":"DOCUMENT"}}"#).is_err());
    assert_eq!(engine.scene.shapes().len(), 1);
    assert!(!engine.scene.can_undo());
}

#[test]
fn property_edit_in_state_writes_override() {
    let mut engine = engine_with(Vec::new());
    engine.add_preset(&library::preset("Button").unwrap());
    engine.add_state("hover").unwrap();
    assert_eq!(engine.active_state().to_string(), "hover");

    engine.update_selected_property(Property::Fill, PropertyValue::Text("#1d4ed8".into()));
    assert_eq!(engine.selected_property(Property::Fill), Some(PropertyValue::Text("#1d4ed8".into())));
    assert_eq!(engine.selected_shape().unwrap().fill, "#3b82f6");
    assert_eq!(engine.display_shapes()[0].fill, "#1d4ed8");

    engine.set_active_state(ActiveState::Base);
    assert_eq!(engine.selected_property(Property::Fill), Some(PropertyValue::Text("#3b82f6".into())));
}

#[test]
fn add_state_needs_grouped_selection() {
    let mut engine = engine_with(Vec::new());
    engine.add_shape(Primitive::Rect);
    assert_eq!(engine.add_state("hover"), Err(StateError::NoComponentSelected));
}

#[test]
fn deleting_active_state_falls_back_to_base() {
    let mut engine = engine_with(Vec::new());
    engine.add_preset(&library::preset("User Profile").unwrap());
    engine.add_state("active").unwrap();
    let name = StateName::parse("active").unwrap();
    let actions = engine.delete_state(&name);
    assert!(actions.contains(&Action::ActiveStateChanged(ActiveState::Base)));
    assert!(engine.delete_state(&name).is_empty());
}

#[test]
fn mistyped_property_value_is_ignored() {
    let r = rect_at(0.0, 0.0, None);
    let mut engine = engine_with(vec![r.clone()]);
    engine.ui.selected_id = Some(r.id);
    assert!(engine.update_selected_property(Property::Fill, PropertyValue::Number(3.0)).is_empty());
    assert!(!engine.scene.can_undo());
}
