use uuid::Uuid;

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

// =============================================================
// Key
// =============================================================

#[test]
fn space_is_recognized_by_value_and_code() {
    assert!(Key(" ".into()).is_space());
    assert!(Key("Space".into()).is_space());
    assert!(!Key("s".into()).is_space());
}

#[test]
fn delete_and_backspace_delete() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("Escape".into()).is_delete());
}

#[test]
fn letter_match_ignores_case() {
    assert!(Key("z".into()).is_letter('z'));
    assert!(Key("Z".into()).is_letter('z'));
    assert!(!Key("zz".into()).is_letter('z'));
    assert!(!Key(String::new()).is_letter('z'));
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_unselected_base() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
    assert!(ui.active_state.is_base());
    assert!(!ui.pan_armed);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
}

#[test]
fn only_shape_gestures_edit_scene() {
    let panning = InputState::Panning { last_screen: Point::new(0.0, 0.0) };
    assert!(!panning.edits_scene());
    let rotating = InputState::Rotating {
        id: Uuid::new_v4(),
        center: Point::new(50.0, 50.0),
        start_world: Point::new(100.0, 50.0),
        start_rotation: 0.0,
    };
    assert!(rotating.edits_scene());
    assert!(!rotating.is_idle());
}

#[test]
fn moving_keeps_its_reference_frame() {
    let id = Uuid::new_v4();
    let state = InputState::Moving { id, start_world: Point::new(1.0, 2.0), start_shapes: Vec::new() };
    match state {
        InputState::Moving { id: got, start_world, start_shapes } => {
            assert_eq!(got, id);
            assert_eq!(start_world, Point::new(1.0, 2.0));
            assert!(start_shapes.is_empty());
        }
        _ => panic!("expected Moving"),
    }
}
