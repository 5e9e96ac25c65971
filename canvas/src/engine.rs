//! Interaction controller: turns raw input events into scene mutations.
//!
//! `EngineCore` owns the scene, camera, UI selection and the gesture state
//! machine. Every handler processes one event to completion and returns the
//! [`Action`]s the host should react to (redraw, update panels, change the
//! cursor). Nothing here touches a rendering surface.
//!
//! Gestures write intermediate frames with [`CommitMode::Coalesce`] and seal
//! them on pointer-up, so a drag of any length is one undo step. Camera
//! changes never enter history.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::consts::IMPORT_PADDING;
use crate::doc::{GroupId, PartialShape, Property, PropertyValue, Shape, ShapeId};
use crate::figma;
use crate::geometry::{resize_shape, rotation_for, translate_component};
use crate::hit::{Hit, HitPart, handle_at, hit_test};
use crate::import::{self, ImportError, ShapeDescriptor};
use crate::input::{Button, InputState, Key, Modifiers, UiState, WheelDelta};
use crate::library::{self, Preset, Primitive};
use crate::overlay::{ActiveState, StateError, StateName};
use crate::scene::{CommitMode, SceneDocument, SceneModel};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Shapes or overlay changed; redraw and refresh property panels.
    SceneChanged,
    /// Pan or zoom changed; redraw.
    ViewChanged,
    SelectionChanged(Option<ShapeId>),
    ActiveStateChanged(ActiveState),
    SetCursor(String),
}

/// Host platform, selecting the undo/redo modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Command (meta) is the shortcut modifier.
    Mac,
    /// Ctrl is the shortcut modifier.
    #[default]
    Other,
}

/// Engine configuration supplied by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub platform: Platform,
}

impl EngineConfig {
    /// Whether the platform's shortcut modifier is held.
    #[must_use]
    pub fn shortcut_held(&self, modifiers: Modifiers) -> bool {
        match self.platform {
            Platform::Mac => modifiers.meta,
            Platform::Other => modifiers.ctrl,
        }
    }
}

/// Core engine state: all interaction logic, independent of any host.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub scene: SceneModel,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Start from a saved scene document with empty history.
    #[must_use]
    pub fn with_document(config: EngineConfig, doc: SceneDocument) -> Self {
        Self { scene: SceneModel::from_document(doc), ..Self::new(config) }
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.ui.selected_id.and_then(|id| self.scene.shape(id))
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn active_state(&self) -> &ActiveState {
        &self.ui.active_state
    }

    /// Shapes as the render surface should draw them.
    #[must_use]
    pub fn display_shapes(&self) -> Vec<Shape> {
        self.scene.display_shapes(self.ui.selected_id, &self.ui.active_state)
    }

    /// Read a property of the selected shape as seen in the active state.
    #[must_use]
    pub fn selected_property(&self, property: Property) -> Option<PropertyValue> {
        let id = self.ui.selected_id?;
        self.scene.resolve_display_value(id, property, &self.ui.active_state)
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        if button == Button::Middle {
            return self.start_pan(screen_pt);
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let world = self.camera.screen_to_world(screen_pt);
        let hit = self.hit_at(world);
        if self.ui.pan_armed {
            return match hit {
                Some(_) => Vec::new(),
                None => self.start_pan(screen_pt),
            };
        }
        let Some(hit) = hit else {
            return self.select(None);
        };

        let mut actions = match hit.part {
            HitPart::Body => self.select(Some(hit.shape_id)),
            HitPart::ResizeHandle(_) | HitPart::RotateHandle => Vec::new(),
        };
        actions.extend(self.set_active_state(ActiveState::Base));
        let Some(start) = self.scene.shape(hit.shape_id) else {
            return actions;
        };
        self.input = match hit.part {
            HitPart::Body => InputState::Moving {
                id: hit.shape_id,
                start_world: world,
                start_shapes: self.scene.shapes().to_vec(),
            },
            HitPart::ResizeHandle(handle) => InputState::Resizing {
                id: hit.shape_id,
                handle,
                start_world: world,
                start_shape: start.clone(),
            },
            HitPart::RotateHandle => InputState::Rotating {
                id: hit.shape_id,
                center: start.center(),
                start_world: world,
                start_rotation: start.rotation,
            },
        };
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_x += screen_pt.x - last_screen.x;
                self.camera.pan_y += screen_pt.y - last_screen.y;
                *last_screen = screen_pt;
                vec![Action::ViewChanged]
            }
            InputState::Moving { id, start_world, start_shapes } => {
                let next = translate_component(start_shapes, *id, world.x - start_world.x, world.y - start_world.y);
                scene_changed(self.scene.set_shapes(next, CommitMode::Coalesce))
            }
            InputState::Resizing { id, handle, start_world, start_shape } => {
                let Some(resized) = resize_shape(start_shape, *handle, world.x - start_world.x, world.y - start_world.y)
                else {
                    return Vec::new();
                };
                let id = *id;
                scene_changed(self.scene.replace_shapes(|shapes| replace_one(shapes, id, &resized), CommitMode::Coalesce))
            }
            InputState::Rotating { id, center, start_world, start_rotation } => {
                let rotation = rotation_for(*start_rotation, *center, *start_world, world);
                let id = *id;
                scene_changed(self.scene.replace_shapes(
                    |shapes| {
                        shapes.iter().map(|s| if s.id == id { Shape { rotation, ..s.clone() } } else { s.clone() }).collect()
                    },
                    CommitMode::Coalesce,
                ))
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let finished = std::mem::take(&mut self.input);
        if finished.edits_scene() {
            if self.scene.finish_gesture() {
                return vec![Action::SceneChanged];
            }
            return Vec::new();
        }
        if matches!(finished, InputState::Panning { .. }) {
            let cursor = if self.ui.pan_armed { "grab" } else { "default" };
            return vec![Action::SetCursor(cursor.into())];
        }
        Vec::new()
    }

    /// Zoom one tick around the pointer.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if delta.dy.abs() < f64::EPSILON {
            return Vec::new();
        }
        self.camera.zoom_at(screen_pt, delta.dy);
        vec![Action::ViewChanged]
    }

    // --- Keyboard input ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_space() {
            if self.ui.pan_armed {
                return Vec::new();
            }
            self.ui.pan_armed = true;
            return vec![Action::SetCursor("grab".into())];
        }
        if self.input.edits_scene() {
            return Vec::new();
        }
        if key.is_delete() {
            return self.delete_selected();
        }
        if self.config.shortcut_held(modifiers) {
            if key.is_letter('z') {
                return self.undo();
            }
            if key.is_letter('y') {
                return self.redo();
            }
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_space() {
            return Vec::new();
        }
        self.ui.pan_armed = false;
        if matches!(self.input, InputState::Panning { .. }) {
            self.input = InputState::Idle;
        }
        vec![Action::SetCursor("default".into())]
    }

    // --- Commands ---

    /// Delete the selected shape (or its component) and clear the selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let removed = self.scene.delete_shape(id);
        let mut actions = self.select(None);
        if !removed.is_empty() {
            actions.push(Action::SceneChanged);
        }
        actions
    }

    pub fn undo(&mut self) -> Vec<Action> {
        if !self.scene.undo() {
            return Vec::new();
        }
        self.after_history_step()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if !self.scene.redo() {
            return Vec::new();
        }
        self.after_history_step()
    }

    /// Add a default primitive at the insertion origin and select it.
    pub fn add_shape(&mut self, primitive: Primitive) -> Vec<Action> {
        let shape = library::default_shape(primitive, &mut rand::rng());
        self.insert_and_select(vec![shape])
    }

    /// Instantiate a preset as a new component and select its first shape.
    pub fn add_preset(&mut self, preset: &Preset) -> Vec<Action> {
        self.insert_and_select(preset.instantiate())
    }

    /// Insert a producer's descriptor batch atomically.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the scene untouched.
    pub fn insert_descriptors(&mut self, descriptors: Vec<ShapeDescriptor>) -> Result<Vec<Action>, ImportError> {
        let shapes = import::materialize(descriptors, Point::new(IMPORT_PADDING, IMPORT_PADDING))?;
        Ok(self.insert_shapes(shapes))
    }

    /// Import the first page of a Figma file payload.
    ///
    /// # Errors
    ///
    /// Returns the transform error and leaves the scene untouched.
    pub fn import_figma(&mut self, json: &str) -> Result<Vec<Action>, ImportError> {
        let shapes = figma::import_file_json(json)?;
        Ok(self.insert_shapes(shapes))
    }

    /// Edit a property of the selected shape, routed by the active state.
    pub fn update_selected_property(&mut self, property: Property, value: PropertyValue) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let update = PartialShape::single(property, value);
        if update.is_empty() {
            return Vec::new();
        }
        scene_changed(self.scene.update_shape_property(id, &update, &self.ui.active_state))
    }

    /// Switch the owner of property edits.
    pub fn set_active_state(&mut self, state: ActiveState) -> Vec<Action> {
        if self.ui.active_state == state {
            return Vec::new();
        }
        self.ui.active_state = state.clone();
        vec![Action::ActiveStateChanged(state)]
    }

    /// Create a state on the selected component and make it active.
    ///
    /// # Errors
    ///
    /// Fails without a grouped selection or for an invalid or duplicate name.
    pub fn add_state(&mut self, raw: &str) -> Result<Vec<Action>, StateError> {
        let group = self.selected_group().ok_or(StateError::NoComponentSelected)?;
        let name = self.scene.add_state(group, raw)?;
        let mut actions = vec![Action::SceneChanged];
        actions.extend(self.set_active_state(ActiveState::Named(name)));
        Ok(actions)
    }

    /// Delete a state of the selected component. Falls back to base if it was
    /// active.
    pub fn delete_state(&mut self, name: &StateName) -> Vec<Action> {
        let Some(group) = self.selected_group() else {
            return Vec::new();
        };
        if !self.scene.delete_state(group, name) {
            return Vec::new();
        }
        let mut actions = vec![Action::SceneChanged];
        if self.ui.active_state.name() == Some(name) {
            actions.extend(self.set_active_state(ActiveState::Base));
        }
        actions
    }

    // --- Internals ---

    fn selected_group(&self) -> Option<GroupId> {
        self.selected_shape().and_then(|s| s.group_id)
    }

    fn select(&mut self, id: Option<ShapeId>) -> Vec<Action> {
        if self.ui.selected_id == id {
            return Vec::new();
        }
        self.ui.selected_id = id;
        vec![Action::SelectionChanged(id)]
    }

    /// Handles of the selected shape, tested against its base geometry, then
    /// displayed bodies top-most first.
    fn hit_at(&self, world: Point) -> Option<Hit> {
        let handle = self
            .selected_shape()
            .and_then(|shape| handle_at(world, shape, &self.camera).map(|part| Hit { shape_id: shape.id, part }));
        handle.or_else(|| hit_test(world, &self.display_shapes(), &self.camera, None))
    }

    fn start_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor("grabbing".into())]
    }

    fn insert_shapes(&mut self, shapes: Vec<Shape>) -> Vec<Action> {
        scene_changed(self.scene.insert_batch(shapes))
    }

    fn insert_and_select(&mut self, shapes: Vec<Shape>) -> Vec<Action> {
        let first = shapes.first().map(|s| s.id);
        let mut actions = self.insert_shapes(shapes);
        actions.extend(self.select(first));
        actions
    }

    /// Drop a selection that no longer refers to a live shape.
    fn after_history_step(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::SceneChanged];
        if self.ui.selected_id.is_some() && self.selected_shape().is_none() {
            actions.extend(self.select(None));
        }
        actions
    }
}

fn scene_changed(changed: bool) -> Vec<Action> {
    if changed { vec![Action::SceneChanged] } else { Vec::new() }
}

fn replace_one(shapes: &[Shape], id: ShapeId, replacement: &Shape) -> Vec<Shape> {
    shapes.iter().map(|s| if s.id == id { replacement.clone() } else { s.clone() }).collect()
}
