//! Component state overlay: named visual variants stored as sparse overrides.
//!
//! Each component (shapes sharing a `groupId`) may carry any number of named
//! states. A state holds one [`PartialShape`] per overridden shape; base
//! shapes are never duplicated. The reserved name `base` means "no overlay"
//! and is represented by [`ActiveState::Base`], never by a stored state.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::doc::{GroupId, PartialShape, Shape, ShapeId};

/// Name of the implicit state that applies no overrides.
pub const BASE_STATE: &str = "base";

/// Name of the state that compiles to a `:hover` selector on export.
pub const HOVER_STATE: &str = "hover";

/// Why a state name or state operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state name is empty")]
    Empty,
    #[error("\"base\" is reserved")]
    Reserved,
    #[error("state name {0:?} must be a letter followed by letters or digits")]
    InvalidName(String),
    #[error("state {0:?} already exists")]
    Duplicate(String),
    #[error("no component with group id {0}")]
    UnknownComponent(GroupId),
    #[error("select a grouped shape to manage its states")]
    NoComponentSelected,
}

/// A normalized, non-reserved state name.
///
/// Whitespace is stripped and the name is lower-cased, so `" Hover "` and
/// `"hover"` name the same state. The result is an ASCII letter followed by
/// ASCII letters or digits; it doubles as a CSS class and, capitalized, as a
/// boolean prop suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateName(String);

impl StateName {
    /// Normalize `raw` into a state name.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Empty`] if nothing is left after normalization,
    /// [`StateError::Reserved`] for `base` and [`StateError::InvalidName`]
    /// for anything that is not a plain identifier.
    pub fn parse(raw: &str) -> Result<Self, StateError> {
        let name: String = raw.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect();
        if name.is_empty() {
            return Err(StateError::Empty);
        }
        if name == BASE_STATE {
            return Err(StateError::Reserved);
        }
        let mut chars = name.chars();
        let leads_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        if !leads_with_letter || !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err(StateError::InvalidName(name));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_hover(&self) -> bool {
        self.0 == HOVER_STATE
    }
}

impl TryFrom<String> for StateName {
    type Error = StateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateName> for String {
    fn from(value: StateName) -> Self {
        value.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which property owner edits are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveState {
    /// Edits mutate base shapes.
    #[default]
    Base,
    /// Edits on grouped shapes land in this state's overrides.
    Named(StateName),
}

impl ActiveState {
    /// Parse a user-facing name; `base` (in any case or spacing) maps to
    /// [`ActiveState::Base`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Empty`] for a blank name.
    pub fn from_name(raw: &str) -> Result<Self, StateError> {
        match StateName::parse(raw) {
            Ok(name) => Ok(Self::Named(name)),
            Err(StateError::Reserved) => Ok(Self::Base),
            Err(e) => Err(e),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&StateName> {
        match self {
            Self::Base => None,
            Self::Named(name) => Some(name),
        }
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base)
    }
}

impl fmt::Display for ActiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str(BASE_STATE),
            Self::Named(name) => f.write_str(name.as_str()),
        }
    }
}

/// One named variant of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentState {
    pub name: StateName,
    #[serde(default)]
    pub overrides: BTreeMap<ShapeId, PartialShape>,
}

impl ComponentState {
    #[must_use]
    pub fn new(name: StateName) -> Self {
        Self { name, overrides: BTreeMap::new() }
    }
}

/// All states of one component, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStates {
    #[serde(default)]
    pub states: Vec<ComponentState>,
}

impl ComponentStates {
    #[must_use]
    pub fn get(&self, name: &StateName) -> Option<&ComponentState> {
        self.states.iter().find(|s| &s.name == name)
    }

    fn get_or_insert(&mut self, name: &StateName) -> &mut ComponentState {
        let idx = match self.states.iter().position(|s| &s.name == name) {
            Some(idx) => idx,
            None => {
                self.states.push(ComponentState::new(name.clone()));
                self.states.len() - 1
            }
        };
        &mut self.states[idx]
    }
}

/// Mapping from component group id to its states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overlay(BTreeMap<GroupId, ComponentStates>);

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn component(&self, group: GroupId) -> Option<&ComponentStates> {
        self.0.get(&group)
    }

    /// States of `group`, empty when the component has none.
    #[must_use]
    pub fn states(&self, group: GroupId) -> &[ComponentState] {
        match self.0.get(&group) {
            Some(component) => &component.states,
            None => &[],
        }
    }

    #[must_use]
    pub fn state(&self, group: GroupId, name: &StateName) -> Option<&ComponentState> {
        self.0.get(&group)?.get(name)
    }

    /// The override stored for `shape` under `group`'s state `name`.
    #[must_use]
    pub fn override_for(&self, group: GroupId, name: &StateName, shape: ShapeId) -> Option<&PartialShape> {
        self.state(group, name)?.overrides.get(&shape)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupId, &ComponentStates)> {
        self.0.iter()
    }

    /// Create an empty state on `group`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Duplicate`] if the component already has a state
    /// with this name.
    pub fn add_state(&mut self, group: GroupId, name: StateName) -> Result<(), StateError> {
        let component = self.0.entry(group).or_default();
        if component.get(&name).is_some() {
            return Err(StateError::Duplicate(name.0));
        }
        component.states.push(ComponentState::new(name));
        Ok(())
    }

    /// Remove `name` from `group`. Returns `false` if no such state existed.
    pub fn delete_state(&mut self, group: GroupId, name: &StateName) -> bool {
        let Some(component) = self.0.get_mut(&group) else {
            return false;
        };
        let before = component.states.len();
        component.states.retain(|s| &s.name != name);
        let removed = component.states.len() != before;
        if component.states.is_empty() {
            self.0.remove(&group);
        }
        removed
    }

    /// Merge `update` into the override for `shape`, creating the state if it
    /// does not exist yet.
    pub fn upsert_override(&mut self, group: GroupId, name: &StateName, shape: ShapeId, update: &PartialShape) {
        let state = self.0.entry(group).or_default().get_or_insert(name);
        state.overrides.entry(shape).or_default().merge(update);
    }

    /// Return a copy with entries for dead components removed, or `None` if
    /// nothing would change.
    ///
    /// A component is dead when no shape in `shapes` carries its group id.
    /// Override keys for shapes no longer in the component are dropped too.
    #[must_use]
    pub fn pruned(&self, shapes: &[Shape]) -> Option<Overlay> {
        let members: HashSet<(GroupId, ShapeId)> =
            shapes.iter().filter_map(|s| s.group_id.map(|g| (g, s.id))).collect();
        let live: HashSet<GroupId> = members.iter().map(|(g, _)| *g).collect();

        let mut next = self.clone();
        next.0.retain(|group, _| live.contains(group));
        for (group, component) in &mut next.0 {
            for state in &mut component.states {
                state.overrides.retain(|shape, _| members.contains(&(*group, *shape)));
            }
        }

        if next == *self {
            return None;
        }
        tracing::debug!(before = self.0.len(), after = next.0.len(), "overlay pruned");
        Some(next)
    }
}

impl FromIterator<(GroupId, ComponentStates)> for Overlay {
    fn from_iter<I: IntoIterator<Item = (GroupId, ComponentStates)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
