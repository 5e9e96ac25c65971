//! Code generation for shape-composer scenes.
//!
//! Turns a subset of the scene into a normalized intermediate representation
//! and from there into framework source or a live-preview stylesheet. All
//! entry points are pure; nothing here touches the scene's history.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`export`] | Scope resolution and the never-failing export entry point |
//! | [`ir`] | Canonical `{ elements, states }` form and its JSON |
//! | [`style`] | Per-shape CSS declarations and state diffs |
//! | [`stylesheet`] | Component and preview stylesheets |
//! | [`naming`] | Component and prop identifiers |
//! | [`targets`] | Emitter trait, registry and built-in targets |
//! | [`error`] | [`CodegenError`] |

pub mod error;
pub mod export;
pub mod ir;
pub mod naming;
pub mod style;
pub mod stylesheet;
pub mod targets;

pub use error::CodegenError;
pub use export::{ExportScope, ExportSet, export};
pub use ir::Ir;
pub use targets::{Emitter, Registry};
