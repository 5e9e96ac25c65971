//! Scene editing core for the shape composer.
//!
//! This crate owns everything between raw input events and the document: the
//! shape model and its component state overlay, snapshot-based undo/redo,
//! the pure transform math behind move/resize/rotate, hit-testing, the camera,
//! and the interaction state machine that ties them together. Drawing is left
//! to the host, which reads [`engine::EngineCore::display_shapes`] after every
//! returned [`engine::Action`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller ([`engine::EngineCore`]) |
//! | [`scene`] | Shape list + overlay behind two history tracks |
//! | [`history`] | Generic undo/redo with coalesced commits |
//! | [`overlay`] | Named component states and their overrides |
//! | [`doc`] | Shape types and sparse property updates |
//! | [`geometry`] | Move, resize and rotate math |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against shapes and handles |
//! | [`import`] | Shape descriptor ingestion |
//! | [`figma`] | Figma file payload transformer |
//! | [`library`] | Default primitives and component presets |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod figma;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod import;
pub mod input;
pub mod library;
pub mod overlay;
pub mod scene;
