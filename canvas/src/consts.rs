//! Shared numeric constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a resize gesture may produce, in world units.
/// A resize step that would reach or cross this extent is rejected.
pub const MIN_EXTENT: f64 = 10.0;

// ── Camera ──────────────────────────────────────────────────────

/// Lower bound for the camera scale factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Upper bound for the camera scale factor.
pub const ZOOM_MAX: f64 = 10.0;

/// Multiplicative zoom step applied per wheel tick.
pub const ZOOM_STEP: f64 = 1.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize and rotate handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance above the top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 25.0;

// ── Insertion ───────────────────────────────────────────────────

/// World-space x where newly added shapes and presets are placed.
pub const INSERT_ORIGIN_X: f64 = 150.0;

/// World-space y where newly added shapes and presets are placed.
pub const INSERT_ORIGIN_Y: f64 = 100.0;

/// Padding applied to the bounding-box origin of an imported Figma page.
pub const IMPORT_PADDING: f64 = 50.0;

/// Fill used when an imported node carries no visible solid paint.
pub const DEFAULT_IMPORT_FILL: &str = "#CCCCCC";

/// Font size assumed for text shapes that do not specify one.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;
