//! View transform for the infinite canvas.
//!
//! The camera is view state only: panning and zooming never touch the scene
//! or its history.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// 2D coordinate; screen pixels or world units depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Viewport transform: world units scaled by `zoom`, then offset by the pan.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is clamped to `ZOOM_MIN..=ZOOM_MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Length of `screen_dist` pixels in world units at the current zoom.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Zoom by one wheel tick, keeping the world point under `anchor` fixed.
    ///
    /// Positive `wheel_dy` (scrolling down) zooms out, anything else zooms in.
    /// The resulting scale is clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_at(&mut self, anchor: Point, wheel_dy: f64) {
        let target = if wheel_dy > 0.0 { self.zoom / ZOOM_STEP } else { self.zoom * ZOOM_STEP };
        self.zoom_to(anchor, target);
    }

    /// Set the scale to `zoom` (clamped), keeping the world point under `anchor` fixed.
    pub fn zoom_to(&mut self, anchor: Point, zoom: f64) {
        let world = self.screen_to_world(anchor);
        let clamped = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.zoom = clamped;
        self.pan_x = anchor.x - world.x * clamped;
        self.pan_y = anchor.y - world.y * clamped;
    }
}
