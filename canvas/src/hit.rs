//! Hit-testing of pointer positions against shapes and selection handles.
//!
//! All tests run in the shape's local (un-rotated) frame: the world point is
//! rotated back around the shape center first, so rotated shapes and their
//! handles hit exactly where they are drawn. Handle slop is specified in
//! screen pixels and converted through the camera.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::doc::{Shape, ShapeId, ShapeKind};
use crate::geometry::{Bounds, Handle, world_to_local};

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(Handle),
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Test which shape (if any) is under `world_pt`.
///
/// Handles of the selected shape win over every body. Bodies are tested
/// top-most first, i.e. in reverse paint order.
#[must_use]
pub fn hit_test(world_pt: Point, shapes: &[Shape], camera: &Camera, selected_id: Option<ShapeId>) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| shapes.iter().find(|s| s.id == id))
        && let Some(part) = handle_at(world_pt, selected, camera)
    {
        return Some(Hit { shape_id: selected.id, part });
    }

    shapes
        .iter()
        .rev()
        .find(|s| contains(s, world_pt))
        .map(|s| Hit { shape_id: s.id, part: HitPart::Body })
}

/// Local-frame position of the rotate handle, above the top-middle handle.
#[must_use]
pub fn rotate_handle_position(shape: &Shape, camera: &Camera) -> Point {
    let top = Handle::TopMiddle.local_position(&Bounds::of(shape));
    Point::new(top.x, top.y - camera.screen_dist_to_world(ROTATE_HANDLE_OFFSET_PX))
}

/// Which handle of `shape`, if any, is under `world_pt`. The rotate handle
/// wins over the resize handles.
#[must_use]
pub fn handle_at(world_pt: Point, shape: &Shape, camera: &Camera) -> Option<HitPart> {
    let local = world_to_local(shape, world_pt);
    let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
    let near = |p: Point| {
        let d = local.sub(p);
        d.x.hypot(d.y) <= slop
    };

    if near(rotate_handle_position(shape, camera)) {
        return Some(HitPart::RotateHandle);
    }
    let bounds = Bounds::of(shape);
    Handle::ALL.into_iter().find(|h| near(h.local_position(&bounds))).map(HitPart::ResizeHandle)
}

/// Whether `world_pt` lies inside `shape`, honoring rotation.
#[must_use]
pub fn contains(shape: &Shape, world_pt: Point) -> bool {
    let p = world_to_local(shape, world_pt);
    match shape.kind {
        ShapeKind::Ellipse => {
            let c = shape.center();
            let (rx, ry) = (shape.width / 2.0, shape.height / 2.0);
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let nx = (p.x - c.x) / rx;
            let ny = (p.y - c.y) / ry;
            nx * nx + ny * ny <= 1.0
        }
        ShapeKind::Rect { .. } | ShapeKind::Text { .. } => {
            p.x >= shape.x && p.x <= shape.x + shape.width && p.y >= shape.y && p.y <= shape.y + shape.height
        }
    }
}
