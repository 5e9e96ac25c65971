//! Pure transform math for move, rotate and resize gestures.
//!
//! Every function here is total over well-formed input and free of side
//! effects: callers pass the geometry captured at pointer-down plus the
//! current pointer delta and receive new geometry. Rotation angles are kept
//! unbounded in storage; trigonometry normalizes them implicitly.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;
use std::str::FromStr;

use crate::camera::Point;
use crate::consts::MIN_EXTENT;
use crate::doc::{Shape, ShapeId};

/// An axis-aligned box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn of(shape: &Shape) -> Self {
        Self { x: shape.x, y: shape.y, width: shape.width, height: shape.height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Write this box back into `shape`, leaving rotation and style alone.
    pub fn apply_to(&self, shape: &mut Shape) {
        shape.x = self.x;
        shape.y = self.y;
        shape.width = self.width;
        shape.height = self.height;
    }

    /// Union of the un-rotated boxes of `shapes`, or `None` when empty.
    #[must_use]
    pub fn enclosing<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Option<Self> {
        let mut iter = shapes.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x + first.width, first.y + first.height);
        for s in iter {
            min_x = min_x.min(s.x);
            min_y = min_y.min(s.y);
            max_x = max_x.max(s.x + s.width);
            max_y = max_y.max(s.y + s.height);
        }
        Some(Self { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y })
    }
}

/// One of the eight resize handles on a selection box.
///
/// Named by row (`t`, `m`, `b`) then column (`l`, `m`, `r`); the center
/// `mm` is not a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

/// Which box edges a handle moves.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopMiddle,
        Handle::TopRight,
        Handle::MiddleLeft,
        Handle::MiddleRight,
        Handle::BottomLeft,
        Handle::BottomMiddle,
        Handle::BottomRight,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopMiddle => "tm",
            Self::TopRight => "tr",
            Self::MiddleLeft => "ml",
            Self::MiddleRight => "mr",
            Self::BottomLeft => "bl",
            Self::BottomMiddle => "bm",
            Self::BottomRight => "br",
        }
    }

    /// Active edges, derived from the handle name.
    #[must_use]
    pub fn edges(self) -> Edges {
        let name = self.name().as_bytes();
        Edges {
            top: name[0] == b't',
            bottom: name[0] == b'b',
            left: name[1] == b'l',
            right: name[1] == b'r',
        }
    }

    /// Handle position in the shape's local (un-rotated) frame.
    #[must_use]
    pub fn local_position(self, bounds: &Bounds) -> Point {
        let edges = self.edges();
        let x = if edges.left {
            bounds.x
        } else if edges.right {
            bounds.x + bounds.width
        } else {
            bounds.x + bounds.width / 2.0
        };
        let y = if edges.top {
            bounds.y
        } else if edges.bottom {
            bounds.y + bounds.height
        } else {
            bounds.y + bounds.height / 2.0
        };
        Point::new(x, y)
    }

    /// The handle diagonally (or directly) across the box.
    #[must_use]
    pub fn opposite(self) -> Handle {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopMiddle => Self::BottomMiddle,
            Self::TopRight => Self::BottomLeft,
            Self::MiddleLeft => Self::MiddleRight,
            Self::MiddleRight => Self::MiddleLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomMiddle => Self::TopMiddle,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a handle name that is not one of the eight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize handle: {0}")]
pub struct UnknownHandle(pub String);

impl FromStr for Handle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| UnknownHandle(s.to_string()))
    }
}

/// Rotate vector `v` by `degrees` (clockwise in a y-down frame).
#[must_use]
pub fn rotate_vec(v: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `p` around `pivot` by `degrees`.
#[must_use]
pub fn rotate_about(p: Point, pivot: Point, degrees: f64) -> Point {
    let r = rotate_vec(p.sub(pivot), degrees);
    Point::new(pivot.x + r.x, pivot.y + r.y)
}

/// World position of a point given in the shape's local (un-rotated) frame.
#[must_use]
pub fn local_to_world(shape: &Shape, local: Point) -> Point {
    rotate_about(local, shape.center(), shape.rotation)
}

/// Local (un-rotated) position of a world point relative to `shape`.
#[must_use]
pub fn world_to_local(shape: &Shape, world: Point) -> Point {
    rotate_about(world, shape.center(), -shape.rotation)
}

/// World positions of the four corners, clockwise from top-left.
#[must_use]
pub fn world_corners(shape: &Shape) -> [Point; 4] {
    let b = Bounds::of(shape);
    [
        Point::new(b.x, b.y),
        Point::new(b.x + b.width, b.y),
        Point::new(b.x + b.width, b.y + b.height),
        Point::new(b.x, b.y + b.height),
    ]
    .map(|p| local_to_world(shape, p))
}

/// Translate every shape in `anchor`'s component by `(dx, dy)`.
///
/// `shapes` is the list captured at pointer-down; component membership is
/// read from that snapshot. Shapes outside the component are returned
/// unchanged. An unknown `anchor` yields the input unchanged.
#[must_use]
pub fn translate_component(shapes: &[Shape], anchor: ShapeId, dx: f64, dy: f64) -> Vec<Shape> {
    let Some(anchor_shape) = shapes.iter().find(|s| s.id == anchor) else {
        return shapes.to_vec();
    };
    shapes
        .iter()
        .map(|s| {
            if anchor_shape.same_component(s) {
                Shape { x: s.x + dx, y: s.y + dy, ..s.clone() }
            } else {
                s.clone()
            }
        })
        .collect()
}

/// Angle in degrees of `pointer` around `center`, measured with `atan2`.
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// New rotation after the pointer moved from `start_pointer` to `pointer`
/// around `center`. Not wrapped into any range.
#[must_use]
pub fn rotation_for(start_rotation: f64, center: Point, start_pointer: Point, pointer: Point) -> f64 {
    start_rotation + (pointer_angle(center, pointer) - pointer_angle(center, start_pointer))
}

/// Resize `start` by dragging `handle` by the world-space delta `(dx, dy)`.
///
/// The delta is projected into the shape's local frame so the handle follows
/// the shape's rotation. The resulting box is shifted so that the corner
/// opposite the dragged handle keeps its world position. Returns `None` when
/// the new width or height would be at or below [`MIN_EXTENT`].
#[must_use]
pub fn resize(start: &Bounds, rotation: f64, handle: Handle, dx: f64, dy: f64) -> Option<Bounds> {
    let (sin, cos) = rotation.to_radians().sin_cos();
    let local_dx = dx * cos + dy * sin;
    let local_dy = dy * cos - dx * sin;

    let edges = handle.edges();
    let mut next = *start;
    if edges.right {
        next.width += local_dx;
    }
    if edges.left {
        next.width -= local_dx;
        next.x += local_dx;
    }
    if edges.bottom {
        next.height += local_dy;
    }
    if edges.top {
        next.height -= local_dy;
        next.y += local_dy;
    }

    if next.width <= MIN_EXTENT || next.height <= MIN_EXTENT {
        return None;
    }

    // The pivot moved with the box; shift x/y so the fixed corner stays put.
    let center_delta = next.center().sub(start.center());
    let rotated = rotate_vec(center_delta, rotation);
    next.x += rotated.x - center_delta.x;
    next.y += rotated.y - center_delta.y;
    Some(next)
}

/// Apply [`resize`] to a shape, returning the updated shape or `None` when
/// the step is rejected.
#[must_use]
pub fn resize_shape(start: &Shape, handle: Handle, dx: f64, dy: f64) -> Option<Shape> {
    let bounds = resize(&Bounds::of(start), start.rotation, handle, dx, dy)?;
    let mut out = start.clone();
    bounds.apply_to(&mut out);
    Some(out)
}
