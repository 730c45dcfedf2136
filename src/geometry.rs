//! Geometry primitives and the pure move/resize math.
//!
//! Everything here is stateless. The controller snapshots whatever it needs at
//! pointer-down (drag start, anchors) and feeds it back in on every
//! pointer-move, so the same inputs always yield the same rectangle.
//!
//! Out-of-range input is clamped, never rejected: see [`clamp`] for the policy
//! applied when a lower bound exceeds the upper one.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::hit::DirectionalVector;

/// A point in either client (viewport) or container-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    #[must_use]
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.w, size.h)
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// The bounding surface the selection lives in.
///
/// `origin` is the container's top-left corner in client space; it is only
/// needed to turn client pointer coordinates into container-local ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Container {
    pub origin: Point,
    pub size: Size,
}

impl Container {
    #[must_use]
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A container whose client origin coincides with the viewport origin.
    #[must_use]
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self::new(Point::default(), Size::new(width, height))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.w
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.h
    }

    /// Convert a client-space point into container-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        client - self.origin
    }
}

/// Clamp `value` into `[min, max]`.
///
/// When the range is inverted (`min > max`) the upper bound wins, floored at
/// zero: a minimum that does not fit gives way to the space actually
/// available. NaN input collapses to `min`. Never panics.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return max.max(0.0);
    }
    value.max(min).min(max)
}

/// Which edge of an axis stays fixed while the selection is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Left on the x axis, top on the y axis.
    Leading,
    /// Right on the x axis, bottom on the y axis.
    Trailing,
}

/// The fixed edge of one axis and its distance from the matching container edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAnchor {
    pub edge: Edge,
    /// Distance from the container's leading edge for [`Edge::Leading`], or
    /// from its trailing edge for [`Edge::Trailing`].
    pub offset: f64,
}

impl AxisAnchor {
    /// Anchor at the leading edge, `position` away from the container's leading edge.
    #[must_use]
    pub fn leading(position: f64) -> Self {
        Self { edge: Edge::Leading, offset: position }
    }

    /// Anchor for a handle whose vector has `component` on this axis.
    ///
    /// A negative component drags the leading edge, so the trailing edge is
    /// pinned instead and the offset is re-expressed from the trailing side.
    #[must_use]
    pub fn for_component(component: i8, position: f64, extent: f64, container: f64) -> Self {
        if component < 0 {
            Self { edge: Edge::Trailing, offset: to_trailing(position, extent, container) }
        } else {
            Self::leading(position)
        }
    }

    /// Largest extent the selection may take on this axis without crossing the container.
    #[must_use]
    pub fn max_extent(&self, container: f64) -> f64 {
        container - self.offset
    }

    /// Leading position of a span of `extent` held by this anchor.
    #[must_use]
    pub fn leading_position(&self, extent: f64, container: f64) -> f64 {
        match self.edge {
            Edge::Leading => self.offset,
            Edge::Trailing => to_leading(self.offset, extent, container),
        }
    }
}

/// Per-axis anchors captured when a resize starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub x: AxisAnchor,
    pub y: AxisAnchor,
}

impl Anchors {
    /// Anchors for resizing `selection` inside `container` along `vector`.
    #[must_use]
    pub fn for_resize(vector: DirectionalVector, selection: Rect, container: Size) -> Self {
        Self {
            x: AxisAnchor::for_component(vector.x(), selection.x, selection.w, container.w),
            y: AxisAnchor::for_component(vector.y(), selection.y, selection.h, container.h),
        }
    }
}

/// Re-express a leading offset (left/top) as a trailing one (right/bottom).
#[must_use]
pub fn to_trailing(leading: f64, extent: f64, container: f64) -> f64 {
    container - leading - extent
}

/// Re-express a trailing offset (right/bottom) as a leading one (left/top).
#[must_use]
pub fn to_leading(trailing: f64, extent: f64, container: f64) -> f64 {
    container - trailing - extent
}

/// Size and pointer position captured at the start of a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub size: Size,
    pub pointer: Point,
}

/// New top-left corner for a selection of `size` being dragged by the pointer.
///
/// `pointer_offset` is the vector from the pointer to the selection's top-left
/// corner captured at pointer-down, so the grab point stays under the cursor.
#[must_use]
pub fn compute_move(container: &Container, size: Size, pointer: Point, pointer_offset: Point) -> Point {
    let raw = container.to_local(pointer + pointer_offset);
    Point::new(
        clamp(raw.x, 0.0, container.width() - size.w),
        clamp(raw.y, 0.0, container.height() - size.h),
    )
}

/// New selection rectangle for a resize along `vector`.
///
/// The extent on each axis follows the pointer's travel since `start`, scaled
/// by the vector component, and is clamped between `min` and the room left
/// between the anchored edge and the container. The position is derived from
/// the anchors, so a trailing anchor keeps the far edge where it was.
#[must_use]
pub fn compute_resize(
    vector: DirectionalVector,
    start: &DragStart,
    pointer: Point,
    container: Size,
    anchors: Anchors,
    min: Size,
) -> Rect {
    let raw_w = start.size.w - (start.pointer.x - pointer.x) * f64::from(vector.x());
    let raw_h = start.size.h - (start.pointer.y - pointer.y) * f64::from(vector.y());

    let w = clamp(raw_w, min.w, anchors.x.max_extent(container.w));
    let h = clamp(raw_h, min.h, anchors.y.max_extent(container.h));

    Rect::new(
        anchors.x.leading_position(w, container.w),
        anchors.y.leading_position(h, container.h),
        w,
        h,
    )
}
