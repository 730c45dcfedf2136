#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{Point, Rect};

/// Which edges move during a resize, one component per axis.
///
/// Each component is `-1`, `0` or `1` and at least one is non-zero. A positive
/// component grows the selection when the pointer moves right/down; a negative
/// one grows it when the pointer moves left/up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionalVector {
    x: i8,
    y: i8,
}

impl DirectionalVector {
    /// Build a vector, rejecting out-of-range components and the zero vector.
    #[must_use]
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let valid = (-1..=1).contains(&x) && (-1..=1).contains(&y) && (x, y) != (0, 0);
        valid.then_some(Self { x, y })
    }

    #[must_use]
    pub fn x(self) -> i8 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> i8 {
        self.y
    }

    /// The handle bound to this vector.
    #[must_use]
    pub fn anchor(self) -> ResizeAnchor {
        match (self.x, self.y) {
            (0, -1) => ResizeAnchor::N,
            (1, -1) => ResizeAnchor::Ne,
            (1, 0) => ResizeAnchor::E,
            (1, 1) => ResizeAnchor::Se,
            (0, 1) => ResizeAnchor::S,
            (-1, 1) => ResizeAnchor::Sw,
            (-1, 0) => ResizeAnchor::W,
            _ => ResizeAnchor::Nw,
        }
    }
}

/// Which part of the selection was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Every handle, corners interleaved with edges clockwise from the top.
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    #[must_use]
    pub fn vector(self) -> DirectionalVector {
        let (x, y) = match self {
            Self::N => (0, -1),
            Self::Ne => (1, -1),
            Self::E => (1, 0),
            Self::Se => (1, 1),
            Self::S => (0, 1),
            Self::Sw => (-1, 1),
            Self::W => (-1, 0),
            Self::Nw => (-1, -1),
        };
        DirectionalVector { x, y }
    }

    /// Whether this handle sits on a corner of the selection.
    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Ne | Self::Se | Self::Sw | Self::Nw)
    }

    /// Short name used in generated element ids (`resize-tl`, `resize-b`, ...).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::N => "t",
            Self::Ne => "tr",
            Self::E => "r",
            Self::Se => "br",
            Self::S => "b",
            Self::Sw => "bl",
            Self::W => "l",
            Self::Nw => "tl",
        }
    }

    /// CSS cursor shown while hovering the handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::S => "s-resize",
            Self::E => "e-resize",
            Self::W => "w-resize",
            Self::Nw | Self::Se => "nwse-resize",
            Self::Ne | Self::Sw => "nesw-resize",
        }
    }

    /// Contact point of the handle on `rect`: a corner or the midpoint of a side.
    #[must_use]
    pub fn contact_point(self, rect: Rect) -> Point {
        let v = self.vector();
        let along = |start: f64, extent: f64, component: i8| match component {
            -1 => start,
            0 => start + extent / 2.0,
            _ => start + extent,
        };
        Point::new(along(rect.x, rect.w, v.x), along(rect.y, rect.h, v.y))
    }
}

/// Test which part of `selection` (if any) is under `pt`.
///
/// Both arguments are in the same space, normally container-local. Handles
/// win over the body: corners first, then the left/right side midpoints, then
/// the top/bottom bands, which span the full width like the generated handle
/// elements do. `slop` is the hit radius around each handle.
#[must_use]
pub fn hit_test(selection: Rect, pt: Point, slop: f64) -> Option<HitPart> {
    let near = |target: Point| (pt.x - target.x).abs() <= slop && (pt.y - target.y).abs() <= slop;

    let corner = ResizeAnchor::ALL
        .into_iter()
        .filter(|anchor| anchor.is_corner())
        .find(|anchor| near(anchor.contact_point(selection)));
    if let Some(anchor) = corner {
        return Some(HitPart::ResizeHandle(anchor));
    }

    for anchor in [ResizeAnchor::E, ResizeAnchor::W] {
        if near(anchor.contact_point(selection)) {
            return Some(HitPart::ResizeHandle(anchor));
        }
    }

    let within_width = pt.x >= selection.x && pt.x <= selection.right();
    if within_width && (pt.y - selection.y).abs() <= slop {
        return Some(HitPart::ResizeHandle(ResizeAnchor::N));
    }
    if within_width && (pt.y - selection.bottom()).abs() <= slop {
        return Some(HitPart::ResizeHandle(ResizeAnchor::S));
    }

    selection.contains(pt).then_some(HitPart::Body)
}
