//! Gesture state machine types.
//!
//! `GestureState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying everything the geometry functions need on each
//! pointer-move. Only one gesture is ever active; the controller ignores
//! pointer-downs until the state returns to [`GestureState::Idle`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::event::EventKind;
use crate::geometry::{Anchors, DragStart, Edge, Point};
use crate::hit::DirectionalVector;

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the selection body.
    Moving {
        /// Vector from the pointer to the selection's client-space top-left at pointer-down.
        pointer_offset: Point,
    },
    /// The user is dragging one of the resize handles.
    Resizing {
        /// Vector bound to the handle being dragged.
        vector: DirectionalVector,
        /// Selection size and pointer position at pointer-down.
        start: DragStart,
        /// Which edge of each axis stays fixed for the rest of the gesture.
        anchors: Anchors,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The notification kind emitted for pointer-moves in this state.
    #[must_use]
    pub fn event_kind(&self) -> Option<EventKind> {
        match self {
            Self::Idle => None,
            Self::Moving { .. } => Some(EventKind::Moving),
            Self::Resizing { .. } => Some(EventKind::Resizing),
        }
    }

    /// Whether either axis of an active resize is anchored at its trailing edge.
    #[must_use]
    pub fn is_anchor_flipped(&self) -> bool {
        match self {
            Self::Resizing { anchors, .. } => anchors.x.edge == Edge::Trailing || anchors.y.edge == Edge::Trailing,
            _ => false,
        }
    }
}
