//! Notifications emitted while the selection is moved or resized.
//!
//! The controller builds one [`SelectionEvent`] per applied pointer-move and
//! hands it to every listener subscribed to its kind, synchronously and in
//! registration order. Nothing is buffered or coalesced.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::fmt;

use serde::Serialize;

use crate::consts::{MOVING_EVENT, RESIZING_EVENT};
use crate::geometry::{Point, Rect, Size};

/// Which gesture produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Moving,
    Resizing,
}

impl EventKind {
    /// DOM event name dispatched on the host element.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Moving => MOVING_EVENT,
            Self::Resizing => RESIZING_EVENT,
        }
    }
}

/// Payload carried by every notification; serializes to
/// `{"coordinates":{"x":..,"y":..},"size":{"w":..,"h":..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventDetail {
    /// Top-left corner of the selection relative to its container.
    pub coordinates: Point,
    pub size: Size,
}

impl From<Rect> for EventDetail {
    fn from(rect: Rect) -> Self {
        Self { coordinates: rect.origin(), size: rect.size() }
    }
}

/// A notification tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionEvent {
    pub kind: EventKind,
    pub detail: EventDetail,
}

/// Handle returned by [`Emitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&SelectionEvent)>;

struct Listener {
    id: ListenerId,
    kind: EventKind,
    callback: Callback,
}

/// Listener registry owned by a single controller.
#[derive(Default)]
pub struct Emitter {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").field("listeners", &self.listeners.len()).finish()
    }
}

impl Emitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `callback` to notifications of `kind`.
    pub fn on(&mut self, kind: EventKind, callback: impl FnMut(&SelectionEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, kind, callback: Box::new(callback) });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener of its kind.
    pub fn emit(&mut self, event: &SelectionEvent) {
        for listener in self.listeners.iter_mut().filter(|l| l.kind == event.kind) {
            (listener.callback)(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
