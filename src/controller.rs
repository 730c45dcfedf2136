//! Selection controller: the gesture state machine wired to the geometry
//! functions and the listener registry.
//!
//! The controller holds no browser handles, so it can be tested natively and
//! driven by any host that can report pointer positions in client space.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::{Config, Settings};
use crate::event::{Emitter, EventDetail, EventKind, ListenerId, SelectionEvent};
use crate::geometry::{Anchors, Container, DragStart, Point, Rect, Size, clamp, compute_move, compute_resize};
use crate::hit::{self, HitPart};
use crate::input::GestureState;

/// Owns one selection, its container, the active gesture and the listeners.
#[derive(Debug)]
pub struct Controller {
    container: Container,
    selection: Rect,
    min: Size,
    state: GestureState,
    emitter: Emitter,
}

impl Controller {
    /// Create a controller for `container`, resolving `config` against its size.
    #[must_use]
    pub fn new(container: Container, config: &Config) -> Self {
        Self::with_settings(container, config.resolve(container.size))
    }

    #[must_use]
    pub fn with_settings(container: Container, settings: Settings) -> Self {
        Self {
            container,
            selection: settings.initial,
            min: settings.min,
            state: GestureState::Idle,
            emitter: Emitter::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// Current selection rectangle in container-local coordinates.
    #[must_use]
    pub fn selection(&self) -> Rect {
        self.selection
    }

    #[must_use]
    pub fn min_size(&self) -> Size {
        self.min
    }

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Notification payload for the current selection, without emitting it.
    #[must_use]
    pub fn detail(&self) -> EventDetail {
        self.selection.into()
    }

    /// Which part of the selection is under a client-space point.
    #[must_use]
    pub fn hit(&self, client: Point, slop: f64) -> Option<HitPart> {
        hit::hit_test(self.selection, self.container.to_local(client), slop)
    }

    // --- Listeners ---

    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(&SelectionEvent) + 'static) -> ListenerId {
        self.emitter.on(kind, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    // --- Container ---

    /// Record where the container currently sits in client space.
    ///
    /// Hosts call this before forwarding pointer events so scrolling or layout
    /// shifts between events do not skew the conversion to local coordinates.
    pub fn relocate(&mut self, origin: Point) {
        self.container.origin = origin;
    }

    /// Re-read the container's rendered size and pull the selection back inside.
    ///
    /// Any active gesture ends first: its anchors were measured against the
    /// old bounds.
    pub fn resize_container(&mut self, size: Size) {
        self.end_gesture();
        self.container.size = size;

        let w = clamp(self.selection.w, self.min.w, size.w);
        let h = clamp(self.selection.h, self.min.h, size.h);
        let x = clamp(self.selection.x, 0.0, size.w - w);
        let y = clamp(self.selection.y, 0.0, size.h - h);
        self.selection = Rect::new(x, y, w, h);
        log::debug!("container resized to {}x{}; selection {:?}", size.w, size.h, self.selection);
    }

    // --- Pointer input ---

    /// Start a gesture on `target`. Returns `false` if one is already active.
    pub fn pointer_down(&mut self, target: HitPart, client: Point) -> bool {
        if !self.state.is_idle() {
            log::debug!("pointer-down on {target:?} ignored: gesture already active");
            return false;
        }

        self.state = match target {
            HitPart::Body => {
                let top_left = self.container.origin + self.selection.origin();
                GestureState::Moving { pointer_offset: top_left - client }
            }
            HitPart::ResizeHandle(anchor) => {
                let vector = anchor.vector();
                GestureState::Resizing {
                    vector,
                    start: DragStart { size: self.selection.size(), pointer: client },
                    anchors: Anchors::for_resize(vector, self.selection, self.container.size),
                }
            }
        };
        log::debug!("gesture started: {:?}", self.state);
        true
    }

    /// Apply a pointer-move to the active gesture and notify listeners.
    ///
    /// Returns the emitted notification, or `None` when idle.
    pub fn pointer_move(&mut self, client: Point) -> Option<SelectionEvent> {
        let kind = self.state.event_kind()?;

        if let GestureState::Moving { pointer_offset } = self.state {
            let origin = compute_move(&self.container, self.selection.size(), client, pointer_offset);
            self.selection = Rect::from_parts(origin, self.selection.size());
        }

        if let GestureState::Resizing { vector, start, anchors } = self.state {
            self.selection = compute_resize(vector, &start, client, self.container.size, anchors, self.min);
        }

        let event = SelectionEvent { kind, detail: self.detail() };
        self.emitter.emit(&event);
        Some(event)
    }

    /// End the active gesture. Safe to call when idle.
    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// The pointer left the tracked surface; handled exactly like a release.
    pub fn pointer_leave(&mut self) {
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        // The selection is already stored in the leading frame; only the state resets.
        if !self.state.is_idle() {
            log::debug!("gesture ended; selection {:?}", self.selection);
        }
        self.state = GestureState::Idle;
    }
}
