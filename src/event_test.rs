#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;

fn event(kind: EventKind, x: f64) -> SelectionEvent {
    SelectionEvent { kind, detail: Rect::new(x, 2.0, 3.0, 4.0).into() }
}

// =============================================================
// EventKind / EventDetail
// =============================================================

#[test]
fn event_kind_names() {
    assert_eq!(EventKind::Moving.name(), "moving");
    assert_eq!(EventKind::Resizing.name(), "resizing");
}

#[test]
fn event_detail_from_rect() {
    let detail = EventDetail::from(Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(detail.coordinates, Point::new(1.0, 2.0));
    assert_eq!(detail.size, Size::new(3.0, 4.0));
}

#[test]
fn event_detail_serializes_to_dom_shape() {
    let detail = EventDetail::from(Rect::new(1.0, 2.0, 3.0, 4.0));
    let value = serde_json::to_value(detail).unwrap_or_default();
    assert_eq!(
        value,
        json!({
            "coordinates": { "x": 1.0, "y": 2.0 },
            "size": { "w": 3.0, "h": 4.0 },
        })
    );
}

// =============================================================
// Emitter
// =============================================================

#[test]
fn emitter_starts_empty() {
    let emitter = Emitter::new();
    assert!(emitter.is_empty());
    assert_eq!(emitter.len(), 0);
}

#[test]
fn emitter_delivers_to_matching_kind_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut emitter = Emitter::new();
    let sink = Rc::clone(&seen);
    emitter.on(EventKind::Moving, move |e| sink.borrow_mut().push(e.detail.coordinates.x));

    emitter.emit(&event(EventKind::Moving, 1.0));
    emitter.emit(&event(EventKind::Resizing, 2.0));
    emitter.emit(&event(EventKind::Moving, 3.0));

    assert_eq!(*seen.borrow(), vec![1.0, 3.0]);
}

#[test]
fn emitter_preserves_registration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut emitter = Emitter::new();
    for tag in ["first", "second", "third"] {
        let sink = Rc::clone(&seen);
        emitter.on(EventKind::Resizing, move |_| sink.borrow_mut().push(tag));
    }

    emitter.emit(&event(EventKind::Resizing, 0.0));

    assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn emitter_off_removes_listener() {
    let count = Rc::new(RefCell::new(0));
    let mut emitter = Emitter::new();
    let sink = Rc::clone(&count);
    let id = emitter.on(EventKind::Moving, move |_| *sink.borrow_mut() += 1);

    emitter.emit(&event(EventKind::Moving, 0.0));
    assert!(emitter.off(id));
    emitter.emit(&event(EventKind::Moving, 0.0));

    assert_eq!(*count.borrow(), 1);
    assert!(emitter.is_empty());
}

#[test]
fn emitter_off_unknown_id_is_false() {
    let mut emitter = Emitter::new();
    let id = emitter.on(EventKind::Moving, |_| {});
    assert!(emitter.off(id));
    assert!(!emitter.off(id));
}

#[test]
fn emitter_ids_are_unique() {
    let mut emitter = Emitter::new();
    let a = emitter.on(EventKind::Moving, |_| {});
    let b = emitter.on(EventKind::Moving, |_| {});
    assert_ne!(a, b);
    assert_eq!(emitter.len(), 2);
}

#[test]
fn emitter_debug_reports_listener_count() {
    let mut emitter = Emitter::new();
    emitter.on(EventKind::Moving, |_| {});
    assert!(format!("{emitter:?}").contains("listeners: 1"));
}
