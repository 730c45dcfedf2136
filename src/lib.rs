//! Select-area overlay widget for images and other host elements.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Attaching it
//! to a host element places a translucent container over the host and a
//! draggable, resizable selection box inside it. Every applied move or resize
//! is reported to listeners as a `moving` / `resizing` notification carrying
//! the selection's coordinates and size.
//!
//! All geometry and gesture handling lives in a browser-free core so it can be
//! tested natively and driven by non-DOM hosts (e.g. a canvas renderer using
//! [`hit::hit_test`]). The [`widget`] module is the only place that touches
//! `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Selection controller: gesture state machine plus emitter |
//! | [`geometry`] | Points, sizes, rects and the pure move/resize math |
//! | [`input`] | Gesture state and per-axis anchor bookkeeping |
//! | [`hit`] | Resize handles, directional vectors and hit-testing |
//! | [`event`] | Notification payloads and listener registry |
//! | [`config`] | User configuration and resolved settings |
//! | [`instance`] | Per-instance identifiers and element ids |
//! | [`error`] | Attach errors |
//! | [`widget`] | DOM structure, event wiring and the wasm entry points |
//! | [`consts`] | Shared numeric and naming constants |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod instance;
pub mod widget;
