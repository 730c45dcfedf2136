//! DOM binding: builds the overlay next to a host element, forwards mouse
//! events to a [`Controller`], repaints the selection and re-dispatches each
//! notification on the host as a `CustomEvent`.
//!
//! Attaching is all-or-nothing. Elements are created and styled before
//! anything is inserted, and if a listener fails to bind, the listeners
//! already bound are removed along with the inserted overlay and the host
//! marker.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "widget_dom_test.rs"]
mod widget_dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::JSON;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{CustomEvent, CustomEventInit, Document, EventTarget, HtmlElement, MouseEvent};

use crate::config::Config;
use crate::consts::{HANDLE_CLASS, HANDLE_RADIUS_PX, HANDLE_SIZE_PX, INSTANCE_MARKER_ATTR};
use crate::controller::Controller;
use crate::error::WidgetError;
use crate::event::{EventKind, SelectionEvent};
use crate::geometry::{Container, Point, Rect, Size};
use crate::hit::{HitPart, ResizeAnchor};
use crate::instance::InstanceId;

type Shared = Rc<RefCell<Controller>>;
type MouseCallback = Closure<dyn FnMut(MouseEvent)>;

/// Outcome of [`mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// A new widget was attached.
    Mounted(InstanceId),
    /// The host already carries a widget; nothing was done.
    AlreadyAttached,
}

/// Attach a select-area widget to `host`.
///
/// `config` is an optional options object (`minWidth`, `minHeight`,
/// `initialSize`, `initialPosition`). Attaching twice to the same host is a
/// no-op.
///
/// # Errors
///
/// Throws if the options cannot be decoded or the overlay cannot be built.
#[wasm_bindgen]
pub fn attach(host: &HtmlElement, config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(&config)?;
    match mount(host, config) {
        Ok(_) => Ok(()),
        Err(err) => {
            log::warn!("select-area attach failed: {err}");
            Err(err.into())
        }
    }
}

/// Route `log` records to the browser console at `level` (`"debug"`, `"info"`, ...).
///
/// # Errors
///
/// Throws if a logger is already installed.
#[cfg(feature = "console")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Decode an options object passed from JavaScript. `undefined` and `null` mean defaults.
///
/// # Errors
///
/// Returns [`WidgetError::InvalidConfig`] when the object does not match [`Config`].
pub fn config_from_js(value: &JsValue) -> Result<Config, WidgetError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Config::default());
    }
    let json: String = JSON::stringify(value)?.into();
    Config::from_json(&json).map_err(WidgetError::InvalidConfig)
}

/// Attach a widget to `host` and return its instance id.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when the host has no document or
/// body, and [`WidgetError::Dom`] when creating, inserting or binding fails.
/// Nothing is left behind on error.
pub fn mount(host: &HtmlElement, config: Config) -> Result<Attachment, WidgetError> {
    if host.has_attribute(INSTANCE_MARKER_ATTR) {
        log::debug!("host already carries a select-area widget");
        return Ok(Attachment::AlreadyAttached);
    }

    let document = host.owner_document().ok_or(WidgetError::MissingElement("document"))?;
    let body = document.body().ok_or(WidgetError::MissingElement("document body"))?;

    let id = InstanceId::allocate();
    let host_rect = host.get_bounding_client_rect();
    let container = Container::new(
        Point::new(host_rect.left(), host_rect.top()),
        Size::new(host_rect.width(), host_rect.height()),
    );
    let controller = Controller::new(container, &config);
    let elements = Elements::build(&document, id, &controller)?;

    host.insert_adjacent_element("afterend", &elements.area)?;
    if let Err(err) = host.set_attribute(INSTANCE_MARKER_ATTR, &id.to_string()) {
        elements.area.remove();
        return Err(err.into());
    }

    let shared: Shared = Rc::new(RefCell::new(controller));
    subscribe_host(&shared, host, &elements.selection);

    if let Err(err) = bind_all(listeners(&shared, &elements, &body)) {
        elements.area.remove();
        if let Err(marker_err) = host.remove_attribute(INSTANCE_MARKER_ATTR) {
            log::warn!("failed to clear instance marker: {marker_err:?}");
        }
        return Err(err);
    }

    log::debug!("select-area {id} attached; selection {:?}", shared.borrow().selection());
    Ok(Attachment::Mounted(id))
}

// --- Structure ---

/// Typed handles to the generated elements.
struct Elements {
    area: HtmlElement,
    selection: HtmlElement,
    handles: Vec<(ResizeAnchor, HtmlElement)>,
}

impl Elements {
    fn build(document: &Document, id: InstanceId, controller: &Controller) -> Result<Self, WidgetError> {
        let container = controller.container();

        let area = create_div(document, &id.element_id("area"))?;
        set_styles(
            &area,
            &[
                ("position", "absolute".to_owned()),
                ("top", "0".to_owned()),
                ("background-color", "rgba(0, 0, 0, 0.05)".to_owned()),
                ("width", px(container.width())),
                ("height", px(container.height())),
            ],
        )?;

        let selection = create_div(document, &id.element_id("area-selected"))?;
        set_styles(
            &selection,
            &[
                ("position", "absolute".to_owned()),
                ("background-color", "rgba(255, 255, 255, 0.70)".to_owned()),
                ("border", "3px dashed black".to_owned()),
                ("box-sizing", "border-box".to_owned()),
            ],
        )?;
        paint(&selection, controller.selection())?;

        let mut handles = Vec::with_capacity(ResizeAnchor::ALL.len());
        for anchor in ResizeAnchor::ALL {
            let handle = create_div(document, &id.element_id(&format!("resize-{}", anchor.key())))?;
            handle.class_list().add_1(HANDLE_CLASS)?;
            set_styles(&handle, &handle_placement(anchor))?;
            selection.append_child(&handle)?;
            handles.push((anchor, handle));
        }
        area.append_child(&selection)?;

        Ok(Self { area, selection, handles })
    }
}

fn create_div(document: &Document, id: &str) -> Result<HtmlElement, WidgetError> {
    let element = document.create_element("div")?;
    element.set_id(id);
    element.dyn_into::<HtmlElement>().map_err(|_| WidgetError::MissingElement("div element"))
}

fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) -> Result<(), WidgetError> {
    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Inline placement for a handle, relative to the selection element.
///
/// Corners and the left/right handles sit centred on their contact point; the
/// top/bottom handles stretch across the full width.
fn handle_placement(anchor: ResizeAnchor) -> Vec<(&'static str, String)> {
    let outset = px(-HANDLE_RADIUS_PX);
    let mut styles = vec![
        ("position", "absolute".to_owned()),
        ("height", px(HANDLE_SIZE_PX)),
        ("cursor", anchor.cursor().to_owned()),
    ];

    let v = anchor.vector();
    match v.x() {
        -1 => styles.extend([("left", outset.clone()), ("width", px(HANDLE_SIZE_PX))]),
        1 => styles.extend([("right", outset.clone()), ("width", px(HANDLE_SIZE_PX))]),
        _ => styles.extend([("left", "0".to_owned()), ("right", "0".to_owned())]),
    }
    match v.y() {
        -1 => styles.push(("top", outset)),
        1 => styles.push(("bottom", outset)),
        _ => styles.push(("top", format!("calc(50% - {})", px(HANDLE_RADIUS_PX)))),
    }
    styles
}

/// Write `rect` into the selection element's inline geometry.
fn paint(selection: &HtmlElement, rect: Rect) -> Result<(), WidgetError> {
    set_styles(
        selection,
        &[("left", px(rect.x)), ("top", px(rect.y)), ("width", px(rect.w)), ("height", px(rect.h))],
    )
}

// --- Notifications ---

/// Repaint and re-dispatch every controller notification on the host.
fn subscribe_host(shared: &Shared, host: &HtmlElement, selection: &HtmlElement) {
    let mut controller = shared.borrow_mut();
    for kind in [EventKind::Moving, EventKind::Resizing] {
        let host = host.clone();
        let selection = selection.clone();
        controller.on(kind, move |event| {
            let rect = Rect::from_parts(event.detail.coordinates, event.detail.size);
            if let Err(err) = paint(&selection, rect) {
                log::warn!("failed to repaint selection: {err}");
            }
            if let Err(err) = dispatch(&host, event) {
                log::warn!("failed to dispatch {}: {err}", event.kind.name());
            }
        });
    }
}

fn dispatch(host: &HtmlElement, event: &SelectionEvent) -> Result<(), WidgetError> {
    let json = serde_json::to_string(&event.detail).map_err(WidgetError::Encode)?;
    let init = CustomEventInit::new();
    init.set_detail(&JSON::parse(&json)?);
    let custom = CustomEvent::new_with_event_init_dict(event.kind.name(), &init)?;
    host.dispatch_event(&custom)?;
    Ok(())
}

// --- Listeners ---

struct Binding {
    target: EventTarget,
    kind: &'static str,
    callback: MouseCallback,
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Run `f` against the controller unless it is already borrowed by a re-entrant dispatch.
fn with_controller(shared: &Shared, f: impl FnOnce(&mut Controller)) {
    match shared.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("select-area controller busy; event dropped"),
    }
}

fn relocate(controller: &mut Controller, area: &HtmlElement) {
    let rect = area.get_bounding_client_rect();
    controller.relocate(Point::new(rect.left(), rect.top()));
}

fn listeners(shared: &Shared, elements: &Elements, body: &HtmlElement) -> Vec<Binding> {
    let mut bindings = Vec::with_capacity(elements.handles.len() + 4);

    let (state, area) = (Rc::clone(shared), elements.area.clone());
    bindings.push(Binding {
        target: elements.selection.clone().into(),
        kind: "mousedown",
        callback: Closure::wrap(Box::new(move |event: MouseEvent| {
            with_controller(&state, |controller| {
                relocate(controller, &area);
                controller.pointer_down(HitPart::Body, client_point(&event));
            });
        }) as Box<dyn FnMut(MouseEvent)>),
    });

    for (anchor, handle) in &elements.handles {
        let (state, anchor) = (Rc::clone(shared), *anchor);
        bindings.push(Binding {
            target: handle.clone().into(),
            kind: "mousedown",
            callback: Closure::wrap(Box::new(move |event: MouseEvent| {
                // Keep the body's mousedown from starting a move as well.
                event.stop_propagation();
                with_controller(&state, |controller| {
                    controller.pointer_down(HitPart::ResizeHandle(anchor), client_point(&event));
                });
            }) as Box<dyn FnMut(MouseEvent)>),
        });
    }

    let (state, area) = (Rc::clone(shared), elements.area.clone());
    bindings.push(Binding {
        target: body.clone().into(),
        kind: "mousemove",
        callback: Closure::wrap(Box::new(move |event: MouseEvent| {
            with_controller(&state, |controller| {
                if controller.is_idle() {
                    return;
                }
                relocate(controller, &area);
                controller.pointer_move(client_point(&event));
            });
        }) as Box<dyn FnMut(MouseEvent)>),
    });

    let release: [(&'static str, fn(&mut Controller)); 2] =
        [("mouseup", Controller::pointer_up), ("mouseleave", Controller::pointer_leave)];
    for (kind, end) in release {
        let state = Rc::clone(shared);
        bindings.push(Binding {
            target: body.clone().into(),
            kind,
            callback: Closure::wrap(Box::new(move |_event: MouseEvent| {
                with_controller(&state, end);
            }) as Box<dyn FnMut(MouseEvent)>),
        });
    }

    bindings
}

/// Bind every listener or none of them.
fn bind_all(bindings: Vec<Binding>) -> Result<(), WidgetError> {
    let mut bound: Vec<Binding> = Vec::with_capacity(bindings.len());
    for binding in bindings {
        if let Err(err) = binding
            .target
            .add_event_listener_with_callback(binding.kind, binding.callback.as_ref().unchecked_ref())
        {
            unbind(&bound);
            return Err(err.into());
        }
        bound.push(binding);
    }

    // Widgets live as long as the page, so the callbacks are never dropped.
    for Binding { callback, .. } in bound {
        callback.forget();
    }
    Ok(())
}

fn unbind(bound: &[Binding]) {
    for binding in bound {
        if let Err(err) = binding
            .target
            .remove_event_listener_with_callback(binding.kind, binding.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", binding.kind);
        }
    }
}
