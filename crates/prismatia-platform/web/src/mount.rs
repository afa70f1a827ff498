//! Mounting a drawer onto a host element.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use prismatia_drawer::attributes::{OBSERVED_ATTRIBUTES, OPEN_ATTRIBUTE, SNAP_POINTS_ATTRIBUTE};
use prismatia_drawer::{DrawerHost, DrawerOptions, PanelMetrics};
use prismatia_ui_graphics::DEFAULT_ROOT_FONT_SIZE;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlDialogElement, HtmlElement,
    ResizeObserver, Window,
};

use crate::error::WebPlatformError;
use crate::events::WebPlatform;
use crate::node::ElementNode;
use crate::notify::DrawerNotifier;
use crate::styles::{drawer_stylesheet, DIALOG_CLASS};
use crate::surface::WebDrawerSurface;

type SharedHost = Rc<RefCell<DrawerHost<WebDrawerSurface>>>;
type WeakHost = Weak<RefCell<DrawerHost<WebDrawerSurface>>>;

const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];
const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Markup created inside the host element.
struct DrawerParts {
    dialog: HtmlDialogElement,
    panel: HtmlElement,
}

/// A drawer mounted on a DOM element.
///
/// Mounting moves the host's children into the panel content area. Dropping
/// the handle removes every listener and detaches the drawer; the markup
/// stays in place.
///
/// `drawer-open`, `drawer-close` and `drawer-snap` events and the `open`
/// attribute are delivered after the drawer finishes the call that caused
/// them, so listeners may call back into the drawer.
pub struct WebDrawer {
    host: SharedHost,
    notifier: DrawerNotifier,
    listeners: Vec<Listener>,
    resize_observer: Option<(ResizeObserver, Closure<dyn FnMut(JsValue)>)>,
}

impl WebDrawer {
    pub fn mount(element: HtmlElement, options: DrawerOptions) -> Result<Self, WebPlatformError> {
        let window = web_sys::window().ok_or(WebPlatformError::NoWindow)?;
        let document = window.document().ok_or(WebPlatformError::NoDocument)?;
        let parts = build_parts(&document, &element)?;

        let metrics = measure(&window, &parts.panel);
        let surface = WebDrawerSurface::new(element.clone(), parts.dialog.clone(), parts.panel.clone());
        let host = DrawerHost::new(options, metrics, surface).defer_notifications();
        let mut drawer = Self {
            host: Rc::new(RefCell::new(host)),
            notifier: DrawerNotifier::new(element.clone()),
            listeners: Vec::new(),
            resize_observer: None,
        };

        drawer.listen_gestures(&parts.panel)?;
        drawer.listen(&element, "keydown", true, |host, event| {
            let Some(key) = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .and_then(|dom| WebPlatform::new().key_event(dom))
            else {
                return;
            };
            if host.handle_key(&key) {
                event.prevent_default();
            }
        })?;
        drawer.listen(&parts.dialog, "cancel", false, |host, event| {
            event.prevent_default();
            host.dialog_cancelled();
        })?;
        let panel = parts.panel.clone();
        drawer.listen(&window, "resize", true, move |host, _event| {
            if let Some(window) = web_sys::window() {
                host.resize(measure(&window, &panel));
            }
        })?;
        drawer.observe_panel_size(&parts.panel)?;

        let snap_points = element.get_attribute(SNAP_POINTS_ATTRIBUTE);
        let open = element.has_attribute(OPEN_ATTRIBUTE);
        drawer.with_host(|host| {
            host.attach();
            host.set_snap_points_attribute(snap_points.as_deref());
            if open {
                host.set_open_attribute(true);
            }
        });
        log::debug!("drawer mounted");
        Ok(drawer)
    }

    /// Attributes a custom element wrapper should forward to
    /// [`attribute_changed`](Self::attribute_changed).
    pub fn observed_attributes() -> &'static [&'static str] {
        &OBSERVED_ATTRIBUTES
    }

    pub fn attribute_changed(&self, name: &str, value: Option<&str>) {
        self.with_host(|host| host.attribute_changed(name, value));
    }

    pub fn show(&self) {
        self.with_host(|host| host.show());
    }

    pub fn hide(&self) {
        self.with_host(|host| host.hide());
    }

    pub fn snap_to(&self, index: usize) {
        self.with_host(|host| host.snap_to(index));
    }

    pub fn configure(&self, options: DrawerOptions) {
        self.with_host(|host| host.configure(options));
    }

    pub fn is_open(&self) -> bool {
        self.with_host(|host| host.drawer().is_open())
            .unwrap_or_default()
    }

    pub fn active_snap_index(&self) -> Option<usize> {
        self.with_host(|host| host.drawer().active_snap_index())
    }

    fn with_host<R>(
        &self,
        f: impl FnOnce(&mut DrawerHost<WebDrawerSurface>) -> R,
    ) -> Option<R> {
        let (result, notifications) = {
            let Ok(mut host) = self.host.try_borrow_mut() else {
                log::warn!("drawer call ignored while the drawer is busy");
                return None;
            };
            let result = f(&mut host);
            (result, host.take_notifications())
        };
        self.notifier.deliver(&notifications);
        Some(result)
    }

    fn listen_gestures(&mut self, panel: &HtmlElement) -> Result<(), WebPlatformError> {
        for kind in POINTER_EVENTS {
            self.listen(panel, kind, true, |host, event| {
                let Some(input) = event
                    .dyn_ref::<web_sys::PointerEvent>()
                    .and_then(|dom| WebPlatform::new().pointer_event(dom))
                else {
                    return;
                };
                let target = ElementNode::from_event(event);
                host.handle_pointer(&input, target.as_ref());
            })?;
        }
        // Touch listeners must not be passive so vertical drags can stop the
        // page from scrolling.
        for kind in TOUCH_EVENTS {
            self.listen(panel, kind, false, |host, event| {
                let Some(input) = event
                    .dyn_ref::<web_sys::TouchEvent>()
                    .and_then(|dom| WebPlatform::new().touch_event(dom))
                else {
                    return;
                };
                let target = ElementNode::from_event(event);
                host.handle_pointer(&input, target.as_ref());
                if input.is_consumed() {
                    event.prevent_default();
                }
            })?;
        }
        Ok(())
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Result<(), WebPlatformError>
    where
        F: FnMut(&mut DrawerHost<WebDrawerSurface>, &Event) + 'static,
    {
        let host = Rc::downgrade(&self.host);
        let notifier = self.notifier.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            with_weak_host(&host, &notifier, kind, |host| handler(host, &event));
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    fn observe_panel_size(&mut self, panel: &HtmlElement) -> Result<(), WebPlatformError> {
        let host = Rc::downgrade(&self.host);
        let notifier = self.notifier.clone();
        let measured = panel.clone();
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |_entries: JsValue| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let metrics = measure(&window, &measured);
            with_weak_host(&host, &notifier, "resize-observer", |host| host.resize(metrics));
        });
        let observer = ResizeObserver::new(closure.as_ref().unchecked_ref())?;
        observer.observe(panel);
        self.resize_observer = Some((observer, closure));
        Ok(())
    }
}

impl Drop for WebDrawer {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let removed = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
            if let Err(err) = removed {
                log::warn!(
                    "failed to remove {} listener: {}",
                    listener.kind,
                    WebPlatformError::from(err)
                );
            }
        }
        if let Some((observer, _closure)) = self.resize_observer.take() {
            observer.disconnect();
        }
        self.with_host(|host| host.detach());
        log::debug!("drawer unmounted");
    }
}

/// Runs `f` against a live host, then delivers the notifications it queued
/// once the host is released.
fn with_weak_host(
    host: &WeakHost,
    notifier: &DrawerNotifier,
    source: &str,
    f: impl FnOnce(&mut DrawerHost<WebDrawerSurface>),
) {
    let Some(shared) = host.upgrade() else {
        return;
    };
    let notifications = {
        let Ok(mut host) = shared.try_borrow_mut() else {
            log::warn!("re-entrant {} ignored", source);
            return;
        };
        f(&mut host);
        host.take_notifications()
    };
    notifier.deliver(&notifications);
}

/// Builds `style + dialog > .popup > (.handle-area > .handle-bar, .content)`
/// and moves the host's children into `.content`.
fn build_parts(document: &Document, host: &HtmlElement) -> Result<DrawerParts, WebPlatformError> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(&drawer_stylesheet()));
    let dialog = create::<HtmlDialogElement>(document, "dialog")?;
    dialog.set_class_name(DIALOG_CLASS);
    let panel = create::<HtmlElement>(document, "div")?;
    panel.set_class_name("popup");
    let handle_area = create::<HtmlElement>(document, "div")?;
    handle_area.set_class_name("handle-area");
    let handle_bar = create::<HtmlElement>(document, "div")?;
    handle_bar.set_class_name("handle-bar");
    let content = create::<HtmlElement>(document, "div")?;
    content.set_class_name("content");

    while let Some(child) = host.first_child() {
        content.append_child(&child)?;
    }
    handle_area.append_child(&handle_bar)?;
    panel.append_child(&handle_area)?;
    panel.append_child(&content)?;
    dialog.append_child(&panel)?;
    host.append_child(&style)?;
    host.append_child(&dialog)?;
    Ok(DrawerParts { dialog, panel })
}

fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, WebPlatformError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| WebPlatformError::UnexpectedElement(tag))
}

fn measure(window: &Window, panel: &HtmlElement) -> PanelMetrics {
    let panel_height = panel.get_bounding_client_rect().height() as f32;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default() as f32;
    PanelMetrics::new(panel_height, viewport_height).with_root_font_size(root_font_size(window))
}

fn root_font_size(window: &Window) -> f32 {
    window
        .document()
        .and_then(|document| document.document_element())
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("font-size").ok())
        .and_then(|value| parse_css_px(&value))
        .unwrap_or(DEFAULT_ROOT_FONT_SIZE)
}

/// Parses a computed `px` value such as `"16px"`.
fn parse_css_px(value: &str) -> Option<f32> {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}
