//! Delivers drawer notifications to page code.

use js_sys::{Object, Reflect};
use prismatia_drawer::attributes::OPEN_ATTRIBUTE;
use prismatia_drawer::{DrawerEffect, DrawerEvent, SnapPointInput};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

use crate::error::WebPlatformError;

/// Reflects the `open` attribute and dispatches `drawer-*` events on the
/// host element.
///
/// Both can run page listeners synchronously, so [`WebDrawer`] delivers them
/// only after it has released the drawer.
///
/// [`WebDrawer`]: crate::WebDrawer
#[derive(Clone, Debug)]
pub struct DrawerNotifier {
    host: HtmlElement,
}

impl DrawerNotifier {
    pub fn new(host: HtmlElement) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    pub fn deliver(&self, notifications: &[DrawerEffect]) {
        for notification in notifications {
            if let Err(err) = self.try_deliver(notification) {
                log::warn!("failed to deliver {:?}: {}", notification, err);
            }
        }
    }

    pub(crate) fn try_deliver(&self, effect: &DrawerEffect) -> Result<(), WebPlatformError> {
        match effect {
            DrawerEffect::ReflectOpenAttribute(true) => {
                self.host.set_attribute(OPEN_ATTRIBUTE, "")?;
            }
            DrawerEffect::ReflectOpenAttribute(false) => {
                self.host.remove_attribute(OPEN_ATTRIBUTE)?;
            }
            DrawerEffect::Emit(event) => self.dispatch(event)?,
            other => log::trace!("{:?} is not a notification", other),
        }
        Ok(())
    }

    fn dispatch(&self, event: &DrawerEvent) -> Result<(), WebPlatformError> {
        let Some(name) = event.dom_name() else {
            return Ok(());
        };
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        if let DrawerEvent::SnapChanged { point, index } = event {
            let detail = Object::new();
            let snap_point = match &point.value {
                SnapPointInput::Number(value) => JsValue::from_f64(f64::from(*value)),
                SnapPointInput::Length(text) => JsValue::from_str(text),
            };
            Reflect::set(&detail, &JsValue::from_str("snapPoint"), &snap_point)?;
            Reflect::set(&detail, &JsValue::from_str("index"), &JsValue::from(*index as u32))?;
            Reflect::set(
                &detail,
                &JsValue::from_str("offset"),
                &JsValue::from_f64(f64::from(point.offset)),
            )?;
            init.set_detail(&detail);
        }
        let dom_event = CustomEvent::new_with_event_init_dict(name, &init)?;
        self.host.dispatch_event(&dom_event)?;
        Ok(())
    }
}
