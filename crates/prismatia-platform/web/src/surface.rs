//! Applies drawer effects to the DOM.

use prismatia_animation::AnimationSpec;
use prismatia_drawer::constants::DEFAULT_SWIPE_STRENGTH;
use prismatia_drawer::{DrawerEffect, DrawerSurface, StyleProperty};
use web_sys::{HtmlDialogElement, HtmlElement};

use crate::error::WebPlatformError;
use crate::node::ElementNode;
use crate::notify::DrawerNotifier;
use crate::styles::SWIPING_CLASS;

/// Writes effects into the drawer's markup.
///
/// Panel offsets and the settle strength are custom properties on the
/// panel; the backdrop opacity lives on the dialog so `::backdrop` can read
/// it. Notifications that reach the surface are delivered on the spot; a
/// host built with deferred notifications hands them to the
/// [`DrawerNotifier`] instead. The panel's inline `transition` tracks the
/// settle strength and is cleared while swiping.
pub struct WebDrawerSurface {
    notifier: DrawerNotifier,
    dialog: HtmlDialogElement,
    panel: HtmlElement,
    swipe_strength: f32,
    swiping: bool,
}

impl WebDrawerSurface {
    pub fn new(host: HtmlElement, dialog: HtmlDialogElement, panel: HtmlElement) -> Self {
        Self {
            notifier: DrawerNotifier::new(host),
            dialog,
            panel,
            swipe_strength: DEFAULT_SWIPE_STRENGTH,
            swiping: false,
        }
    }

    pub fn host(&self) -> &HtmlElement {
        self.notifier.host()
    }

    pub fn panel(&self) -> &HtmlElement {
        &self.panel
    }

    fn try_apply(&mut self, effect: &DrawerEffect) -> Result<(), WebPlatformError> {
        match effect {
            DrawerEffect::SetStyle(property, value) => {
                let style = match property {
                    StyleProperty::BackdropOpacity => self.dialog.style(),
                    _ => self.panel.style(),
                };
                style.set_property(property.css_name(), &property.format_value(*value))?;
                if *property == StyleProperty::SwipeStrength {
                    self.swipe_strength = *value;
                    self.update_transition()?;
                }
            }
            DrawerEffect::SetSwiping(swiping) => {
                self.swiping = *swiping;
                let classes = self.panel.class_list();
                if *swiping {
                    classes.add_1(SWIPING_CLASS)?;
                } else {
                    classes.remove_1(SWIPING_CLASS)?;
                }
                self.update_transition()?;
            }
            DrawerEffect::PresentDialog { modal } => {
                if !self.dialog.open() {
                    if *modal {
                        self.dialog.show_modal()?;
                    } else {
                        self.dialog.show();
                    }
                }
            }
            DrawerEffect::CloseDialog => {
                if self.dialog.open() {
                    self.dialog.close();
                }
            }
            DrawerEffect::ReflectOpenAttribute(_) | DrawerEffect::Emit(_) => {
                self.notifier.try_deliver(effect)?;
            }
            DrawerEffect::CapturePointer(pointer) => {
                let pointer = i32::try_from(*pointer)
                    .map_err(|_| WebPlatformError::Js(format!("pointer id {} out of range", pointer)))?;
                self.panel.set_pointer_capture(pointer)?;
            }
        }
        Ok(())
    }

    fn update_transition(&self) -> Result<(), WebPlatformError> {
        let transition = if self.swiping {
            "none".to_string()
        } else {
            AnimationSpec::settle(self.swipe_strength).to_css_transition("transform")
        };
        self.panel.style().set_property("transition", &transition)?;
        Ok(())
    }
}

impl DrawerSurface for WebDrawerSurface {
    type Node = ElementNode;

    fn apply(&mut self, effect: &DrawerEffect) {
        if let Err(err) = self.try_apply(effect) {
            log::warn!("failed to apply {:?}: {}", effect, err);
        }
    }

    fn panel_root(&self) -> Option<ElementNode> {
        let panel: &web_sys::Element = self.panel.as_ref();
        Some(ElementNode::new(panel.clone()))
    }
}
