//! A [`DrawerSurface`] that records what it was asked to do.

use prismatia_drawer::{DrawerEffect, DrawerEvent, DrawerSurface, StyleProperty};
use prismatia_foundation::PointerId;

use crate::scroll_tree::TestNode;

/// Records every applied effect and tracks the state a real surface would
/// end up in.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    effects: Vec<DrawerEffect>,
    panel: Option<TestNode>,
    dialog_open: bool,
    modal: bool,
    open_attribute: bool,
    swiping: bool,
    captured: Vec<PointerId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose panel content lives under `panel`.
    pub fn with_panel(panel: TestNode) -> Self {
        Self {
            panel: Some(panel),
            ..Self::default()
        }
    }

    pub fn effects(&self) -> &[DrawerEffect] {
        &self.effects
    }

    pub fn events(&self) -> Vec<DrawerEvent> {
        self.effects
            .iter()
            .filter_map(|effect| effect.event().cloned())
            .collect()
    }

    /// Every value written to `property`, oldest first.
    pub fn style_writes(&self, property: StyleProperty) -> Vec<f32> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                DrawerEffect::SetStyle(written, value) if *written == property => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn last_style(&self, property: StyleProperty) -> Option<f32> {
        self.style_writes(property).last().copied()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn has_open_attribute(&self) -> bool {
        self.open_attribute
    }

    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    pub fn captured_pointers(&self) -> &[PointerId] {
        &self.captured
    }

    /// Forgets recorded effects; tracked state is kept.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl DrawerSurface for RecordingSurface {
    type Node = TestNode;

    fn apply(&mut self, effect: &DrawerEffect) {
        match effect {
            DrawerEffect::PresentDialog { modal } => {
                self.dialog_open = true;
                self.modal = *modal;
            }
            DrawerEffect::CloseDialog => self.dialog_open = false,
            DrawerEffect::ReflectOpenAttribute(open) => self.open_attribute = *open,
            DrawerEffect::SetSwiping(swiping) => self.swiping = *swiping,
            DrawerEffect::CapturePointer(pointer) => self.captured.push(*pointer),
            DrawerEffect::SetStyle(..) | DrawerEffect::Emit(_) => {}
        }
        log::trace!("surface applied {:?}", effect);
        self.effects.push(effect.clone());
    }

    fn panel_root(&self) -> Option<TestNode> {
        self.panel.clone()
    }
}
