//! A surface that prints what a browser would render.

use prismatia_drawer::{DrawerEffect, DrawerSurface};
use prismatia_foundation::{Overflow, ScrollMetrics, ScrollNode};

/// The demo panel has no nested scroll regions.
#[derive(Clone, Debug)]
pub struct FlatNode;

impl ScrollNode for FlatNode {
    fn parent(&self) -> Option<Self> {
        None
    }

    fn overflow_y(&self) -> Overflow {
        Overflow::Visible
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::default()
    }

    fn is_same_node(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct ConsoleSurface {
    applied: usize,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl DrawerSurface for ConsoleSurface {
    type Node = FlatNode;

    fn apply(&mut self, effect: &DrawerEffect) {
        self.applied += 1;
        match effect {
            DrawerEffect::SetStyle(property, value) => {
                log::debug!("{}: {}", property.css_name(), property.format_value(*value));
            }
            DrawerEffect::SetSwiping(swiping) => log::debug!("swiping class: {}", swiping),
            DrawerEffect::PresentDialog { modal } => {
                log::info!("dialog shown{}", if *modal { " (modal)" } else { "" });
            }
            DrawerEffect::CloseDialog => log::info!("dialog closed"),
            DrawerEffect::ReflectOpenAttribute(open) => log::debug!("open attribute: {}", open),
            DrawerEffect::CapturePointer(pointer) => log::debug!("captured pointer {}", pointer),
            DrawerEffect::Emit(event) => match event.dom_name() {
                Some(name) => log::info!("event {}: {}", name, event),
                None => log::info!("{}", event),
            },
        }
    }
}
