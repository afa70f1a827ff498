use prismatia_foundation::{Overflow, ScrollMetrics, ScrollNode};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// A DOM element seen by the scroll-boundary walk.
#[derive(Clone, Debug)]
pub struct ElementNode(Element);

impl ElementNode {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    /// Innermost element the event was dispatched to, looking through
    /// shadow roots.
    pub fn from_event(event: &Event) -> Option<Self> {
        event
            .composed_path()
            .get(0)
            .dyn_into::<Element>()
            .ok()
            .or_else(|| event.target()?.dyn_into::<Element>().ok())
            .map(Self)
    }

    fn computed_overflow_y(&self) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.0).ok()??;
        style.get_property_value("overflow-y").ok()
    }
}

impl ScrollNode for ElementNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn overflow_y(&self) -> Overflow {
        self.computed_overflow_y()
            .map(|value| Overflow::parse(&value))
            .unwrap_or_default()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.0.scroll_top() as f32,
            self.0.scroll_height() as f32,
            self.0.client_height() as f32,
        )
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }
}
