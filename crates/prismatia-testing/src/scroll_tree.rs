//! In-memory node tree for scroll-boundary tests.

use std::cell::Cell;
use std::rc::Rc;

use prismatia_foundation::{Overflow, ScrollMetrics, ScrollNode};

struct NodeData {
    parent: Option<TestNode>,
    overflow: Overflow,
    metrics: Cell<ScrollMetrics>,
}

/// Reference-counted tree node. Clones share identity.
#[derive(Clone)]
pub struct TestNode(Rc<NodeData>);

impl TestNode {
    /// A node that never scrolls.
    pub fn root() -> Self {
        Self::build(None, Overflow::Visible, ScrollMetrics::default())
    }

    pub fn child(parent: &TestNode) -> Self {
        Self::build(Some(parent), Overflow::Visible, ScrollMetrics::default())
    }

    /// An `overflow-y: auto` region showing `client_height` of
    /// `content_height`, scrolled to the top.
    pub fn scroller(parent: &TestNode, content_height: f32, client_height: f32) -> Self {
        Self::build(
            Some(parent),
            Overflow::Auto,
            ScrollMetrics::new(0.0, content_height, client_height),
        )
    }

    fn build(parent: Option<&TestNode>, overflow: Overflow, metrics: ScrollMetrics) -> Self {
        TestNode(Rc::new(NodeData {
            parent: parent.cloned(),
            overflow,
            metrics: Cell::new(metrics),
        }))
    }

    pub fn scroll_to(&self, scroll_top: f32) {
        let mut metrics = self.0.metrics.get();
        metrics.scroll_top = scroll_top;
        self.0.metrics.set(metrics);
    }
}

impl std::fmt::Debug for TestNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestNode")
            .field("overflow", &self.0.overflow)
            .field("metrics", &self.0.metrics.get())
            .finish()
    }
}

impl ScrollNode for TestNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }

    fn overflow_y(&self) -> Overflow {
        self.0.overflow
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.0.metrics.get()
    }

    fn is_same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
