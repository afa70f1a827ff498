//! Scroll boundaries inside the drawer panel.
//!
//! A press inside a nested scroll region must not start a drag while that
//! region can still scroll up; the content should scroll instead. The walk
//! works over any tree that implements [`ScrollNode`], so the browser
//! adapter and tests share the same logic.

/// Tolerance for sub-pixel scroll positions reported by the platform.
const EDGE_TOLERANCE: f32 = 1.0;

/// Computed `overflow-y` of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

impl Overflow {
    /// Parses a computed style value. Unknown keywords map to `Visible`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            "auto" | "overlay" => Overflow::Auto,
            "scroll" => Overflow::Scroll,
            _ => Overflow::Visible,
        }
    }

    pub fn allows_scrolling(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll)
    }
}

/// Vertical scroll geometry of a node, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Content is taller than the visible box.
    pub fn overflows(&self) -> bool {
        self.scroll_height > self.client_height
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll_top <= EDGE_TOLERANCE
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_height - EDGE_TOLERANCE <= self.scroll_top + self.client_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEdge {
    Top,
    Bottom,
}

/// A node in the tree the drawer panel lives in.
pub trait ScrollNode: Clone {
    fn parent(&self) -> Option<Self>;

    fn overflow_y(&self) -> Overflow;

    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Node identity, not structural equality.
    fn is_same_node(&self, other: &Self) -> bool;
}

/// Whether `node` scrolls vertically right now.
pub fn is_scrollable_y<N: ScrollNode>(node: &N) -> bool {
    node.overflow_y().allows_scrolling() && node.scroll_metrics().overflows()
}

/// First vertically scrollable node from `target` upwards, stopping before
/// `boundary`. `target` itself is included.
pub fn find_scrollable_ancestor<N: ScrollNode>(target: &N, boundary: &N) -> Option<N> {
    let mut current = Some(target.clone());
    while let Some(node) = current {
        if node.is_same_node(boundary) {
            return None;
        }
        if is_scrollable_y(&node) {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

pub fn is_at_scroll_edge<N: ScrollNode>(node: &N, edge: ScrollEdge) -> bool {
    let metrics = node.scroll_metrics();
    match edge {
        ScrollEdge::Top => metrics.is_at_top(),
        ScrollEdge::Bottom => metrics.is_at_bottom(),
    }
}

/// Whether a press on `target` may start a drag of the panel rooted at
/// `boundary`: either nothing between them scrolls, or the nearest scroll
/// region is already at its top.
pub fn allows_pull_to_dismiss<N: ScrollNode>(target: Option<&N>, boundary: &N) -> bool {
    let Some(target) = target else {
        return true;
    };
    match find_scrollable_ancestor(target, boundary) {
        Some(scroller) => {
            let at_top = is_at_scroll_edge(&scroller, ScrollEdge::Top);
            if !at_top {
                log::trace!("press inside scrolled content, drag vetoed");
            }
            at_top
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_keywords() {
        assert_eq!(Overflow::parse("auto"), Overflow::Auto);
        assert_eq!(Overflow::parse(" scroll "), Overflow::Scroll);
        assert_eq!(Overflow::parse("hidden"), Overflow::Hidden);
        assert_eq!(Overflow::parse("bogus"), Overflow::Visible);
        assert!(!Overflow::Hidden.allows_scrolling());
    }

    #[test]
    fn edges_tolerate_subpixel_positions() {
        let metrics = ScrollMetrics::new(0.5, 900.0, 300.0);
        assert!(metrics.is_at_top());
        assert!(!metrics.is_at_bottom());
        let bottom = ScrollMetrics::new(599.2, 900.0, 300.0);
        assert!(bottom.is_at_bottom());
        assert!(!bottom.is_at_top());
    }
}
