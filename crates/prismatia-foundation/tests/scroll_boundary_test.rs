//! Scroll-boundary checks over the shared in-memory node tree.

use prismatia_foundation::{
    allows_pull_to_dismiss, find_scrollable_ancestor, is_at_scroll_edge, is_scrollable_y,
    ScrollEdge, ScrollNode,
};
use prismatia_testing::TestNode;

/// panel > list (scrollable) > item
fn tree() -> (TestNode, TestNode, TestNode) {
    let panel = TestNode::root();
    let list = TestNode::scroller(&panel, 900.0, 300.0);
    let item = TestNode::child(&list);
    (panel, list, item)
}

#[test]
fn finds_nearest_scrollable_ancestor() {
    let (panel, list, item) = tree();
    let found = find_scrollable_ancestor(&item, &panel);
    assert!(found.is_some_and(|node| node.is_same_node(&list)));
}

#[test]
fn scroll_region_without_excess_content_is_not_scrollable() {
    let panel = TestNode::root();
    let short = TestNode::scroller(&panel, 200.0, 300.0);
    assert!(!is_scrollable_y(&short));
    assert!(find_scrollable_ancestor(&short, &panel).is_none());
}

#[test]
fn walk_stops_at_boundary() {
    let page = TestNode::root();
    let outer = TestNode::scroller(&page, 900.0, 300.0);
    outer.scroll_to(50.0);
    let panel = TestNode::child(&outer);
    let child = TestNode::child(&panel);
    assert!(find_scrollable_ancestor(&child, &panel).is_none());
    assert!(allows_pull_to_dismiss(Some(&child), &panel));
}

#[test]
fn drag_allowed_only_at_top_of_scroll_region() {
    let (panel, list, item) = tree();
    assert!(allows_pull_to_dismiss(Some(&item), &panel));
    list.scroll_to(120.0);
    assert!(!allows_pull_to_dismiss(Some(&item), &panel));
    list.scroll_to(1.0);
    assert!(allows_pull_to_dismiss(Some(&item), &panel));
}

#[test]
fn missing_target_allows_drag() {
    let (panel, _, _) = tree();
    assert!(allows_pull_to_dismiss(None, &panel));
}

#[test]
fn bottom_edge_query() {
    let (_, list, _) = tree();
    assert!(!is_at_scroll_edge(&list, ScrollEdge::Bottom));
    list.scroll_to(600.0);
    assert!(is_at_scroll_edge(&list, ScrollEdge::Bottom));
}
