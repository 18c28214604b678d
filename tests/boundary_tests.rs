use scroll_into_view::api::{
    Boundary, ScrollIntoViewOptions, collect_chain, compute_scroll_into_view,
};
use scroll_into_view::core::{
    AlignmentMode, ContainerMetrics, LayoutBox, NodeId, Overflow, ViewportSnapshot,
};
use scroll_into_view::layout::LayoutSnapshot;

const HTML: NodeId = NodeId::new(1);
const BODY: NodeId = NodeId::new(2);
const OUTER: NodeId = NodeId::new(3);
const INNER: NodeId = NodeId::new(4);
const TARGET: NodeId = NodeId::new(5);

fn scroller(top: f64) -> ContainerMetrics {
    ContainerMetrics::new(LayoutBox::new(0.0, top, 600.0, 300.0))
        .with_scroll_extent(600.0, 2000.0)
        .with_overflow(Overflow::Auto, Overflow::Auto)
}

// html > body > outer (scrolls) > inner (scrolls) > target
fn layout() -> LayoutSnapshot {
    let viewport = ViewportSnapshot::new(800.0, 600.0);
    LayoutSnapshot::builder(viewport)
        .document_element(
            HTML,
            ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 800.0, 600.0))
                .with_scroll_extent(800.0, 5000.0),
        )
        .body(
            BODY,
            HTML,
            ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 800.0, 5000.0)),
        )
        .element(OUTER, BODY, scroller(1000.0))
        .element(INNER, OUTER, scroller(1100.0))
        .element(
            TARGET,
            INNER,
            ContainerMetrics::new(LayoutBox::new(0.0, 1900.0, 50.0, 50.0)),
        )
        .build()
        .expect("snapshot")
}

#[test]
fn no_boundary_walks_to_scrolling_element() {
    let chain = collect_chain(&layout(), TARGET, &Boundary::None, false).expect("chain");
    assert_eq!(chain.as_slice(), &[INNER, OUTER, HTML]);
}

#[test]
fn sentinel_root_prevents_window_scrolling() {
    let options = ScrollIntoViewOptions::default().with_boundary(Boundary::Sentinel(HTML));
    let actions = compute_scroll_into_view(&layout(), TARGET, &options).expect("compute");

    let containers: Vec<NodeId> = actions.iter().map(|action| action.container).collect();
    assert_eq!(containers, vec![INNER, OUTER]);
}

#[test]
fn predicate_rejecting_ancestor_cuts_it_and_everything_above() {
    let boundary = Boundary::predicate(|node| node != OUTER);
    let chain = collect_chain(&layout(), TARGET, &boundary, false).expect("chain");

    assert_eq!(chain.as_slice(), &[INNER]);
}

#[test]
fn predicate_sees_every_walked_ancestor_in_order() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let boundary = Boundary::predicate(move |node| {
        recorder.lock().expect("recorder lock").push(node);
        true
    });

    collect_chain(&layout(), TARGET, &boundary, false).expect("chain");
    let seen = seen.lock().expect("recorder lock").clone();
    assert_eq!(seen, vec![TARGET, INNER, OUTER, BODY, HTML]);
}

#[test]
fn boundary_on_inner_container_leaves_nothing_to_scroll() {
    let options = ScrollIntoViewOptions::default()
        .with_block(AlignmentMode::Start)
        .with_boundary(Boundary::Sentinel(INNER));
    let actions = compute_scroll_into_view(&layout(), TARGET, &options).expect("compute");

    assert!(actions.is_empty());
}
