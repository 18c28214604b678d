use criterion::{Criterion, criterion_group, criterion_main};
use scroll_into_view::api::{ScrollIntoViewOptions, ScrollPlan, collect_chain};
use scroll_into_view::core::{
    AlignmentMode, AxisRange, ContainerMetrics, LayoutBox, NodeId, Overflow, ScrollPolicy,
    ViewportSnapshot, align_nearest,
};
use scroll_into_view::layout::LayoutSnapshot;
use scroll_into_view::{Boundary, compute_scroll_into_view};
use std::hint::black_box;

const HTML: NodeId = NodeId::new(1);
const BODY: NodeId = NodeId::new(2);

fn deep_layout(depth: u32) -> (LayoutSnapshot, NodeId) {
    let viewport = ViewportSnapshot::new(1920.0, 1080.0).with_scroll(0.0, 250.0);
    let mut builder = LayoutSnapshot::builder(viewport)
        .document_element(
            HTML,
            ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 1920.0, 1080.0))
                .with_scroll_extent(1920.0, 20_000.0),
        )
        .body(
            BODY,
            HTML,
            ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 1920.0, 20_000.0)),
        );

    let mut parent = BODY;
    for level in 0..depth {
        let id = NodeId::new(10 + level);
        let inset = f64::from(level) * 4.0;
        let metrics = ContainerMetrics::new(LayoutBox::new(
            inset,
            400.0 + inset,
            1600.0 - 2.0 * inset,
            900.0 - 2.0 * inset,
        ))
        .with_scroll_extent(4000.0, 8000.0)
        .with_scroll_offset(10.0, 120.0)
        .with_overflow(Overflow::Auto, Overflow::Auto);
        builder = builder.element(id, parent, metrics);
        parent = id;
    }

    let target = NodeId::new(10 + depth);
    let snapshot = builder
        .element(
            target,
            parent,
            ContainerMetrics::new(LayoutBox::new(2400.0, 5200.0, 120.0, 48.0)),
        )
        .build()
        .expect("generated layout");
    (snapshot, target)
}

fn bench_align_nearest(c: &mut Criterion) {
    let container = AxisRange::from_start(0.0, 600.0);
    let element = AxisRange::from_start(900.0, 48.0);

    c.bench_function("align_nearest", |b| {
        b.iter(|| {
            let _ = align_nearest(
                black_box(container),
                black_box(1.0),
                black_box(16.0),
                black_box(element),
            );
        })
    });
}

fn bench_collect_chain_64(c: &mut Criterion) {
    let (snapshot, target) = deep_layout(64);

    c.bench_function("collect_chain_64", |b| {
        b.iter(|| {
            let _ = collect_chain(black_box(&snapshot), target, &Boundary::None, false)
                .expect("chain should resolve");
        })
    });
}

fn bench_compute_deep_chain_64(c: &mut Criterion) {
    let (snapshot, target) = deep_layout(64);
    let options = ScrollIntoViewOptions::default()
        .with_block(AlignmentMode::Center)
        .with_inline(AlignmentMode::Nearest);

    c.bench_function("compute_deep_chain_64", |b| {
        b.iter(|| {
            let _ = compute_scroll_into_view(black_box(&snapshot), target, black_box(&options))
                .expect("compute should succeed");
        })
    });
}

fn bench_plan_json_64(c: &mut Criterion) {
    let (snapshot, target) = deep_layout(64);
    let options = ScrollIntoViewOptions::default().with_scroll_mode(ScrollPolicy::IfNeeded);
    let plan = ScrollPlan::from(
        compute_scroll_into_view(&snapshot, target, &options).expect("compute should succeed"),
    );

    c.bench_function("plan_json_contract_64", |b| {
        b.iter(|| {
            let _ = black_box(&plan)
                .to_json_contract_v1_pretty()
                .expect("plan json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_align_nearest,
    bench_collect_chain_64,
    bench_compute_deep_chain_64,
    bench_plan_json_64
);
criterion_main!(benches);
