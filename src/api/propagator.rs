use tracing::{trace, warn};

use crate::core::{
    AxisRange, ContainerMetrics, FrameAxis, LayoutBox, NodeId, ScrollPolicy, ViewportAxis,
    ViewportSnapshot, frame_delta, seed_position, viewport_delta,
};

use super::{ScrollAction, ScrollFrame, ScrollIntoViewOptions};

/// Resolves absolute scroll offsets for every frame, closest first.
///
/// `target` and `viewport` must come from the same snapshot as `frames`.
/// The effective target position is carried from frame to frame: once an
/// inner container scrolls, the target sits somewhere else relative to the
/// next container out.
#[must_use]
pub fn resolve_scroll_actions(
    target: LayoutBox,
    frames: &[ScrollFrame],
    viewport: ViewportSnapshot,
    options: &ScrollIntoViewOptions,
) -> Vec<ScrollAction> {
    let target = target.sanitized();
    let viewport = viewport.sanitized();

    let mut position = EffectivePosition {
        block: seed_position(options.block, block_range(target)),
        inline: seed_position(options.inline, inline_range(target)),
    };

    let mut actions = Vec::with_capacity(frames.len());
    for frame in frames {
        let metrics = frame.metrics;

        // Visibility is judged on the unscrolled target box on purpose: the
        // check mirrors what the user currently sees.
        if options.scroll_mode == ScrollPolicy::IfNeeded
            && viewport.contains_box(target)
            && metrics.bounding_box.contains_box(target)
        {
            trace!(node = %frame.node, "target already visible, stopping");
            return actions;
        }

        let action = if frame.is_root {
            resolve_viewport(frame.node, &metrics, target, viewport, position, options)
        } else {
            resolve_nested(frame.node, &metrics, target, &mut position, options)
        };
        trace!(
            node = %action.container,
            top = action.top,
            left = action.left,
            root = frame.is_root,
            "resolved frame"
        );
        actions.push(action);
    }

    actions
}

#[derive(Debug, Clone, Copy)]
struct EffectivePosition {
    block: f64,
    inline: f64,
}

fn block_range(target: LayoutBox) -> AxisRange {
    AxisRange::new(target.top, target.bottom, target.height)
}

fn inline_range(target: LayoutBox) -> AxisRange {
    AxisRange::new(target.left, target.right, target.width)
}

fn resolve_viewport(
    node: NodeId,
    metrics: &ContainerMetrics,
    target: LayoutBox,
    viewport: ViewportSnapshot,
    position: EffectivePosition,
    options: &ScrollIntoViewOptions,
) -> ScrollAction {
    let block_delta = viewport_delta(
        options.block,
        ViewportAxis {
            scroll: viewport.scroll_y,
            size: viewport.height,
            border_before: metrics.borders.top,
            border_after: metrics.borders.bottom,
        },
        position.block,
        target.height,
    );
    let inline_delta = viewport_delta(
        options.inline,
        ViewportAxis {
            scroll: viewport.scroll_x,
            size: viewport.width,
            border_before: metrics.borders.left,
            border_after: metrics.borders.right,
        },
        position.inline,
        target.width,
    );

    let max_top = max_scroll(metrics.scroll_height, metrics.client_height);
    let max_left = max_scroll(metrics.scroll_width, metrics.client_width);
    ScrollAction::new(
        node,
        (viewport.scroll_y + block_delta).clamp(0.0, max_top),
        (viewport.scroll_x + inline_delta).clamp(0.0, max_left),
    )
}

fn resolve_nested(
    node: NodeId,
    metrics: &ContainerMetrics,
    target: LayoutBox,
    position: &mut EffectivePosition,
    options: &ScrollIntoViewOptions,
) -> ScrollAction {
    let frame_box = metrics.bounding_box;
    let scrollbar_height = metrics.scrollbar_height();
    let scrollbar_width = metrics.scrollbar_width();

    let block_delta = frame_delta(
        options.block,
        FrameAxis {
            range: block_range(frame_box),
            border_before: metrics.borders.top,
            border_after: metrics.borders.bottom,
            scrollbar: scrollbar_height,
        },
        position.block,
        target.height,
    );
    let inline_delta = frame_delta(
        options.inline,
        FrameAxis {
            range: inline_range(frame_box),
            border_before: metrics.borders.left,
            border_after: metrics.borders.right,
            scrollbar: scrollbar_width,
        },
        position.inline,
        target.width,
    );

    let (scale_x, scale_y) = if options.compensate_scale {
        (metrics.scale_x(), metrics.scale_y())
    } else {
        (1.0, 1.0)
    };

    let top = scrolled_offset(
        AxisScroll {
            current: metrics.scroll_top,
            scroll_extent: metrics.scroll_height,
            client_extent: metrics.client_height,
            box_extent: frame_box.height,
            scrollbar: scrollbar_height,
            scale: scale_y,
        },
        block_delta,
        node,
    );
    let left = scrolled_offset(
        AxisScroll {
            current: metrics.scroll_left,
            scroll_extent: metrics.scroll_width,
            client_extent: metrics.client_width,
            box_extent: frame_box.width,
            scrollbar: scrollbar_width,
            scale: scale_x,
        },
        inline_delta,
        node,
    );

    position.block += metrics.scroll_top - top;
    position.inline += metrics.scroll_left - left;

    ScrollAction::new(node, top, left)
}

#[derive(Debug, Clone, Copy)]
struct AxisScroll {
    current: f64,
    scroll_extent: f64,
    client_extent: f64,
    box_extent: f64,
    scrollbar: f64,
    scale: f64,
}

fn max_scroll(scroll_extent: f64, client_extent: f64) -> f64 {
    (scroll_extent - client_extent).max(0.0)
}

// The box-derived bound (`scroll - box + scrollbar`) is what browsers honor;
// the client-derived bound only matters when a provider reports a box smaller
// than its layout size.
fn scrolled_offset(axis: AxisScroll, delta: f64, node: NodeId) -> f64 {
    let (delta, visible_extent) = if axis.scale > 0.0 {
        (delta / axis.scale, axis.box_extent / axis.scale)
    } else {
        warn!(node = %node, "zero-sized scroll container, keeping current offset");
        (0.0, axis.box_extent)
    };

    let upper = (axis.scroll_extent - visible_extent + axis.scrollbar)
        .min(max_scroll(axis.scroll_extent, axis.client_extent));
    (axis.current + delta).min(upper).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::resolve_scroll_actions;
    use crate::api::{ScrollFrame, ScrollIntoViewOptions};
    use crate::core::{
        AlignmentMode, BorderWidths, ContainerMetrics, LayoutBox, NodeId, Overflow,
        ScrollPolicy, ViewportSnapshot,
    };

    fn container(top: f64, height: f64, scroll_height: f64) -> ContainerMetrics {
        ContainerMetrics::new(LayoutBox::new(0.0, top, 400.0, height))
            .with_scroll_extent(400.0, scroll_height)
            .with_overflow(Overflow::Auto, Overflow::Auto)
    }

    fn nested(node: u32, metrics: ContainerMetrics) -> ScrollFrame {
        ScrollFrame {
            node: NodeId::new(node),
            metrics,
            is_root: false,
        }
    }

    fn root(node: u32, metrics: ContainerMetrics) -> ScrollFrame {
        ScrollFrame {
            node: NodeId::new(node),
            metrics,
            is_root: true,
        }
    }

    #[test]
    fn start_alignment_subtracts_border() {
        let metrics = container(0.0, 304.0, 1000.0)
            .with_borders(BorderWidths::uniform(2.0))
            .with_client_size(396.0, 300.0);
        let frames = [nested(2, metrics)];
        let options = ScrollIntoViewOptions::default().with_block(AlignmentMode::Start);

        let actions = resolve_scroll_actions(
            LayoutBox::new(0.0, 500.0, 50.0, 50.0),
            &frames,
            ViewportSnapshot::new(1024.0, 768.0),
            &options,
        );

        assert_eq!(actions.len(), 1);
        assert!((actions[0].top - 498.0).abs() <= 1e-9);
        assert_eq!(actions[0].left, 0.0);
    }

    #[test]
    fn result_is_clamped_to_scroll_range() {
        let frames = [nested(2, container(0.0, 300.0, 1000.0))];
        let options = ScrollIntoViewOptions::default().with_block(AlignmentMode::Start);

        let actions = resolve_scroll_actions(
            LayoutBox::new(0.0, 950.0, 50.0, 50.0),
            &frames,
            ViewportSnapshot::new(1024.0, 768.0),
            &options,
        );

        assert!((actions[0].top - 700.0).abs() <= 1e-9);
    }

    #[test]
    fn inner_scroll_shifts_target_for_outer_frames() {
        // Inner frame sits at y=1000 inside the page; target at y=1400 inside it.
        let inner = container(1000.0, 200.0, 1000.0);
        let page = ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 400.0, 600.0))
            .with_scroll_extent(400.0, 3000.0);
        let frames = [nested(2, inner), root(1, page)];
        let options = ScrollIntoViewOptions::default().with_block(AlignmentMode::Start);

        let actions = resolve_scroll_actions(
            LayoutBox::new(0.0, 1400.0, 50.0, 50.0),
            &frames,
            ViewportSnapshot::new(400.0, 600.0),
            &options,
        );

        assert_eq!(actions.len(), 2);
        assert!((actions[0].top - 400.0).abs() <= 1e-9);
        // After the inner scroll the target sits at the inner frame's top.
        assert!((actions[1].top - 1000.0).abs() <= 1e-9);
    }

    #[test]
    fn inner_horizontal_scroll_shifts_target_for_outer_frames() {
        // Inner frame sits at x=1000 inside a wide page; target at x=1400 inside it.
        let inner = ContainerMetrics::new(LayoutBox::new(1000.0, 0.0, 200.0, 300.0))
            .with_scroll_extent(1000.0, 300.0)
            .with_overflow(Overflow::Auto, Overflow::Auto);
        let page = ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 400.0, 600.0))
            .with_scroll_extent(3000.0, 600.0);
        let frames = [nested(2, inner), root(1, page)];
        let options = ScrollIntoViewOptions::default()
            .with_block(AlignmentMode::Nearest)
            .with_inline(AlignmentMode::Start);

        let actions = resolve_scroll_actions(
            LayoutBox::new(1400.0, 0.0, 50.0, 50.0),
            &frames,
            ViewportSnapshot::new(400.0, 600.0),
            &options,
        );

        assert_eq!(actions.len(), 2);
        assert!((actions[0].left - 400.0).abs() <= 1e-9);
        // After the inner scroll the target sits at the inner frame's left edge.
        assert!((actions[1].left - 1000.0).abs() <= 1e-9);
        assert_eq!(actions[0].top, 0.0);
        assert_eq!(actions[1].top, 0.0);
    }

    #[test]
    fn if_needed_stops_before_frame_showing_target() {
        let frames = [
            nested(2, container(0.0, 300.0, 1000.0)),
            root(1, container(0.0, 600.0, 2000.0)),
        ];
        let options = ScrollIntoViewOptions::default().with_scroll_mode(ScrollPolicy::IfNeeded);

        let actions = resolve_scroll_actions(
            LayoutBox::new(10.0, 10.0, 50.0, 50.0),
            &frames,
            ViewportSnapshot::new(400.0, 600.0),
            &options,
        );

        assert!(actions.is_empty());
    }

    #[test]
    fn zero_sized_frame_keeps_offset_when_compensating_scale() {
        let collapsed = ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 0.0, 0.0))
            .with_scroll_extent(0.0, 500.0)
            .with_scroll_offset(0.0, 40.0)
            .with_client_size(0.0, 0.0);
        let frames = [nested(2, collapsed)];
        let options = ScrollIntoViewOptions::default()
            .with_block(AlignmentMode::Start)
            .with_compensate_scale(true);

        let actions = resolve_scroll_actions(
            LayoutBox::new(0.0, 300.0, 10.0, 10.0),
            &frames,
            ViewportSnapshot::new(400.0, 600.0),
            &options,
        );

        assert!((actions[0].top - 40.0).abs() <= 1e-9);
    }

    #[test]
    fn scale_compensation_divides_delta() {
        // Rendered at half its layout size.
        let scaled = ContainerMetrics::new(LayoutBox::new(0.0, 0.0, 200.0, 150.0))
            .with_offset_size(400.0, 300.0)
            .with_client_size(400.0, 300.0)
            .with_scroll_extent(400.0, 2000.0);
        let frames = [nested(2, scaled)];
        let options = ScrollIntoViewOptions::default()
            .with_block(AlignmentMode::Start)
            .with_compensate_scale(true);

        let actions = resolve_scroll_actions(
            LayoutBox::new(0.0, 100.0, 10.0, 10.0),
            &frames,
            ViewportSnapshot::new(400.0, 600.0),
            &options,
        );

        assert!((actions[0].top - 200.0).abs() <= 1e-9);
    }
}
