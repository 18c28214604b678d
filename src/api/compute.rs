use tracing::debug;

use crate::core::NodeId;
use crate::error::ScrollResult;
use crate::layout::LayoutProvider;

use super::chain::collect_scroll_frames;
use super::{ScrollAction, ScrollIntoViewOptions, ScrollPlan, resolve_scroll_actions};

/// Computes the scroll offsets that bring `target` into view.
///
/// Geometry is read from `provider` once, before any offset is resolved; the
/// returned actions are ordered closest container first and are meant to be
/// applied in that order. Nothing is scrolled here.
///
/// # Errors
///
/// Fails with [`ScrollError::InvalidTarget`](crate::ScrollError::InvalidTarget)
/// when `target` is not an element.
pub fn compute_scroll_into_view<P>(
    provider: &P,
    target: NodeId,
    options: &ScrollIntoViewOptions,
) -> ScrollResult<Vec<ScrollAction>>
where
    P: LayoutProvider + ?Sized,
{
    let frames = collect_scroll_frames(
        provider,
        target,
        &options.boundary,
        options.skip_overflow_hidden_elements,
    )?;
    let viewport = provider.viewport();
    let target_box = provider.bounding_box(target);

    let actions = resolve_scroll_actions(target_box, &frames, viewport, options);
    debug!(
        node = %target,
        frames = frames.len(),
        actions = actions.len(),
        "computed scroll-into-view actions"
    );
    Ok(actions)
}

/// Same as [`compute_scroll_into_view`], wrapped as a serializable plan.
pub fn compute_scroll_plan<P>(
    provider: &P,
    target: NodeId,
    options: &ScrollIntoViewOptions,
) -> ScrollResult<ScrollPlan>
where
    P: LayoutProvider + ?Sized,
{
    compute_scroll_into_view(provider, target, options).map(ScrollPlan::from)
}
