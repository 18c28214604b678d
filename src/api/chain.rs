use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace, warn};

use crate::core::{ContainerMetrics, NodeId};
use crate::error::{ScrollError, ScrollResult};
use crate::layout::LayoutProvider;

use super::Boundary;

/// Scroll containers between a target and the viewport, closest first.
pub type ScrollChain = SmallVec<[NodeId; 8]>;

/// A chain entry together with the metrics captured when it was selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub node: NodeId,
    pub metrics: ContainerMetrics,
    /// Set for the top-level scrolling element, which scrolls the document.
    pub is_root: bool,
}

/// Returns the scroll containers that would be adjusted to reveal `target`.
///
/// # Errors
///
/// Fails with [`ScrollError::InvalidTarget`] when `target` is not an element.
pub fn collect_chain<P>(
    provider: &P,
    target: NodeId,
    boundary: &Boundary,
    skip_overflow_hidden_elements: bool,
) -> ScrollResult<ScrollChain>
where
    P: LayoutProvider + ?Sized,
{
    let frames =
        collect_scroll_frames(provider, target, boundary, skip_overflow_hidden_elements)?;
    Ok(frames.iter().map(|frame| frame.node).collect())
}

pub(super) fn collect_scroll_frames<P>(
    provider: &P,
    target: NodeId,
    boundary: &Boundary,
    skip_overflow_hidden_elements: bool,
) -> ScrollResult<SmallVec<[ScrollFrame; 8]>>
where
    P: LayoutProvider + ?Sized,
{
    if !provider.is_element(target) {
        return Err(ScrollError::InvalidTarget { node: target });
    }

    let scrolling_element = provider
        .scrolling_element()
        .or_else(|| provider.document_element());
    let body = provider.body();

    let mut frames = SmallVec::new();
    if !boundary.accepts(target) {
        debug!(node = %target, "boundary rejects the target itself");
        return Ok(frames);
    }

    let mut visited: SmallVec<[NodeId; 16]> = smallvec![target];
    let mut cursor = target;
    loop {
        let Some(parent) = provider
            .parent_element(cursor)
            .or_else(|| provider.shadow_host(cursor))
        else {
            break;
        };
        if visited.contains(&parent) {
            warn!(node = %parent, "ancestor cycle in layout provider, stopping walk");
            break;
        }
        visited.push(parent);

        if !boundary.accepts(parent) {
            trace!(node = %parent, "boundary reached");
            break;
        }
        cursor = parent;

        let metrics = provider.container_metrics(parent).sanitized();
        if Some(parent) == scrolling_element {
            frames.push(ScrollFrame {
                node: parent,
                metrics,
                is_root: true,
            });
            break;
        }

        if Some(parent) == body && is_redundant_body(provider, &metrics) {
            trace!(node = %parent, "skipping body, root element owns document scrolling");
            continue;
        }

        if metrics.is_scrollable(skip_overflow_hidden_elements) {
            frames.push(ScrollFrame {
                node: parent,
                metrics,
                is_root: false,
            });
        }
    }

    debug!(
        node = %target,
        frames = frames.len(),
        walked = visited.len() - 1,
        "collected scroll chain"
    );
    Ok(frames)
}

// A scrollable body is not a separate scroll container while the root element
// itself does not scroll independently.
fn is_redundant_body<P>(provider: &P, body: &ContainerMetrics) -> bool
where
    P: LayoutProvider + ?Sized,
{
    if !body.is_scrollable(false) {
        return false;
    }

    !provider
        .document_element()
        .is_some_and(|root| provider.container_metrics(root).sanitized().is_scrollable(false))
}
