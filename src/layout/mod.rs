mod snapshot;

pub use snapshot::{LayoutSnapshot, LayoutSnapshotBuilder, NodeKind, NodeRecord};

use crate::core::{ContainerMetrics, LayoutBox, NodeId, ViewportSnapshot};

/// Contract implemented by whatever owns the live layout tree.
///
/// The computation reads through this trait once per call: it walks the
/// ancestor chain, captures metrics for the containers it keeps and never
/// asks again, so implementations may answer from a snapshot or from live
/// state as long as nothing changes during the call.
pub trait LayoutProvider {
    /// Whether `node` is an element (as opposed to text, fragments, unknown ids).
    fn is_element(&self, node: NodeId) -> bool;

    /// Parent element, or `None` at a document or shadow root.
    fn parent_element(&self, node: NodeId) -> Option<NodeId>;

    /// Host element of the shadow tree containing `node`, if any.
    fn shadow_host(&self, node: NodeId) -> Option<NodeId>;

    /// The canonical top-level scrolling element (`document.scrollingElement`).
    fn scrolling_element(&self) -> Option<NodeId>;

    /// The root element of the top-level document.
    fn document_element(&self) -> Option<NodeId>;

    /// The body element of the top-level document.
    fn body(&self) -> Option<NodeId>;

    /// Viewport-relative border box of `node`.
    fn bounding_box(&self, node: NodeId) -> LayoutBox;

    /// Scroll and overflow state of `node`.
    fn container_metrics(&self, node: NodeId) -> ContainerMetrics;

    /// Visible viewport size and page scroll offsets.
    fn viewport(&self) -> ViewportSnapshot;
}
