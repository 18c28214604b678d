use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ContainerMetrics, LayoutBox, NodeId, ViewportSnapshot};
use crate::error::{ScrollError, ScrollResult};
use crate::layout::LayoutProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Element,
    Text,
    DocumentFragment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub kind: NodeKind,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub shadow_host: Option<NodeId>,
    pub metrics: ContainerMetrics,
}

/// Immutable, in-memory layout tree.
///
/// Headless hosts and tests capture geometry into this once and hand it to
/// [`compute_scroll_into_view`](crate::api::compute_scroll_into_view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    nodes: IndexMap<NodeId, NodeRecord>,
    #[serde(default)]
    scrolling_element: Option<NodeId>,
    #[serde(default)]
    document_element: Option<NodeId>,
    #[serde(default)]
    body: Option<NodeId>,
    viewport: ViewportSnapshot,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn builder(viewport: ViewportSnapshot) -> LayoutSnapshotBuilder {
        LayoutSnapshotBuilder::new(viewport)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Parses and validates a snapshot fixture.
    pub fn from_json_str(input: &str) -> ScrollResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| ScrollError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> ScrollResult<()> {
        for (id, record) in &self.nodes {
            for (label, link) in [("parent", record.parent), ("shadow host", record.shadow_host)] {
                if let Some(link) = link {
                    if !self.nodes.contains_key(&link) {
                        return Err(ScrollError::InvalidData(format!(
                            "node {id} references unknown {label} {link}"
                        )));
                    }
                }
            }
        }

        for (label, root) in [
            ("scrolling element", self.scrolling_element),
            ("document element", self.document_element),
            ("body", self.body),
        ] {
            if let Some(root) = root {
                if !self.nodes.contains_key(&root) {
                    return Err(ScrollError::InvalidData(format!(
                        "{label} {root} is not part of the snapshot"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl LayoutProvider for LayoutSnapshot {
    fn is_element(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|record| record.kind == NodeKind::Element)
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(&node)?.parent?;
        self.is_element(parent).then_some(parent)
    }

    fn shadow_host(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node)?.shadow_host
    }

    fn scrolling_element(&self) -> Option<NodeId> {
        self.scrolling_element
    }

    fn document_element(&self) -> Option<NodeId> {
        self.document_element
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn bounding_box(&self, node: NodeId) -> LayoutBox {
        self.nodes
            .get(&node)
            .map(|record| record.metrics.bounding_box)
            .unwrap_or_default()
    }

    fn container_metrics(&self, node: NodeId) -> ContainerMetrics {
        self.nodes
            .get(&node)
            .map(|record| record.metrics)
            .unwrap_or_else(|| ContainerMetrics::new(LayoutBox::default()))
    }

    fn viewport(&self) -> ViewportSnapshot {
        self.viewport
    }
}

/// Incremental builder for [`LayoutSnapshot`].
///
/// Nodes are added parent-first; `build` rejects dangling references.
#[derive(Debug, Clone)]
pub struct LayoutSnapshotBuilder {
    snapshot: LayoutSnapshot,
}

impl LayoutSnapshotBuilder {
    #[must_use]
    pub fn new(viewport: ViewportSnapshot) -> Self {
        Self {
            snapshot: LayoutSnapshot {
                nodes: IndexMap::new(),
                scrolling_element: None,
                document_element: None,
                body: None,
                viewport,
            },
        }
    }

    /// Adds the root element; it doubles as scrolling element unless overridden.
    #[must_use]
    pub fn document_element(mut self, id: NodeId, metrics: ContainerMetrics) -> Self {
        self.insert(id, NodeKind::Element, None, None, metrics);
        self.snapshot.document_element = Some(id);
        if self.snapshot.scrolling_element.is_none() {
            self.snapshot.scrolling_element = Some(id);
        }
        self
    }

    #[must_use]
    pub fn body(mut self, id: NodeId, parent: NodeId, metrics: ContainerMetrics) -> Self {
        self.insert(id, NodeKind::Element, Some(parent), None, metrics);
        self.snapshot.body = Some(id);
        self
    }

    #[must_use]
    pub fn element(mut self, id: NodeId, parent: NodeId, metrics: ContainerMetrics) -> Self {
        self.insert(id, NodeKind::Element, Some(parent), None, metrics);
        self
    }

    /// Adds an element sitting directly under a shadow root hosted by `host`.
    #[must_use]
    pub fn shadow_element(mut self, id: NodeId, host: NodeId, metrics: ContainerMetrics) -> Self {
        self.insert(id, NodeKind::Element, None, Some(host), metrics);
        self
    }

    /// Adds a root element of an embedded document with no element parent.
    #[must_use]
    pub fn detached_root(mut self, id: NodeId, metrics: ContainerMetrics) -> Self {
        self.insert(id, NodeKind::Element, None, None, metrics);
        self
    }

    #[must_use]
    pub fn text(mut self, id: NodeId, parent: NodeId) -> Self {
        self.insert(
            id,
            NodeKind::Text,
            Some(parent),
            None,
            ContainerMetrics::new(LayoutBox::default()),
        );
        self
    }

    #[must_use]
    pub fn document_fragment(mut self, id: NodeId) -> Self {
        self.insert(
            id,
            NodeKind::DocumentFragment,
            None,
            None,
            ContainerMetrics::new(LayoutBox::default()),
        );
        self
    }

    /// Overrides the top-level scrolling element (e.g. quirks-mode body).
    #[must_use]
    pub fn scrolling_element(mut self, id: NodeId) -> Self {
        self.snapshot.scrolling_element = Some(id);
        self
    }

    pub fn build(self) -> ScrollResult<LayoutSnapshot> {
        self.snapshot.validate()?;
        Ok(self.snapshot)
    }

    fn insert(
        &mut self,
        id: NodeId,
        kind: NodeKind,
        parent: Option<NodeId>,
        shadow_host: Option<NodeId>,
        metrics: ContainerMetrics,
    ) {
        self.snapshot.nodes.insert(
            id,
            NodeRecord {
                kind,
                parent,
                shadow_host,
                metrics,
            },
        );
    }
}
