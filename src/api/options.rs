use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{AlignmentMode, NodeId, ScrollPolicy};
use crate::error::{ScrollError, ScrollResult};

pub type BoundaryPredicateFn = Arc<dyn Fn(NodeId) -> bool + Send + Sync + 'static>;

/// Where the upward walk for scroll containers stops.
#[derive(Clone, Default)]
pub enum Boundary {
    /// Walk up to the top-level scrolling element.
    #[default]
    None,
    /// Stop before reaching this node; neither it nor its ancestors scroll.
    Sentinel(NodeId),
    /// Stop before the first node the predicate rejects.
    Predicate(BoundaryPredicateFn),
}

impl Boundary {
    #[must_use]
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(NodeId) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether the walk may continue through `node`.
    #[must_use]
    pub fn accepts(&self, node: NodeId) -> bool {
        match self {
            Self::None => true,
            Self::Sentinel(sentinel) => node != *sentinel,
            Self::Predicate(predicate) => predicate(node),
        }
    }
}

impl fmt::Debug for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Sentinel(node) => f.debug_tuple("Sentinel").field(node).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl PartialEq for Boundary {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Sentinel(left), Self::Sentinel(right)) => left == right,
            (Self::Predicate(left), Self::Predicate(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

// Serialized as `null` or a node id; predicates only exist at runtime.
impl Serialize for Boundary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Sentinel(node) => serializer.serialize_some(node),
            Self::Predicate(_) => Err(serde::ser::Error::custom(
                "predicate boundaries cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Boundary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<NodeId>::deserialize(deserializer)? {
            Some(node) => Self::Sentinel(node),
            None => Self::None,
        })
    }
}

/// Options accepted by [`compute_scroll_into_view`](super::compute_scroll_into_view).
///
/// Serializable so hosts can keep presets in config files; a predicate
/// boundary has to be attached in code after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollIntoViewOptions {
    #[serde(default = "default_block")]
    pub block: AlignmentMode,
    #[serde(default = "default_inline")]
    pub inline: AlignmentMode,
    #[serde(default)]
    pub scroll_mode: ScrollPolicy,
    #[serde(default)]
    pub boundary: Boundary,
    #[serde(default)]
    pub skip_overflow_hidden_elements: bool,
    /// Divide nested-container deltas by the container's rendered/layout size
    /// ratio, for containers under CSS scale transforms.
    #[serde(default)]
    pub compensate_scale: bool,
}

impl Default for ScrollIntoViewOptions {
    fn default() -> Self {
        Self {
            block: default_block(),
            inline: default_inline(),
            scroll_mode: ScrollPolicy::Always,
            boundary: Boundary::None,
            skip_overflow_hidden_elements: false,
            compensate_scale: false,
        }
    }
}

impl ScrollIntoViewOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_block(mut self, block: AlignmentMode) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_inline(mut self, inline: AlignmentMode) -> Self {
        self.inline = inline;
        self
    }

    #[must_use]
    pub fn with_scroll_mode(mut self, scroll_mode: ScrollPolicy) -> Self {
        self.scroll_mode = scroll_mode;
        self
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    #[must_use]
    pub fn with_skip_overflow_hidden_elements(mut self, skip: bool) -> Self {
        self.skip_overflow_hidden_elements = skip;
        self
    }

    #[must_use]
    pub fn with_compensate_scale(mut self, compensate: bool) -> Self {
        self.compensate_scale = compensate;
        self
    }

    /// Serializes options into pretty JSON.
    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> ScrollResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScrollError::InvalidData(format!("failed to parse options: {e}")))
    }
}

fn default_block() -> AlignmentMode {
    AlignmentMode::Center
}

fn default_inline() -> AlignmentMode {
    AlignmentMode::Nearest
}
