use serde::{Deserialize, Serialize};

use crate::core::NodeId;

/// Absolute scroll offsets one container should take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollAction {
    pub container: NodeId,
    pub top: f64,
    pub left: f64,
}

impl ScrollAction {
    #[must_use]
    pub fn new(container: NodeId, top: f64, left: f64) -> Self {
        Self {
            container,
            top,
            left,
        }
    }
}

/// Ordered scroll actions, closest container first.
///
/// Callers apply them in order; each offset was computed assuming every
/// earlier entry has already been committed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPlan {
    pub actions: Vec<ScrollAction>,
}

impl ScrollPlan {
    #[must_use]
    pub fn new(actions: Vec<ScrollAction>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Action targeting `container`, if it is part of the plan.
    #[must_use]
    pub fn action_for(&self, container: NodeId) -> Option<&ScrollAction> {
        self.actions
            .iter()
            .find(|action| action.container == container)
    }
}

impl From<Vec<ScrollAction>> for ScrollPlan {
    fn from(actions: Vec<ScrollAction>) -> Self {
        Self::new(actions)
    }
}
