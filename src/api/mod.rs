mod action;
mod chain;
mod compute;
mod json_contract;
mod options;
mod propagator;

pub use action::{ScrollAction, ScrollPlan};
pub use chain::{ScrollChain, ScrollFrame, collect_chain};
pub use compute::{compute_scroll_into_view, compute_scroll_plan};
pub use json_contract::{SCROLL_PLAN_JSON_SCHEMA_V1, ScrollPlanJsonContractV1};
pub use options::{Boundary, BoundaryPredicateFn, ScrollIntoViewOptions};
pub use propagator::resolve_scroll_actions;
