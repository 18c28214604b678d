use serde::{Deserialize, Serialize};

use crate::error::{ScrollError, ScrollResult};

use super::ScrollPlan;

pub const SCROLL_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: ScrollPlan,
}

impl ScrollPlan {
    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollError::InvalidData(format!("failed to serialize scroll plan: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ScrollResult<String> {
        let payload = ScrollPlanJsonContractV1 {
            schema_version: SCROLL_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScrollError::InvalidData(format!("failed to serialize scroll plan contract v1: {e}"))
        })
    }

    /// Parses either a bare plan or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScrollResult<Self> {
        let plan = match serde_json::from_str::<ScrollPlan>(input) {
            Ok(plan) => plan,
            Err(_) => {
                let payload: ScrollPlanJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ScrollError::InvalidData(format!(
                            "failed to parse scroll plan json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != SCROLL_PLAN_JSON_SCHEMA_V1 {
                    return Err(ScrollError::InvalidData(format!(
                        "unsupported scroll plan schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.plan
            }
        };
        validate_scroll_plan(&plan)?;
        Ok(plan)
    }
}

fn validate_scroll_plan(plan: &ScrollPlan) -> ScrollResult<()> {
    for (index, action) in plan.actions.iter().enumerate() {
        for (axis, value) in [("top", action.top), ("left", action.left)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScrollError::InvalidData(format!(
                    "scroll action {index} has invalid {axis} offset {value}"
                )));
            }
        }
        if plan.actions[..index]
            .iter()
            .any(|earlier| earlier.container == action.container)
        {
            return Err(ScrollError::InvalidData(format!(
                "scroll action {index} repeats container {}",
                action.container
            )));
        }
    }
    Ok(())
}
