use thiserror::Error;

use crate::core::NodeId;

pub type ScrollResult<T> = Result<T, ScrollError>;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("invalid target: node {node} is not an element")]
    InvalidTarget { node: NodeId },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
