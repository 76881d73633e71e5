//! Scene error types.

use thiserror::Error;

use crate::tree::NodeId;

pub type Result<T> = std::result::Result<T, SceneError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid value for {property}: {value}")]
    InvalidStyleValue { property: &'static str, value: String },

    #[error("node {0:?} has no layout; call recompute on an ancestor first")]
    MissingLayoutResult(NodeId),

    /// Line wrapping finished without committing a single line.
    #[error("text measurement produced no bounds")]
    EmptyMeasurementBounds,

    #[error("unknown style property: {0}")]
    UnknownProperty(String),

    #[error("font not registered: {0}")]
    UnknownFont(String),

    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node {0:?} is a text node and cannot hold children")]
    NotAContainer(NodeId),

    #[error("cannot attach {child:?} under {parent:?}: it is an ancestor of the parent")]
    CyclicParent { parent: NodeId, child: NodeId },

    #[error("layout engine error: {0}")]
    Engine(String),
}

impl From<taffy::TaffyError> for SceneError {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Engine(err.to_string())
    }
}
