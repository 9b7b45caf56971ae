use crate::scene::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrismError {
    #[error("node {0:?} is already registered as a clickable target")]
    DuplicateTarget(NodeId),

    #[error("node {0:?} does not exist in this scene")]
    UnknownNode(NodeId),

    #[error("cannot attach {child:?} under {parent:?}: would form a cycle")]
    InvalidAttach { child: NodeId, parent: NodeId },

    #[error("typeface JSON could not be parsed: {0}")]
    Typeface(#[source] serde_json::Error),

    #[error("typeface has no glyphs")]
    EmptyTypeface,

    #[error("config JSON could not be parsed: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PrismError>;
