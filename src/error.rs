use thiserror::Error;

use crate::graph::VertexId;
use crate::partition::Class;

/// Rejected input or configuration. Raised before any classification work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized strategy tag '{0}'")]
    UnknownStrategy(String),

    #[error("unrecognized optimizer order '{0}' (expected large-to-small or small-to-large)")]
    UnknownOrder(String),

    #[error("warden set is empty")]
    EmptyWardens,

    #[error("warden {0} is not a vertex of the graph")]
    UnknownWarden(VertexId),

    #[error("vertex {0} is not a vertex of the graph")]
    UnknownVertex(VertexId),

    #[error("opposite seed {0} is not neutral")]
    OppositeSeedUnavailable(VertexId),

    #[error("warden {0} cannot be a separator")]
    SeedAsSeparator(VertexId),

    #[error("minimum valid separator count must be at least 1")]
    ZeroPromotionThreshold,
}

/// A warden-side vertex reaches a non-warden vertex without crossing a separator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("warden-side vertex {from} reaches vertex {to} ({class:?}) without crossing a separator")]
pub struct InvariantViolation {
    pub from: VertexId,
    pub to: VertexId,
    pub class: Class,
}

#[derive(Error, Debug)]
pub enum SeparatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    #[error("neighbor {neighbor} of swapped vertex {vertex} has unexpected class {class:?}")]
    ImpossibleClassification {
        vertex: VertexId,
        neighbor: VertexId,
        class: Class,
    },
}
