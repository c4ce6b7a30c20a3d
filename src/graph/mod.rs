mod edge;
mod graph;

pub use edge::Edge;
pub use graph::Graph;

/// External (input) identifier of a vertex, e.g. an AS number.
pub type VertexId = u32;
