use std::hash::{Hash, Hasher};

use crate::graph::VertexId;

/// An unordered pair of vertex ids. `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    lhs: VertexId,
    rhs: VertexId,
}

impl Edge {
    #[inline] pub fn new(lhs: VertexId, rhs: VertexId) -> Self { Self { lhs, rhs } }

    /// Both endpoints, in the order the edge was created with.
    #[inline] pub fn vertices(&self) -> [VertexId; 2] { [self.lhs, self.rhs] }

    /// Endpoints ordered (smaller, larger).
    #[inline] pub fn ordered(&self) -> (VertexId, VertexId) { (self.lhs.min(self.rhs), self.lhs.max(self.rhs)) }

    /// True if both endpoints are the same vertex.
    #[inline] pub fn is_loop(&self) -> bool { self.lhs == self.rhs }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool { self.ordered() == other.ordered() }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) { self.ordered().hash(state) }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((lhs, rhs): (VertexId, VertexId)) -> Self { Self::new(lhs, rhs) }
}
