use ahash::{AHashMap, AHashSet};

use crate::graph::{Edge, VertexId};

/// An unweighted, undirected graph in compressed sparse row format.
///
/// Vertices are addressed internally by a dense index (`node`) in `0..node_count()`;
/// the external integer id of each node is kept alongside. Adjacency is a set:
/// duplicate edges and self loops are dropped at construction, and every edge
/// is stored in both directions.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    ids: Vec<VertexId>,                 // ids[node] = external id
    index: AHashMap<VertexId, usize>,   // index[id] = node
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl Graph {
    /// Construct a graph from a list of vertex ids and a list of edges between them.
    /// Endpoints that are not in `vertices` are added in order of first appearance.
    pub fn new(vertices: impl IntoIterator<Item = VertexId>, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut ids = Vec::new();
        let mut index = AHashMap::new();
        let mut intern = |id: VertexId, ids: &mut Vec<VertexId>| -> usize {
            *index.entry(id).or_insert_with(|| { ids.push(id); ids.len() - 1 })
        };

        vertices.into_iter().for_each(|id| { intern(id, &mut ids); });

        let mut seen = AHashSet::new();
        let mut pairs = Vec::new();
        for edge in edges {
            if edge.is_loop() || !seen.insert(edge) { continue }
            let [lhs, rhs] = edge.vertices();
            pairs.push((intern(lhs, &mut ids), intern(rhs, &mut ids)));
        }

        let mut adjacencies = vec![Vec::new(); ids.len()];
        for (u, v) in pairs {
            adjacencies[u].push(v as u32);
            adjacencies[v].push(u as u32);
        }
        adjacencies.iter_mut().for_each(|list| list.sort_unstable());

        Self {
            offsets: std::iter::once(0u32).chain(
                adjacencies.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect(),
            edges: adjacencies.into_iter().flatten().collect(),
            ids,
            index,
        }
    }

    /// Construct a graph from `(id, id)` pairs only.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (VertexId, VertexId)>) -> Self {
        Self::new(std::iter::empty::<VertexId>(), pairs.into_iter().map(Edge::from))
    }

    /// Get the number of vertices in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.ids.len() }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() / 2 }

    /// Get the external id of a node.
    #[inline] pub fn id(&self, node: usize) -> VertexId { self.ids[node] }

    /// Get the node index for an external id, if present.
    #[inline] pub fn node(&self, id: VertexId) -> Option<usize> { self.index.get(&id).copied() }

    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }
}
