use std::sync::Arc;

use serde::Serialize;

use crate::{
    error::ConfigError,
    graph::{Graph, VertexId},
    partition::{Class, ClassSet, Side},
};

/// Classification of every vertex of a graph into warden side, opposite side,
/// separator, or neutral (not yet claimed).
///
/// The graph is shared; cloning a partition copies only the classification,
/// so independent trials can run from one pristine partition.
#[derive(Clone, Debug)]
pub struct Partition {
    pub(super) graph: Arc<Graph>,  // Shared, read-only adjacency
    pub(super) classes: ClassSet,  // Class of every node
    seeds: Vec<bool>,              // seeds[n] = n is a warden seed
}

impl Partition {
    /// Construct a fresh partition: the given wardens are seeds, everything else is neutral.
    pub fn new(graph: impl Into<Arc<Graph>>, wardens: &[VertexId]) -> Result<Self, ConfigError> {
        let graph: Arc<Graph> = graph.into();
        if wardens.is_empty() { return Err(ConfigError::EmptyWardens) }

        let mut seeds = vec![false; graph.node_count()];
        for &id in wardens {
            let node = graph.node(id).ok_or(ConfigError::UnknownWarden(id))?;
            seeds[node] = true;
        }

        let mut partition = Self { classes: ClassSet::new(graph.node_count()), graph, seeds };
        partition.reset();
        Ok(partition)
    }

    /// Construct an already classified partition: `wardens` are seeds, `warden_side` and
    /// `separators` are as given, and every other vertex is on the opposite side.
    /// No validity check is done here; see [`Partition::verify`].
    pub fn from_sides(
        graph: impl Into<Arc<Graph>>,
        wardens: &[VertexId],
        warden_side: &[VertexId],
        separators: &[VertexId],
    ) -> Result<Self, ConfigError> {
        let mut partition = Self::new(graph, wardens)?;
        let graph = partition.graph.clone();
        let lookup = |id: VertexId| graph.node(id).ok_or(ConfigError::UnknownVertex(id));

        for &id in separators {
            let node = lookup(id)?;
            if partition.is_seed(node) { return Err(ConfigError::SeedAsSeparator(id)) }
            partition.move_to(node, Class::Separator);
        }
        for &id in warden_side {
            let node = lookup(id)?;
            if !partition.is_seed(node) { partition.move_to(node, Class::WardenInterior) }
        }
        for node in partition.members(Class::Neutral).to_vec() {
            partition.move_to(node, Class::OppositeInterior);
        }
        Ok(partition)
    }

    /// Get a reference to the underlying graph.
    #[inline] pub fn graph(&self) -> &Graph { &self.graph }

    /// Get the number of nodes in the underlying graph.
    #[inline] pub fn node_count(&self) -> usize { self.graph.node_count() }

    /// Get the class of a given node.
    #[inline] pub fn class(&self, node: usize) -> Class { self.classes.find(node) }

    /// Get the side of a given node.
    #[inline] pub fn side(&self, node: usize) -> Side { self.classes.find(node).side() }

    /// Check if a node is one of the warden seeds.
    #[inline] pub fn is_seed(&self, node: usize) -> bool { self.seeds[node] }

    /// Iterate over the seed nodes.
    #[inline]
    pub fn seeds(&self) -> impl Iterator<Item = usize> + '_ {
        self.seeds.iter().enumerate().filter_map(|(node, &seed)| seed.then_some(node))
    }

    /// Get the nodes currently in a given class.
    #[inline] pub fn members(&self, class: Class) -> &[usize] { self.classes.get(class) }

    /// Get the number of nodes currently in a given class.
    #[inline] pub fn count(&self, class: Class) -> usize { self.classes.get(class).len() }

    /// Get the number of nodes currently on a given side.
    pub fn side_count(&self, side: Side) -> usize {
        Class::ALL.iter().filter(|c| c.side() == side).map(|&c| self.count(c)).sum()
    }

    /// Count the neighbors of `node` whose class satisfies `pred`.
    #[inline]
    pub(crate) fn count_neighbors(&self, node: usize, pred: impl Fn(Class) -> bool) -> usize {
        self.graph.edges(node).filter(|&v| pred(self.class(v))).count()
    }

    /// Move `node` to `class`. A seed never leaves the warden side.
    pub(crate) fn move_to(&mut self, node: usize, class: Class) {
        assert!(
            !self.seeds[node] || class.side() == Side::Warden,
            "warden seed {} cannot move to {:?}", self.graph.id(node), class,
        );
        self.classes.move_to(node, class);
    }

    /// Reset to the initial state: seeds classified, everything else neutral.
    pub fn reset(&mut self) {
        self.classes.clear();
        for node in 0..self.seeds.len() {
            if self.seeds[node] { self.classes.move_to(node, Class::WardenSeed) }
        }
    }

    /// True once no vertex is left neutral.
    #[inline] pub fn is_complete(&self) -> bool { self.count(Class::Neutral) == 0 }

    /// Sorted external ids of every node on a given side.
    pub fn ids_on(&self, side: Side) -> Vec<VertexId> {
        let mut ids = self.classes.assignments().iter().enumerate()
            .filter(|(_, class)| class.side() == side)
            .map(|(node, _)| self.graph.id(node))
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Snapshot of the current classification as external ids.
    pub fn result(&self) -> SeparationResult {
        SeparationResult {
            separators: self.ids_on(Side::Separator),
            warden_side: self.ids_on(Side::Warden),
            opposite_side: self.ids_on(Side::Opposite),
        }
    }
}

/// Separator, warden side and opposite side as sorted vertex ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeparationResult {
    pub separators: Vec<VertexId>,
    pub warden_side: Vec<VertexId>,
    pub opposite_side: Vec<VertexId>,
}

impl SeparationResult {
    #[inline] pub fn separator_count(&self) -> usize { self.separators.len() }
    #[inline] pub fn warden_count(&self) -> usize { self.warden_side.len() }
    #[inline] pub fn opposite_count(&self) -> usize { self.opposite_side.len() }
}
