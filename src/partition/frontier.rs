use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use rand::{Rng, seq::SliceRandom};

use crate::partition::{Class, DegreeMetric, Order, Partition, Shore, Strategy};

/// Heap entry for degree-priority frontiers. Ties go to the smaller node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    rank: i64,
    key: usize,
    node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

#[derive(Debug, Clone)]
enum Pending {
    Random { pool: Vec<usize>, picked: Option<usize> },
    Stack(Vec<usize>),
    Queue(VecDeque<usize>),
    Priority { metric: DegreeMetric, order: Order, heap: BinaryHeap<Entry> },
}

/// Pending fringe vertices of one growing side, ordered by a [`Strategy`].
///
/// Growth selects a vertex, inspects it, and then either keeps it (`retain`) or
/// drops it (`remove_unextendable`) before inserting newly claimed neighbors.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    shore: Shore,
    pending: Pending,
}

impl Frontier {
    pub(crate) fn new(strategy: Strategy, shore: Shore) -> Self {
        let pending = match strategy {
            Strategy::Random => Pending::Random { pool: Vec::new(), picked: None },
            Strategy::DepthFirst => Pending::Stack(Vec::new()),
            Strategy::BreadthFirst => Pending::Queue(VecDeque::new()),
            Strategy::DegreePriority { metric, order } => Pending::Priority { metric, order, heap: BinaryHeap::new() },
        };
        Self { shore, pending }
    }

    /// Number of pending entries. Priority frontiers may count stale entries.
    pub(crate) fn len(&self) -> usize {
        match &self.pending {
            Pending::Random { pool, .. } => pool.len(),
            Pending::Stack(stack) => stack.len(),
            Pending::Queue(queue) => queue.len(),
            Pending::Priority { heap, .. } => heap.len(),
        }
    }

    /// Add a vertex that was just claimed by this side.
    pub(crate) fn insert(&mut self, node: usize, partition: &Partition) {
        let shore = self.shore;
        match &mut self.pending {
            Pending::Random { pool, .. } => pool.push(node),
            Pending::Stack(stack) => stack.push(node),
            Pending::Queue(queue) => queue.push_back(node),
            Pending::Priority { metric, order, heap } => {
                let key = priority_key(*metric, partition, node, shore);
                heap.push(Entry { rank: order.rank(key), key, node });
            }
        }
    }

    /// Add a batch of vertices in random order.
    pub(crate) fn extend_shuffled<R: Rng + ?Sized>(&mut self, mut nodes: Vec<usize>, partition: &Partition, rng: &mut R) {
        nodes.shuffle(rng);
        nodes.into_iter().for_each(|node| self.insert(node, partition));
    }

    /// Pick the next vertex to inspect, without removing it (except from priority
    /// frontiers, which re-insert on `retain`).
    pub(crate) fn select_next<R: Rng + ?Sized>(&mut self, partition: &Partition, rng: &mut R) -> Option<usize> {
        let shore = self.shore;
        match &mut self.pending {
            Pending::Random { pool, picked } => {
                if pool.is_empty() { return None }
                let index = rng.random_range(0..pool.len());
                *picked = Some(index);
                Some(pool[index])
            }
            Pending::Stack(stack) => stack.last().copied(),
            Pending::Queue(queue) => queue.front().copied(),
            Pending::Priority { metric, order, heap } => {
                // Keys drift as neighbors are committed; re-rank stale entries on the way out.
                while let Some(entry) = heap.pop() {
                    if partition.class(entry.node) != shore.fringe() { continue }
                    let key = priority_key(*metric, partition, entry.node, shore);
                    if key == entry.key { return Some(entry.node) }
                    heap.push(Entry { rank: order.rank(key), key, node: entry.node });
                }
                None
            }
        }
    }

    /// Keep the last selected vertex pending.
    pub(crate) fn retain(&mut self, node: usize, partition: &Partition) {
        let shore = self.shore;
        match &mut self.pending {
            Pending::Random { picked, .. } => *picked = None,
            Pending::Stack(_) | Pending::Queue(_) => {}
            Pending::Priority { metric, order, heap } => {
                let key = priority_key(*metric, partition, node, shore);
                heap.push(Entry { rank: order.rank(key), key, node });
            }
        }
    }

    /// Drop the last selected vertex: it has nothing left to claim.
    pub(crate) fn remove_unextendable(&mut self, node: usize) {
        match &mut self.pending {
            Pending::Random { pool, picked } => {
                let index = picked.take()
                    .filter(|&i| pool.get(i) == Some(&node))
                    .or_else(|| pool.iter().position(|&v| v == node));
                if let Some(index) = index { pool.swap_remove(index); }
            }
            Pending::Stack(stack) => {
                debug_assert_eq!(stack.last(), Some(&node), "removed node is not on top of the stack");
                stack.pop();
            }
            Pending::Queue(queue) => {
                debug_assert_eq!(queue.front(), Some(&node), "removed node is not at the front of the queue");
                queue.pop_front();
            }
            Pending::Priority { .. } => {}
        }
    }
}

/// Neighbors already committed to `shore`'s interior or to the separator.
fn committed_neighbors(partition: &Partition, node: usize, shore: Shore) -> usize {
    partition.count_neighbors(node, |class| match shore {
        Shore::Warden => matches!(class, Class::WardenSeed | Class::WardenInterior | Class::Separator),
        Shore::Opposite => matches!(class, Class::OppositeInterior | Class::Separator),
    })
}

fn priority_key(metric: DegreeMetric, partition: &Partition, node: usize, shore: Shore) -> usize {
    let degree = partition.graph().degree(node);
    match metric {
        DegreeMetric::Total => degree,
        _ => metric.key(degree, committed_neighbors(partition, node, shore)),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::graph::Graph;

    /// Star around 0 with a pendant path: 0 - {1, 2, 3}, 1 - 4, 4 - 5.
    fn partition() -> Partition {
        let graph = Graph::from_pairs([(0, 1), (0, 2), (0, 3), (1, 4), (4, 5)]);
        let mut partition = Partition::new(graph, &[5]).unwrap();
        for node in 0..5 { partition.move_to(node, Class::WardenFringe) }
        partition
    }

    #[test]
    fn stack_and_queue_orders() {
        let partition = partition();
        let mut rng = StdRng::seed_from_u64(0);

        let mut stack = Frontier::new(Strategy::DepthFirst, Shore::Warden);
        let mut queue = Frontier::new(Strategy::BreadthFirst, Shore::Warden);
        for node in [1, 2, 3] {
            stack.insert(node, &partition);
            queue.insert(node, &partition);
        }
        assert_eq!(stack.select_next(&partition, &mut rng), Some(3));
        assert_eq!(queue.select_next(&partition, &mut rng), Some(1));

        stack.remove_unextendable(3);
        queue.remove_unextendable(1);
        assert_eq!(stack.select_next(&partition, &mut rng), Some(2));
        assert_eq!(queue.select_next(&partition, &mut rng), Some(2));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn random_pool_drains() {
        let partition = partition();
        let mut rng = StdRng::seed_from_u64(7);
        let mut frontier = Frontier::new(Strategy::Random, Shore::Warden);
        frontier.extend_shuffled(vec![0, 1, 2, 3], &partition, &mut rng);

        let mut seen = Vec::new();
        while let Some(node) = frontier.select_next(&partition, &mut rng) {
            frontier.remove_unextendable(node);
            seen.push(node);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn priority_prefers_high_degree() {
        let partition = partition();
        let mut rng = StdRng::seed_from_u64(0);
        let mut frontier = Frontier::new("dgr".parse().unwrap(), Shore::Warden);
        for node in [2, 1, 0, 3] { frontier.insert(node, &partition) }

        // degree(0) = 3, degree(1) = 2, degree(2) = degree(3) = 1
        let mut order = Vec::new();
        while let Some(node) = frontier.select_next(&partition, &mut rng) { order.push(node) }
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn priority_rekeys_stale_entries() {
        let mut partition = partition();
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = "degree-priority:inward-desc".parse().unwrap();
        let mut frontier = Frontier::new(strategy, Shore::Warden);
        for node in [0, 1] { frontier.insert(node, &partition) }

        // Commit two neighbors of 0 after it was inserted with key 0.
        partition.move_to(2, Class::WardenInterior);
        partition.move_to(3, Class::Separator);
        assert_eq!(frontier.select_next(&partition, &mut rng), Some(0));
    }

    #[test]
    fn priority_skips_vertices_that_left_the_fringe() {
        let mut partition = partition();
        let mut rng = StdRng::seed_from_u64(0);
        let mut frontier = Frontier::new("dgr".parse().unwrap(), Shore::Warden);
        for node in [0, 1] { frontier.insert(node, &partition) }
        partition.move_to(0, Class::Separator);
        assert_eq!(frontier.select_next(&partition, &mut rng), Some(1));
        assert_eq!(frontier.select_next(&partition, &mut rng), None);
    }
}
