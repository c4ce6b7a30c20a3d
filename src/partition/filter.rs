use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::partition::{Class, Partition, Side};

/// What the component filter changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Connected components of the warden side.
    pub components: usize,
    /// Components without a seed, moved to the opposite side.
    pub redundant_components: usize,
    /// Vertices moved by dropping redundant components.
    pub reassigned: usize,
    /// Separators left without a warden-side neighbor, moved to the opposite side.
    pub dropped_separators: usize,
}

const UNVISITED: usize = usize::MAX;

impl Partition {
    /// Move every warden-side component that contains no seed to the opposite side,
    /// then drop separators that no longer border the warden side.
    pub fn filter_components(&mut self) -> FilterReport {
        let graph = self.graph.clone();
        let mut component = vec![UNVISITED; graph.node_count()];
        let mut report = FilterReport::default();
        let mut redundant = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..graph.node_count() {
            if component[start] != UNVISITED || self.side(start) != Side::Warden { continue }

            let label = report.components;
            report.components += 1;
            component[start] = label;
            queue.push_back(start);

            let mut members = Vec::new();
            let mut has_seed = false;
            while let Some(u) = queue.pop_front() {
                members.push(u);
                has_seed |= self.is_seed(u);
                for v in graph.edges(u) {
                    if component[v] == UNVISITED && self.side(v) == Side::Warden {
                        component[v] = label;
                        queue.push_back(v);
                    }
                }
            }

            if !has_seed {
                report.redundant_components += 1;
                redundant.extend(members);
            }
        }

        report.reassigned = redundant.len();
        for node in redundant { self.move_to(node, Class::OppositeInterior) }

        let stranded = self.members(Class::Separator).iter().copied()
            .filter(|&s| !graph.edges(s).any(|v| self.side(v) == Side::Warden))
            .collect::<Vec<_>>();
        report.dropped_separators = stranded.len();
        for node in stranded { self.move_to(node, Class::OppositeInterior) }

        debug!(
            components = report.components, redundant = report.redundant_components,
            reassigned = report.reassigned, dropped_separators = report.dropped_separators,
            "component filter",
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn seedless_component_moves_to_opposite() {
        // 1 - 2 - 3 - 4 - 5, with warden side {1, 4} and separators {2, 5}
        let graph = Graph::from_pairs([(1, 2), (2, 3), (3, 4), (4, 5)]);
        let mut partition = Partition::from_sides(graph, &[1], &[1, 4], &[2, 5]).unwrap();
        let report = partition.filter_components();

        assert_eq!(report.components, 2);
        assert_eq!(report.redundant_components, 1);
        assert_eq!(report.reassigned, 1);
        // 5 only bordered the dropped component; 2 still borders the seed.
        assert_eq!(report.dropped_separators, 1);

        let result = partition.result();
        assert_eq!(result.warden_side, vec![1]);
        assert_eq!(result.separators, vec![2]);
        assert_eq!(result.opposite_side, vec![3, 4, 5]);
        assert_eq!(partition.verify(), Ok(()));
    }

    #[test]
    fn filter_is_idempotent() {
        let graph = Graph::from_pairs([(1, 2), (2, 3), (3, 4), (4, 5)]);
        let mut partition = Partition::from_sides(graph, &[1], &[1, 4], &[2, 5]).unwrap();
        partition.filter_components();
        let before = partition.result();

        let report = partition.filter_components();
        assert_eq!(report, FilterReport { components: 1, ..FilterReport::default() });
        assert_eq!(partition.result(), before);
    }
}
