use std::collections::VecDeque;

use crate::{
    error::InvariantViolation,
    partition::{Partition, Side},
};

impl Partition {
    /// Check that every vertex reachable from a warden seed without crossing a
    /// separator is on the warden side. Read-only; safe to call at any point.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let graph = self.graph();
        let mut visited = vec![false; graph.node_count()];
        let mut queue = VecDeque::new();

        for seed in self.seeds() {
            if visited[seed] { continue }
            visited[seed] = true;
            queue.push_back(seed);

            while let Some(u) = queue.pop_front() {
                for v in graph.edges(u) {
                    if visited[v] { continue }
                    match self.side(v) {
                        Side::Separator => visited[v] = true,
                        Side::Warden => {
                            visited[v] = true;
                            queue.push_back(v);
                        }
                        Side::Opposite | Side::Neutral => {
                            return Err(InvariantViolation { from: graph.id(u), to: graph.id(v), class: self.class(v) });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
