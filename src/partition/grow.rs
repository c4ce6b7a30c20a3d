use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{ConfigError, SeparatorError},
    graph::{Graph, VertexId},
    partition::{Class, Partition, Shore, Side, Strategy, frontier::Frontier},
};

/// Configuration for a growth trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Expansion order of the warden side.
    pub warden: Strategy,
    /// Expansion order of the opposite side.
    pub opposite: Strategy,
    /// Base RNG seed; trial `i` uses `seed + i`. Entropy when unset.
    pub seed: Option<u64>,
    /// Force the first opposite seed instead of drawing a random neutral vertex.
    pub opposite_seed: Option<VertexId>,
    /// Verify the separator invariant once growth completes.
    pub verify: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            warden: Strategy::Random,
            opposite: Strategy::Random,
            seed: None,
            opposite_seed: None,
            verify: true,
        }
    }
}

/// Counters describing one completed growth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GrowthReport {
    pub rounds: usize,
    pub opposite_seeds: usize,
    pub separators: usize,
    pub warden_side: usize,
    pub opposite_side: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step { Extended, Exhausted }

impl Partition {
    /// Grow the warden side outward from the seeds and the opposite side from random
    /// neutral vertices, alternating one claiming step each, until every vertex is
    /// classified. Warden vertices found touching the opposite side become separators.
    pub fn grow<R: Rng + ?Sized>(&mut self, config: &GrowthConfig, rng: &mut R) -> Result<GrowthReport, SeparatorError> {
        assert!(
            self.count(Class::Neutral) + self.count(Class::WardenSeed) == self.node_count(),
            "grow requires a freshly reset partition",
        );
        let graph = self.graph.clone();
        let mut warden = Frontier::new(config.warden, Shore::Warden);
        let mut opposite = Frontier::new(config.opposite, Shore::Opposite);
        let mut report = GrowthReport::default();

        // Every neutral neighbor of a seed is claimed by the warden side up front.
        let mut claimed = Vec::new();
        for seed in self.members(Class::WardenSeed).to_vec() {
            for v in graph.edges(seed) {
                if self.class(v) == Class::Neutral {
                    self.move_to(v, Class::WardenFringe);
                    claimed.push(v);
                }
            }
        }
        warden.extend_shuffled(claimed, self, rng);

        let mut opposite_done = match config.opposite_seed {
            Some(id) => {
                let node = graph.node(id).ok_or(ConfigError::UnknownVertex(id))?;
                if self.class(node) != Class::Neutral { return Err(ConfigError::OppositeSeedUnavailable(id).into()) }
                self.plant_opposite_seed(node, &mut opposite);
                report.opposite_seeds += 1;
                false
            }
            None => !self.renew_opposite_seed(&mut opposite, rng, &mut report),
        };
        let mut warden_done = false;

        debug!(
            warden = %config.warden, opposite = %config.opposite,
            seeds = self.count(Class::WardenSeed), fringe = warden.len(),
            "growth started",
        );

        while !(warden_done && opposite_done) {
            report.rounds += 1;
            if !warden_done && self.expand(&graph, Shore::Warden, &mut warden, rng) == Step::Exhausted {
                warden_done = true;
            }
            if !opposite_done
                && self.expand(&graph, Shore::Opposite, &mut opposite, rng) == Step::Exhausted
                && !self.renew_opposite_seed(&mut opposite, rng, &mut report)
            {
                opposite_done = true;
            }
        }
        debug_assert!(self.is_complete(), "growth left neutral vertices");

        report.separators = self.count(Class::Separator);
        report.warden_side = self.side_count(Side::Warden);
        report.opposite_side = self.side_count(Side::Opposite);
        debug!(
            rounds = report.rounds, separators = report.separators,
            warden = report.warden_side, opposite = report.opposite_side,
            "growth finished",
        );

        if config.verify { self.verify()? }
        Ok(report)
    }

    /// Run one claiming step for `shore`: inspect frontier vertices until one claims
    /// at least one neutral neighbor, finalizing vertices with nothing left to claim.
    fn expand<R: Rng + ?Sized>(&mut self, graph: &Graph, shore: Shore, frontier: &mut Frontier, rng: &mut R) -> Step {
        let rival = shore.other();
        loop {
            let Some(node) = frontier.select_next(self, rng) else { return Step::Exhausted };

            let mut claims = Vec::new();
            let mut touches_rival = false;
            for v in graph.edges(node) {
                match self.class(v) {
                    Class::Neutral => claims.push(v),
                    class if rival.contains(class) => touches_rival = true,
                    _ => {}
                }
            }

            // Only the warden side ever produces separators.
            let separator = shore == Shore::Warden && touches_rival;
            if separator || claims.is_empty() {
                frontier.remove_unextendable(node);
                self.move_to(node, if separator { Class::Separator } else { shore.interior() });
            } else {
                frontier.retain(node, self);
            }

            let extended = !claims.is_empty();
            for v in claims {
                self.move_to(v, shore.fringe());
                frontier.insert(v, self);
            }
            if extended { return Step::Extended }
        }
    }

    /// Plant a random neutral vertex as a new opposite seed. False if none is left.
    fn renew_opposite_seed<R: Rng + ?Sized>(&mut self, frontier: &mut Frontier, rng: &mut R, report: &mut GrowthReport) -> bool {
        let Some(&node) = self.members(Class::Neutral).choose(rng) else { return false };
        self.plant_opposite_seed(node, frontier);
        report.opposite_seeds += 1;
        true
    }

    fn plant_opposite_seed(&mut self, node: usize, frontier: &mut Frontier) {
        trace!(vertex = self.graph.id(node), "opposite seed");
        self.move_to(node, Class::OppositeFringe);
        frontier.insert(node, self);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::graph::Edge;

    fn config(strategy: &str) -> GrowthConfig {
        let strategy: Strategy = strategy.parse().unwrap();
        GrowthConfig { warden: strategy, opposite: strategy, ..GrowthConfig::default() }
    }

    #[test]
    fn path_gets_single_separator() {
        // 1 - 2 - 3 - 4 - 5 - 6, opposite starts at the far end
        let graph = Graph::from_pairs([(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
        for tag in ["random", "dfs", "bfs", "dgr", "inward", "outward"] {
            let mut partition = Partition::new(graph.clone(), &[1]).unwrap();
            let config = GrowthConfig { opposite_seed: Some(6), ..config(tag) };
            let report = partition.grow(&config, &mut StdRng::seed_from_u64(3)).unwrap();

            assert_eq!(report.separators, 1, "strategy {tag}");
            assert_eq!(report.opposite_seeds, 1);
            assert_eq!(report.warden_side + report.opposite_side + report.separators, 6);
            assert!(partition.is_complete());
        }
    }

    #[test]
    fn seeds_claim_their_neighbors_first() {
        // 1 - 2 - 3; forcing the opposite side to start at 2 is rejected
        let graph = Graph::from_pairs([(1, 2), (2, 3)]);
        let mut partition = Partition::new(graph, &[1]).unwrap();
        let config = GrowthConfig { opposite_seed: Some(2), ..GrowthConfig::default() };
        let err = partition.grow(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, SeparatorError::Config(ConfigError::OppositeSeedUnavailable(2))));
    }

    #[test]
    fn unknown_opposite_seed_is_rejected() {
        let graph = Graph::from_pairs([(1, 2), (2, 3)]);
        let mut partition = Partition::new(graph, &[1]).unwrap();
        let config = GrowthConfig { opposite_seed: Some(99), ..GrowthConfig::default() };
        let err = partition.grow(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, SeparatorError::Config(ConfigError::UnknownVertex(99))));
    }

    #[test]
    fn disconnected_neutral_vertices_get_new_opposite_seeds() {
        // Warden component {1, 2}, plus two isolated components {3, 4} and {5}
        let graph = Graph::new([5], [Edge::new(1, 2), Edge::new(3, 4)]);
        let mut partition = Partition::new(graph, &[1]).unwrap();
        let report = partition.grow(&config("bfs"), &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(report.separators, 0);
        assert_eq!(report.opposite_seeds, 2);
        assert_eq!(partition.result().warden_side, vec![1, 2]);
        assert_eq!(partition.result().opposite_side, vec![3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "freshly reset")]
    fn grow_twice_panics() {
        let graph = Graph::from_pairs([(1, 2), (2, 3)]);
        let mut partition = Partition::new(graph, &[1]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        partition.grow(&GrowthConfig::default(), &mut rng).unwrap();
        let _ = partition.grow(&GrowthConfig::default(), &mut rng);
    }
}
