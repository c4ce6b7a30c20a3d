use std::{cmp::Ordering, collections::BinaryHeap, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{ConfigError, SeparatorError},
    graph::Graph,
    partition::{Class, Order, Partition, Shore, Side},
};

/// Configuration for separator optimization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Which warden fringe vertices are promoted first, by valid separator count.
    pub warden_order: Order,
    /// Which opposite fringe vertices are promoted first, by valid separator count.
    pub opposite_order: Order,
    /// Iteration budget. Zero leaves the partition untouched.
    pub threshold: usize,
    /// Border vertices with fewer valid separators than this start out fixed.
    pub min_valid_separators: usize,
    /// Verify the separator invariant after every swap.
    pub verify: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            warden_order: Order::Descending,
            opposite_order: Order::Descending,
            threshold: 1000,
            min_valid_separators: 2,
            verify: true,
        }
    }
}

/// Why optimization stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "shore", rename_all = "kebab-case")]
pub enum StopReason {
    /// The iteration budget ran out.
    BudgetExhausted,
    /// A side had no fringe vertex left to promote.
    FringeEmpty(Shore),
    /// The best fringe vertex of a side would not shrink the separator.
    Unprofitable(Shore),
}

/// Size of each side of the cut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Sizes {
    pub warden: usize,
    pub opposite: usize,
    pub separator: usize,
}

impl Sizes {
    #[inline] pub fn total(&self) -> usize { self.warden + self.opposite + self.separator }
}

/// Outcome of an optimization run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizationReport {
    pub iterations: usize,
    pub swaps: usize,
    pub skipped_seeds: usize,
    pub stop: StopReason,
    pub before: Sizes,
    pub after: Sizes,
    /// Separator size at the start of every iteration, then the final size.
    pub trend: Vec<usize>,
}

impl OptimizationReport {
    /// Warden side size over opposite side size after optimization, or `None` when
    /// the opposite side is empty.
    pub fn ratio(&self) -> Option<f64> {
        (self.after.opposite > 0).then(|| self.after.warden as f64 / self.after.opposite as f64)
    }
}

/// Heap entry keyed by valid separator count. Ties go to the smaller node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FringeEntry {
    rank: i64,
    count: usize,
    node: usize,
    version: u32,
}

impl Ord for FringeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FringeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Priority queue over one side's fringe, with lazy deletion: pushing a node
/// invalidates its earlier entries.
#[derive(Debug, Clone)]
pub(crate) struct FringeQueue {
    order: Order,
    heap: BinaryHeap<FringeEntry>,
    version: Vec<u32>,
}

impl FringeQueue {
    pub(crate) fn new(order: Order, num_nodes: usize) -> Self {
        Self { order, heap: BinaryHeap::new(), version: vec![0; num_nodes] }
    }

    /// Insert or re-key `node`.
    pub(crate) fn push(&mut self, node: usize, count: usize) {
        self.version[node] = self.version[node].wrapping_add(1);
        self.heap.push(FringeEntry { rank: self.order.rank(count), count, node, version: self.version[node] });
    }

    /// Invalidate every entry for `node`.
    #[inline]
    pub(crate) fn forget(&mut self, node: usize) {
        self.version[node] = self.version[node].wrapping_add(1);
    }

    /// Pop the best live entry as `(node, count)`.
    pub(crate) fn pop(&mut self) -> Option<(usize, usize)> {
        while let Some(entry) = self.heap.pop() {
            if entry.version == self.version[entry.node] {
                self.forget(entry.node);
                return Some((entry.node, entry.count));
            }
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Swap {
    Swapped,
    Skipped,
    Stopped(StopReason),
}

/// Greedy separator shrinking: repeatedly promote a fringe vertex adjacent to
/// several separators that it alone connects to its side, and release those
/// separators to the other side.
struct Optimizer<'a> {
    partition: &'a mut Partition,
    graph: Arc<Graph>,
    min_valid: usize,
    warden: FringeQueue,
    opposite: FringeQueue,
    swaps: usize,
    skipped_seeds: usize,
}

impl<'a> Optimizer<'a> {
    fn new(partition: &'a mut Partition, config: &OptimizeConfig) -> Self {
        let graph = partition.graph.clone();
        let n = graph.node_count();
        Self {
            partition,
            graph,
            min_valid: config.min_valid_separators,
            warden: FringeQueue::new(config.warden_order, n),
            opposite: FringeQueue::new(config.opposite_order, n),
            swaps: 0,
            skipped_seeds: 0,
        }
    }

    #[inline]
    fn queue(&mut self, shore: Shore) -> &mut FringeQueue {
        match shore {
            Shore::Warden => &mut self.warden,
            Shore::Opposite => &mut self.opposite,
        }
    }

    /// Neighbors of `node` on `shore`.
    #[inline]
    fn shore_neighbors(&self, node: usize, shore: Shore) -> usize {
        self.partition.count_neighbors(node, |class| shore.contains(class))
    }

    #[inline]
    fn separator_neighbors(&self, node: usize) -> usize {
        self.partition.count_neighbors(node, |class| class == Class::Separator)
    }

    /// Separators adjacent to `node` whose only `shore` neighbor is `node`.
    fn valid_separators(&self, node: usize, shore: Shore) -> usize {
        self.graph.edges(node)
            .filter(|&s| self.partition.class(s) == Class::Separator && self.shore_neighbors(s, shore) == 1)
            .count()
    }

    fn enter_fringe(&mut self, node: usize, shore: Shore) {
        self.partition.move_to(node, shore.fringe());
        let count = self.valid_separators(node, shore);
        self.queue(shore).push(node, count);
    }

    fn park(&mut self, node: usize, shore: Shore) {
        self.partition.move_to(node, shore.fixed());
        self.queue(shore).forget(node);
    }

    /// Classify every border vertex (a side vertex with a separator neighbor) as
    /// fringe or fixed, depending on its valid separator count.
    fn classify_borders(&mut self) {
        let graph = self.graph.clone();
        for shore in [Shore::Warden, Shore::Opposite] {
            let border = (0..graph.node_count())
                .filter(|&u| shore.contains(self.partition.class(u)))
                .filter(|&u| graph.edges(u).any(|v| self.partition.class(v) == Class::Separator))
                .collect::<Vec<_>>();

            for node in border {
                let count = self.valid_separators(node, shore);
                if count >= self.min_valid {
                    self.partition.move_to(node, shore.fringe());
                    self.queue(shore).push(node, count);
                } else {
                    self.partition.move_to(node, shore.fixed());
                }
            }
        }
        debug!(
            warden_fringe = self.partition.count(Class::WardenFringe),
            warden_fixed = self.partition.count(Class::WardenFixed),
            opposite_fringe = self.partition.count(Class::OppositeFringe),
            opposite_fixed = self.partition.count(Class::OppositeFixed),
            "border classified",
        );
    }

    /// Pop the best fringe vertex of `shore` whose queued count is still current.
    fn pop_candidate(&mut self, shore: Shore) -> Option<(usize, usize)> {
        loop {
            let (node, count) = self.queue(shore).pop()?;
            if self.partition.class(node) != shore.fringe() { continue }

            let current = self.valid_separators(node, shore);
            if current == count { return Some((node, count)) }
            self.queue(shore).push(node, current);
        }
    }

    /// Try to promote one fringe vertex of `shore` into the separator.
    fn swap(&mut self, shore: Shore) -> Result<Swap, SeparatorError> {
        let Some((node, count)) = self.pop_candidate(shore) else {
            return Ok(Swap::Stopped(StopReason::FringeEmpty(shore)));
        };
        if count <= 1 {
            self.queue(shore).push(node, count);
            return Ok(Swap::Stopped(StopReason::Unprofitable(shore)));
        }
        if self.partition.is_seed(node) {
            self.park(node, shore);
            self.skipped_seeds += 1;
            return Ok(Swap::Skipped);
        }

        self.partition.move_to(node, Class::Separator);
        let graph = self.graph.clone();
        for neighbor in graph.edges(node) {
            match self.partition.class(neighbor) {
                Class::Separator => {
                    if self.shore_neighbors(neighbor, shore) == 0 { self.release(neighbor, shore.other()) }
                }
                class if shore.contains(class) && self.partition.is_seed(neighbor) => self.park(neighbor, shore),
                class if class == shore.interior() || class == shore.fringe() || class == shore.fixed() => {
                    self.enter_fringe(neighbor, shore)
                }
                class => {
                    return Err(SeparatorError::ImpossibleClassification {
                        vertex: graph.id(node),
                        neighbor: graph.id(neighbor),
                        class,
                    });
                }
            }
        }
        self.swaps += 1;
        Ok(Swap::Swapped)
    }

    /// Move a separator that lost all its neighbors on one side to the other side's fringe.
    fn release(&mut self, node: usize, shore: Shore) {
        self.enter_fringe(node, shore);

        // Border vertices that no longer touch the separator go back to the interior.
        let graph = self.graph.clone();
        for v in graph.edges(node) {
            let class = self.partition.class(v);
            if (class == shore.fringe() || class == shore.fixed()) && self.separator_neighbors(v) == 0 {
                let interior = if self.partition.is_seed(v) { Class::WardenSeed } else { shore.interior() };
                self.partition.move_to(v, interior);
                self.queue(shore).forget(v);
            }
        }
    }
}

impl Partition {
    /// Current size of each side.
    pub fn sizes(&self) -> Sizes {
        Sizes {
            warden: self.side_count(Side::Warden),
            opposite: self.side_count(Side::Opposite),
            separator: self.side_count(Side::Separator),
        }
    }

    /// Shrink the separator of a completed, valid partition by alternating greedy
    /// swaps on the warden and opposite sides, for at most `config.threshold` iterations.
    ///
    /// Seeds on the border end up in `WardenFringe` or `WardenFixed`, so use
    /// [`Partition::seeds`] rather than `count(Class::WardenSeed)` to find them afterwards.
    pub fn optimize(&mut self, config: &OptimizeConfig) -> Result<OptimizationReport, SeparatorError> {
        if config.min_valid_separators == 0 { return Err(ConfigError::ZeroPromotionThreshold.into()) }
        if config.verify { self.verify()? }

        let before = self.sizes();
        let mut report = OptimizationReport {
            iterations: 0,
            swaps: 0,
            skipped_seeds: 0,
            stop: StopReason::BudgetExhausted,
            before,
            after: before,
            trend: Vec::new(),
        };
        if config.threshold == 0 { return Ok(report) }

        let verify = config.verify;
        let progress_every = (config.threshold / 10).max(1);
        let mut optimizer = Optimizer::new(self, config);
        optimizer.classify_borders();
        if verify { optimizer.partition.verify()? }

        for iteration in 0..config.threshold {
            let separators = optimizer.partition.count(Class::Separator);
            if iteration % progress_every == 0 {
                info!(iteration, budget = config.threshold, separators, "optimizing");
            }
            report.trend.push(separators);
            report.iterations += 1;

            let warden = optimizer.swap(Shore::Warden)?;
            if verify { optimizer.partition.verify()? }
            if let Swap::Stopped(reason) = warden {
                report.stop = reason;
                break;
            }

            // Only the warden side holds seeds, so the opposite side never skips.
            let opposite = optimizer.swap(Shore::Opposite)?;
            if verify { optimizer.partition.verify()? }
            if let Swap::Stopped(reason) = opposite {
                report.stop = reason;
                break;
            }
        }

        report.swaps = optimizer.swaps;
        report.skipped_seeds = optimizer.skipped_seeds;
        report.after = self.sizes();
        report.trend.push(report.after.separator);

        info!(
            stop = ?report.stop, iterations = report.iterations, swaps = report.swaps,
            warden = report.after.warden, opposite = report.after.opposite,
            separator = report.after.separator, total = report.after.total(),
            "optimization finished (before: warden {}, opposite {}, separator {})",
            report.before.warden, report.before.opposite, report.before.separator,
        );
        Ok(report)
    }
}
