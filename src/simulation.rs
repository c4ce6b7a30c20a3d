use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    error::{ConfigError, SeparatorError},
    graph::{Graph, VertexId},
    partition::{Class, FilterReport, GrowthConfig, GrowthReport, Partition},
};

/// Runs independent growth trials over one shared graph and warden set.
#[derive(Clone, Debug)]
pub struct Simulation {
    pristine: Partition,
}

/// A grown and filtered partition, with what each phase reported.
#[derive(Clone, Debug)]
pub struct Trial {
    pub index: u64,
    pub partition: Partition,
    pub growth: GrowthReport,
    pub filter: FilterReport,
}

impl Simulation {
    pub fn new(graph: impl Into<Arc<Graph>>, wardens: &[VertexId]) -> Result<Self, ConfigError> {
        Ok(Self { pristine: Partition::new(graph, wardens)? })
    }

    #[inline] pub fn graph(&self) -> &Graph { self.pristine.graph() }

    /// Run trial `index`: grow a fresh partition, then drop seedless warden components.
    pub fn trial(&self, config: &GrowthConfig, index: u64) -> Result<Trial, SeparatorError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
            None => StdRng::from_os_rng(),
        };

        let mut partition = self.pristine.clone();
        let growth = partition.grow(config, &mut rng)?;
        let filter = partition.filter_components();
        if config.verify { partition.verify()? }

        debug!(trial = index, separators = partition.count(Class::Separator), "trial finished");
        Ok(Trial { index, partition, growth, filter })
    }

    /// Lazily run trials `0..count`.
    pub fn trials<'a>(&'a self, config: &'a GrowthConfig, count: u64) -> impl Iterator<Item = Result<Trial, SeparatorError>> + 'a {
        (0..count).map(move |index| self.trial(config, index))
    }
}
