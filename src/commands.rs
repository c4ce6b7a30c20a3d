pub mod cdf;
pub mod optimize;
pub mod separate;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::GrowthArgs;
use crate::io::{read_edge_list, read_wardens};
use crate::simulation::Simulation;

/// Load the graph and warden list named by `args` into a simulation.
pub(crate) fn load_simulation(args: &GrowthArgs) -> Result<Simulation> {
    let graph = read_edge_list(&args.edges)?;
    let wardens = read_wardens(&args.wardens)?;
    let simulation = Simulation::new(graph, &wardens)
        .with_context(|| format!("Invalid warden list {}", args.wardens.display()))?;
    info!(wardens = wardens.len(), "loaded wardens");
    Ok(simulation)
}
