use std::fs::File;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::SeparateArgs;
use crate::common::{ensure_dir_exists, ensure_writable};
use crate::io::write_counts;
use crate::partition::{Class, GrowthConfig};

#[derive(Serialize)]
struct Summary<'a> {
    config: &'a GrowthConfig,
    trials: u64,
    vertices: usize,
    edges: usize,
    min_separator: Option<usize>,
    max_separator: Option<usize>,
    mean_separator: Option<f64>,
}

pub fn run(args: &SeparateArgs) -> Result<()> {
    ensure_dir_exists(&args.out)?;
    let separator_path = args.out.join("separator_counts.txt");
    let warden_path = args.out.join("warden_counts.txt");
    let summary_path = args.out.join("summary.json");
    for path in [&separator_path, &warden_path, &summary_path] { ensure_writable(path, args.force)? }

    let simulation = super::load_simulation(&args.growth)?;
    let config = args.growth.growth_config();

    let mut separator_counts = Vec::with_capacity(args.trials as usize);
    let mut warden_counts = Vec::with_capacity(args.trials as usize);
    let progress_every = (args.trials / 10).max(1);

    for trial in simulation.trials(&config, args.trials) {
        let trial = trial?;
        let partition = &trial.partition;
        separator_counts.push(partition.count(Class::Separator));
        warden_counts.push(partition.count(Class::WardenSeed) + partition.count(Class::WardenInterior));

        if trial.index % progress_every == 0 {
            info!(
                trial = trial.index, of = args.trials,
                separators = partition.count(Class::Separator),
                redundant_components = trial.filter.redundant_components,
                "trial complete",
            );
        }
    }

    write_counts(&separator_path, &separator_counts)?;
    write_counts(&warden_path, &warden_counts)?;

    let summary = Summary {
        config: &config,
        trials: args.trials,
        vertices: simulation.graph().node_count(),
        edges: simulation.graph().edge_count(),
        min_separator: separator_counts.iter().copied().min(),
        max_separator: separator_counts.iter().copied().max(),
        mean_separator: (!separator_counts.is_empty())
            .then(|| separator_counts.iter().sum::<usize>() as f64 / separator_counts.len() as f64),
    };
    let file = File::create(&summary_path)
        .with_context(|| format!("Failed to create {}", summary_path.display()))?;
    serde_json::to_writer_pretty(file, &summary)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    info!(out = %args.out.display(), trials = args.trials, "separator search finished");
    Ok(())
}
