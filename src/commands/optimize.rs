use std::fs::File;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::OptimizeArgs;
use crate::common::{ensure_dir_exists, ensure_writable, remove_stale};
use crate::io::{append_value, write_trend};
use crate::partition::{GrowthConfig, OptimizationReport, OptimizeConfig, SeparationResult};

#[derive(Serialize)]
struct Round {
    round: u64,
    grown: SeparationSizes,
    report: OptimizationReport,
}

#[derive(Serialize)]
struct SeparationSizes {
    separators: usize,
    warden: usize,
    opposite: usize,
}

impl From<&SeparationResult> for SeparationSizes {
    fn from(result: &SeparationResult) -> Self {
        Self {
            separators: result.separator_count(),
            warden: result.warden_count(),
            opposite: result.opposite_count(),
        }
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    growth: &'a GrowthConfig,
    optimize: &'a OptimizeConfig,
    rounds: &'a [Round],
}

pub fn run(args: &OptimizeArgs) -> Result<()> {
    ensure_dir_exists(&args.out)?;
    let ratio_path = args.out.join("ratio.txt");
    let summary_path = args.out.join("summary.json");
    for path in [&ratio_path, &summary_path] { ensure_writable(path, args.force)? }
    remove_stale(&ratio_path)?;

    let simulation = super::load_simulation(&args.growth)?;
    let growth = args.growth.growth_config();
    let optimize = args.optimize_config();

    let mut rounds = Vec::with_capacity(args.rounds as usize);
    for round in 1..=args.rounds {
        let mut trial = simulation.trial(&growth, round)?;
        let grown = SeparationSizes::from(&trial.partition.result());
        let report = trial.partition.optimize(&optimize)
            .with_context(|| format!("Optimization failed in round {round}"))?;

        let trend_path = args.out.join(format!("separator_trend_{round}.txt"));
        ensure_writable(&trend_path, args.force)?;
        write_trend(&trend_path, &report.trend)?;
        match report.ratio() {
            Some(ratio) => append_value(&ratio_path, ratio)?,
            None => warn!(round, "opposite side is empty, no ratio recorded"),
        }

        info!(
            round, of = args.rounds,
            before = grown.separators, after = report.after.separator,
            iterations = report.iterations, stop = ?report.stop,
            "round complete",
        );
        rounds.push(Round { round, grown, report });
    }

    let summary = Summary { growth: &growth, optimize: &optimize, rounds: &rounds };
    let file = File::create(&summary_path)
        .with_context(|| format!("Failed to create {}", summary_path.display()))?;
    serde_json::to_writer_pretty(file, &summary)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    info!(out = %args.out.display(), rounds = args.rounds, "optimization finished");
    Ok(())
}
