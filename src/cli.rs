use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::partition::{GrowthConfig, OptimizeConfig, Order, Strategy};

/// Warden-side separator search over large undirected graphs
#[derive(Parser, Debug)]
#[command(name = "separator-search", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run independent separator-search trials and record separator sizes
    Separate(SeparateArgs),

    /// Grow a separator, then shrink it by local search, over several rounds
    Optimize(OptimizeArgs),

    /// Turn a one-value-per-line file into an empirical CDF
    Cdf(CdfArgs),
}

/// Graph input and growth options shared by `separate` and `optimize`.
#[derive(Args, Debug)]
pub struct GrowthArgs {
    /// Edge list, one `a|b|rel` or `a b` edge per line
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub edges: PathBuf,

    /// Warden list, one vertex id per line
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub wardens: PathBuf,

    /// Warden expansion order: random, dfs, bfs, dgr, inward, outward, degree-priority:<metric>-<asc|desc>
    #[arg(long, default_value = "random")]
    pub warden_strategy: Strategy,

    /// Opposite expansion order (same tags as --warden-strategy)
    #[arg(long, default_value = "random")]
    pub opposite_strategy: Strategy,

    /// Base RNG seed; trial i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip invariant verification
    #[arg(long)]
    pub no_verify: bool,
}

impl GrowthArgs {
    pub fn growth_config(&self) -> GrowthConfig {
        GrowthConfig {
            warden: self.warden_strategy,
            opposite: self.opposite_strategy,
            seed: self.seed,
            opposite_seed: None,
            verify: !self.no_verify,
        }
    }
}

#[derive(Args, Debug)]
pub struct SeparateArgs {
    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Number of independent trials
    #[arg(short, long, default_value_t = 1)]
    pub trials: u64,

    /// Output directory
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Overwrite existing result files
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Warden fringe order: large-to-small (lts) or small-to-large (stl)
    #[arg(long, default_value = "large-to-small")]
    pub warden_order: Order,

    /// Opposite fringe order: large-to-small (lts) or small-to-large (stl)
    #[arg(long, default_value = "large-to-small")]
    pub opposite_order: Order,

    /// Iteration budget per round
    #[arg(long, default_value_t = 1000)]
    pub threshold: usize,

    /// Border vertices with fewer valid separators start out fixed
    #[arg(long, default_value_t = 2)]
    pub min_valid_separators: usize,

    /// Number of grow-then-optimize rounds
    #[arg(short, long, default_value_t = 20)]
    pub rounds: u64,

    /// Output directory
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Overwrite existing result files
    #[arg(long)]
    pub force: bool,
}

impl OptimizeArgs {
    pub fn optimize_config(&self) -> OptimizeConfig {
        OptimizeConfig {
            warden_order: self.warden_order,
            opposite_order: self.opposite_order,
            threshold: self.threshold,
            min_valid_separators: self.min_valid_separators,
            verify: !self.growth.no_verify,
        }
    }
}

#[derive(Args, Debug)]
pub struct CdfArgs {
    /// Input file, one number per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file (`<fraction>,<value>` per line)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
