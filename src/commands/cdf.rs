use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CdfArgs;
use crate::common::ensure_writable;
use crate::io::{cdf, read_values, write_cdf};

pub fn run(args: &CdfArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;

    let values = read_values(&args.input)?;
    let points = cdf(&values)
        .with_context(|| format!("No values in {}", args.input.display()))?;
    write_cdf(&args.output, &points)?;

    info!(input = %args.input.display(), values = values.len(), distinct = points.len(), "wrote distribution");
    Ok(())
}
