//! Readers and writers for the plain-text formats used by the command line.
//!
//! - `text` - edge lists and warden lists (read), one-value-per-line counts,
//!   separator trends, and ratios (write)
//! - `cdf` - empirical cumulative distribution of a list of values

mod cdf;
mod text;

pub use cdf::{cdf, write_cdf};
pub use text::*;
