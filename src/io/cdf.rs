//! Empirical cumulative distribution.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, ensure};

/// Compute `(cumulative fraction, value)` for each distinct value, ascending.
pub fn cdf(values: &[f64]) -> Result<Vec<(f64, f64)>> {
    ensure!(!values.is_empty(), "[io::cdf] Cannot build a distribution from an empty list");

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mut points = Vec::new();
    for (i, &value) in sorted.iter().enumerate() {
        if sorted.get(i + 1) != Some(&value) {
            points.push(((i + 1) as f64 / n, value));
        }
    }
    Ok(points)
}

/// Write `<cumulative fraction>,<value>` lines.
pub fn write_cdf(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::cdf] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for (fraction, value) in points {
        writeln!(writer, "{fraction},{value}")
            .with_context(|| format!("[io::cdf] Failed to write {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("[io::cdf] Failed to flush {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_repeated_values() {
        let points = cdf(&[3.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(points, vec![(0.5, 1.0), (0.75, 2.0), (1.0, 3.0)]);
    }

    #[test]
    fn single_value_has_full_mass() {
        assert_eq!(cdf(&[7.0, 7.0]).unwrap(), vec![(1.0, 7.0)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(cdf(&[]).is_err());
    }

    #[test]
    fn writes_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdf.txt");
        write_cdf(&path, &[(0.5, 1.0), (1.0, 3.0)]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "0.5,1\n1,3\n");
    }
}
