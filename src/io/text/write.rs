//! Text writing operations.

use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

fn write_lines<I, T>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let file = File::create(path)
        .with_context(|| format!("[io::text::write] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")
            .with_context(|| format!("[io::text::write] Failed to write {}", path.display()))?;
    }
    writer.flush()
        .with_context(|| format!("[io::text::write] Failed to flush {}", path.display()))
}

/// Write one count per line.
pub fn write_counts(path: &Path, counts: &[usize]) -> Result<()> {
    write_lines(path, counts)
}

/// Write a separator trend as `<size>,<iteration>` lines.
pub fn write_trend(path: &Path, trend: &[usize]) -> Result<()> {
    write_lines(path, trend.iter().enumerate().map(|(i, size)| format!("{size},{i}")))
}

/// Append a single value as a new line, creating the file if needed.
pub fn append_value(path: &Path, value: impl Display) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)
        .with_context(|| format!("[io::text::write] Failed to open {}", path.display()))?;
    writeln!(file, "{value}")
        .with_context(|| format!("[io::text::write] Failed to append to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn writes_counts_and_trend() {
        let dir = tempfile::tempdir().unwrap();
        let counts = dir.path().join("counts.txt");
        let trend = dir.path().join("trend.txt");

        write_counts(&counts, &[3, 1, 4]).unwrap();
        write_trend(&trend, &[9, 7, 7]).unwrap();

        assert_eq!(fs::read_to_string(counts).unwrap(), "3\n1\n4\n");
        assert_eq!(fs::read_to_string(trend).unwrap(), "9,0\n7,1\n7,2\n");
    }

    #[test]
    fn append_value_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratio.txt");
        append_value(&path, 0.5).unwrap();
        append_value(&path, 2).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "0.5\n2\n");
    }
}
