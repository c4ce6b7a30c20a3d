//! Text reading operations.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::graph::{Edge, Graph, VertexId};

/// Yields `(line number, trimmed line)` for every line that is not blank or a `#` comment.
fn content_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader.lines().enumerate().filter_map(|(i, line)| match line {
        Ok(line) => {
            let line = line.trim();
            (!line.is_empty() && !line.starts_with('#')).then(|| Ok((i + 1, line.to_string())))
        }
        Err(err) => Some(Err(err).with_context(|| format!("[io::text::read] Failed to read line {}", i + 1))),
    })
}

fn parse_field<T: FromStr>(field: &str, number: usize) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field.parse::<T>()
        .with_context(|| format!("[io::text::read] line {number}: invalid value '{field}'"))
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("[io::text::read] Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Parse an edge list: one edge per line as `a|b|rel` or `a b`. Any columns after
/// the two endpoints are ignored.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut edges = Vec::new();
    for line in content_lines(reader) {
        let (number, line) = line?;
        let mut fields = line.split(|c: char| c == '|' || c.is_whitespace()).filter(|f| !f.is_empty());
        let (Some(lhs), Some(rhs)) = (fields.next(), fields.next()) else {
            bail!("[io::text::read] line {number}: expected two vertex ids, got '{line}'");
        };
        edges.push(Edge::new(parse_field(lhs, number)?, parse_field(rhs, number)?));
    }
    Ok(Graph::new(std::iter::empty::<VertexId>(), edges))
}

/// Read an edge list file. See [`parse_edge_list`].
pub fn read_edge_list(path: &Path) -> Result<Graph> {
    let graph = parse_edge_list(open(path)?)
        .with_context(|| format!("[io::text::read] Failed to parse edge list {}", path.display()))?;
    info!(path = %path.display(), vertices = graph.node_count(), edges = graph.edge_count(), "loaded graph");
    Ok(graph)
}

/// Parse a list of vertex ids, one per line.
pub fn parse_wardens<R: BufRead>(reader: R) -> Result<Vec<VertexId>> {
    content_lines(reader)
        .map(|line| {
            let (number, line) = line?;
            parse_field(&line, number)
        })
        .collect()
}

/// Read a warden file. See [`parse_wardens`].
pub fn read_wardens(path: &Path) -> Result<Vec<VertexId>> {
    parse_wardens(open(path)?)
        .with_context(|| format!("[io::text::read] Failed to parse warden list {}", path.display()))
}

/// Read one number per line.
pub fn read_values(path: &Path) -> Result<Vec<f64>> {
    content_lines(open(path)?)
        .map(|line| {
            let (number, line) = line?;
            parse_field(&line, number)
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("[io::text::read] Failed to parse values {}", path.display()))
}
