use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Direction of a priority ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

/// What a degree-priority frontier ranks vertices by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeMetric {
    /// All neighbors.
    Total,
    /// Neighbors already committed to the growing side (or to the separator).
    Inward,
    /// Neighbors not yet committed.
    Outward,
}

/// Order in which a growing side picks the next frontier vertex to expand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Strategy {
    #[default]
    Random,
    DepthFirst,
    BreadthFirst,
    DegreePriority { metric: DegreeMetric, order: Order },
}

impl Order {
    /// Heap rank of a key: larger ranks pop first.
    #[inline]
    pub(crate) fn rank(self, key: usize) -> i64 {
        match self {
            Order::Descending => key as i64,
            Order::Ascending => -(key as i64),
        }
    }
}

impl DegreeMetric {
    /// Key of a vertex with the given degree and number of committed neighbors.
    #[inline]
    pub(crate) fn key(self, degree: usize, committed: usize) -> usize {
        match self {
            DegreeMetric::Total => degree,
            DegreeMetric::Inward => committed,
            DegreeMetric::Outward => degree - committed,
        }
    }
}

impl FromStr for Order {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "large-to-small" | "lts" | "desc" | "descending" => Ok(Order::Descending),
            "small-to-large" | "stl" | "asc" | "ascending" => Ok(Order::Ascending),
            _ => Err(ConfigError::UnknownOrder(tag.to_string())),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownStrategy(tag.to_string());
        let normalized = tag.trim().to_ascii_lowercase();

        let strategy = match normalized.as_str() {
            "random" => Strategy::Random,
            "depth-first" | "dfs" => Strategy::DepthFirst,
            "breadth-first" | "bfs" => Strategy::BreadthFirst,
            "degree-priority" | "dgr" => Strategy::DegreePriority { metric: DegreeMetric::Total, order: Order::Descending },
            "inward" => Strategy::DegreePriority { metric: DegreeMetric::Inward, order: Order::Ascending },
            "outward" => Strategy::DegreePriority { metric: DegreeMetric::Outward, order: Order::Ascending },
            other => {
                let tail = other.strip_prefix("degree-priority:").ok_or_else(unknown)?;
                let (metric, order) = tail.split_once('-').ok_or_else(unknown)?;
                let metric = match metric {
                    "total" => DegreeMetric::Total,
                    "inward" => DegreeMetric::Inward,
                    "outward" => DegreeMetric::Outward,
                    _ => return Err(unknown()),
                };
                let order = match order {
                    "asc" => Order::Ascending,
                    "desc" => Order::Descending,
                    _ => return Err(unknown()),
                };
                Strategy::DegreePriority { metric, order }
            }
        };
        Ok(strategy)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::Ascending => "small-to-large",
            Order::Descending => "large-to-small",
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::DepthFirst => f.write_str("depth-first"),
            Strategy::BreadthFirst => f.write_str("breadth-first"),
            Strategy::DegreePriority { metric, order } => {
                let metric = match metric {
                    DegreeMetric::Total => "total",
                    DegreeMetric::Inward => "inward",
                    DegreeMetric::Outward => "outward",
                };
                let order = match order {
                    Order::Ascending => "asc",
                    Order::Descending => "desc",
                };
                write!(f, "degree-priority:{metric}-{order}")
            }
        }
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self { strategy.to_string() }
}

impl TryFrom<String> for Strategy {
    type Error = ConfigError;
    fn try_from(tag: String) -> Result<Self, Self::Error> { tag.parse() }
}
