#![doc = "Warden-side vertex separator search public API"]
pub mod cli;
pub mod commands;
mod common;
mod error;
mod graph;
pub mod io;
mod partition;
mod simulation;

#[doc(inline)]
pub use error::{ConfigError, InvariantViolation, SeparatorError};

#[doc(inline)]
pub use graph::{Edge, Graph, VertexId};

#[doc(inline)]
pub use partition::{
    Class, DegreeMetric, FilterReport, GrowthConfig, GrowthReport, OptimizationReport, OptimizeConfig,
    Order, Partition, SeparationResult, Shore, Side, Sizes, StopReason, Strategy,
};

#[doc(inline)]
pub use simulation::{Simulation, Trial};
