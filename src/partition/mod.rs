mod class;
mod class_set;
mod filter;
mod frontier;
mod grow;
mod optimize;
mod partition;
mod strategy;
mod verify;

pub use class::{Class, Shore, Side};
pub(self) use class_set::ClassSet;
pub use filter::FilterReport;
pub use grow::{GrowthConfig, GrowthReport};
pub use optimize::{OptimizationReport, OptimizeConfig, Sizes, StopReason};
pub use partition::{Partition, SeparationResult};
pub use strategy::{DegreeMetric, Order, Strategy};
