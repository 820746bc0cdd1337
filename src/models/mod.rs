// Domain models: transient records rebuilt on every run

mod container;
mod snapshot;
mod stats;

pub use container::{Container, ContainerState};
pub use snapshot::{DashboardSnapshot, LogSection};
pub use stats::{StatsRow, parse_percent};
