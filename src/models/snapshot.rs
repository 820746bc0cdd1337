// Everything one run collected, handed to the renderer as a unit.

use super::Container;
use crate::error::CollectError;
use chrono::NaiveDateTime;

/// Recent log output of the watched container.
#[derive(Debug)]
pub struct LogSection {
    pub container: String,
    pub lines: Result<String, CollectError>,
}

/// Outcome of the three runtime calls of a single run. Nothing here outlives the run.
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub generated_at: NaiveDateTime,
    pub containers: Result<Vec<Container>, CollectError>,
    /// Raw `docker stats` table text; parsed by the renderer.
    pub stats: Result<String, CollectError>,
    pub logs: LogSection,
}

impl DashboardSnapshot {
    /// Containers that were listed, or none when the listing failed.
    pub fn container_list(&self) -> &[Container] {
        self.containers.as_deref().unwrap_or(&[])
    }
}
