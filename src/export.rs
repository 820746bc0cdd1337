// Machine-readable copy of a snapshot (JSON, camelCase), written next to the page when configured.

use crate::dashboard::TIMESTAMP_FORMAT;
use crate::docker_repo::parse_stats_table;
use crate::error::CollectError;
use crate::models::{Container, DashboardSnapshot, StatsRow};
use crate::version;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsExport {
    #[serde(flatten)]
    pub row: StatsRow,
    pub cpu_percent_value: Option<f64>,
    pub memory_percent_value: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsExport {
    pub container: String,
    pub available: bool,
    pub line_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExport<'a> {
    pub generator: String,
    pub generated_at: String,
    pub containers: &'a [Container],
    pub containers_error: Option<String>,
    pub stats: Vec<StatsExport>,
    pub stats_error: Option<String>,
    pub logs: LogsExport,
}

fn error_text<T>(r: &Result<T, CollectError>) -> Option<String> {
    r.as_ref().err().map(ToString::to_string)
}

impl<'a> SnapshotExport<'a> {
    pub fn from_snapshot(snapshot: &'a DashboardSnapshot) -> Self {
        let stats = snapshot
            .stats
            .as_ref()
            .ok()
            .and_then(|raw| parse_stats_table(raw))
            .unwrap_or_default()
            .into_iter()
            .map(|row| StatsExport {
                cpu_percent_value: row.cpu_percent_value(),
                memory_percent_value: row.memory_percent_value(),
                row,
            })
            .collect();
        let logs = &snapshot.logs;
        Self {
            generator: version::generator_tag(),
            generated_at: snapshot.generated_at.format(TIMESTAMP_FORMAT).to_string(),
            containers: snapshot.container_list(),
            containers_error: error_text(&snapshot.containers),
            stats,
            stats_error: error_text(&snapshot.stats),
            logs: LogsExport {
                container: logs.container.clone(),
                available: logs.lines.is_ok(),
                line_count: logs.lines.as_ref().map_or(0, |l| l.lines().count()),
                error: error_text(&logs.lines),
            },
        }
    }
}

pub fn to_json(snapshot: &DashboardSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SnapshotExport::from_snapshot(snapshot))
}
