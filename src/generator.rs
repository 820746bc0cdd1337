// One run: query the runtime (containers, stats, logs, in that order), render, write.
// Collection never fails as a whole; each section degrades to its placeholder on its own.

use crate::config::OutputConfig;
use crate::dashboard;
use crate::docker_repo::DockerRepo;
use crate::error::CollectError;
use crate::export;
use crate::models::{DashboardSnapshot, LogSection};
use crate::runtime::CommandRunner;
use chrono::NaiveDateTime;
use tracing::{info, warn};

pub struct Generator<R> {
    repo: DockerRepo<R>,
    log_container: String,
    output: OutputConfig,
}

fn log_outcome<T>(section: &str, result: &Result<T, CollectError>) {
    match result {
        Ok(_) => {}
        Err(e @ (CollectError::NoSuchContainer { .. } | CollectError::NoLogs { .. })) => {
            info!(section, reason = %e, "section shows placeholder");
        }
        Err(e) => {
            warn!(
                section,
                error = %e,
                tool_missing = e.is_tool_missing(),
                timeout = e.is_timeout(),
                "section unavailable"
            );
        }
    }
}

impl<R: CommandRunner> Generator<R> {
    pub fn new(repo: DockerRepo<R>, log_container: impl Into<String>, output: OutputConfig) -> Self {
        Self {
            repo,
            log_container: log_container.into(),
            output,
        }
    }

    /// Runs the three runtime calls sequentially and stamps the result with `generated_at`.
    pub async fn collect_at(&self, generated_at: NaiveDateTime) -> DashboardSnapshot {
        let containers = self.repo.list_containers().await;
        log_outcome("containers", &containers);

        let stats = self.repo.fetch_stats().await;
        log_outcome("stats", &stats);

        let lines = self.repo.fetch_logs(&self.log_container).await;
        log_outcome("logs", &lines);

        DashboardSnapshot {
            generated_at,
            containers,
            stats,
            logs: LogSection {
                container: self.log_container.clone(),
                lines,
            },
        }
    }

    pub async fn collect(&self) -> DashboardSnapshot {
        self.collect_at(chrono::Local::now().naive_local()).await
    }

    /// Render and write the page (and the JSON export when configured). Overwrites existing files.
    pub async fn write(&self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        let html = dashboard::render(snapshot);
        tokio::fs::write(&self.output.path, html.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("writing {}: {}", self.output.path, e))?;
        info!(path = %self.output.path, bytes = html.len(), "dashboard written");

        if let Some(json_path) = &self.output.json_path {
            let json = export::to_json(snapshot)?;
            tokio::fs::write(json_path, json.as_bytes())
                .await
                .map_err(|e| anyhow::anyhow!("writing {}: {}", json_path, e))?;
            info!(path = %json_path, "json export written");
        }
        Ok(())
    }

    /// Collect now, write, and hand back the snapshot for the console summary.
    pub async fn run(&self) -> anyhow::Result<DashboardSnapshot> {
        let snapshot = self.collect().await;
        self.write(&snapshot).await?;
        Ok(snapshot)
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }
}

/// Human-readable lines printed on stdout once the page is written.
pub fn summary_lines(snapshot: &DashboardSnapshot, output_path: &str) -> Vec<String> {
    let mut lines = vec![
        format!("✅ Dashboard généré: {output_path}"),
        format!("📂 Ouvrez {output_path} dans votre navigateur"),
    ];
    let containers = snapshot.container_list();
    if containers.is_empty() {
        lines.push(String::new());
        lines.push("⚠️  Aucun conteneur actif".to_string());
        lines.push("💡 Démarrez avec: docker-compose up -d".to_string());
    } else {
        lines.push(String::new());
        lines.push("📦 Conteneurs actifs:".to_string());
        lines.extend(
            containers
                .iter()
                .map(|c| format!("  - {} ({})", c.name, c.status)),
        );
    }
    lines
}
