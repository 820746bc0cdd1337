use anyhow::Result;
use jrnl_monitor::config::AppConfig;
use jrnl_monitor::docker_repo::DockerRepo;
use jrnl_monitor::generator::{Generator, summary_lines};
use jrnl_monitor::runtime::ProcessRunner;
use jrnl_monitor::version;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the progress lines; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = AppConfig::load()?;
    tracing::debug!("{} {} starting", version::NAME, version::VERSION);

    println!("🔍 Collecte des métriques Docker...");

    let runner = ProcessRunner::new(Duration::from_secs(
        app_config.runtime.command_timeout_secs,
    ));
    let repo = DockerRepo::new(runner, &app_config.runtime, app_config.logs.tail_lines);
    let generator = Generator::new(
        repo,
        app_config.logs.container.clone(),
        app_config.output.clone(),
    );

    let snapshot = generator.run().await?;
    for line in summary_lines(&snapshot, generator.output_path()) {
        println!("{line}");
    }

    Ok(())
}
