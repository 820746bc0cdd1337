// Docker CLI access: container listing, one-shot stats and log tail

mod parse;

pub use parse::{ContainerLines, STATS_HEADER_MARKER, parse_container_lines, parse_stats_table};

use crate::config::RuntimeConfig;
use crate::error::CollectError;
use crate::models::Container;
use crate::runtime::{CommandOutput, CommandRunner};
use tracing::{debug, warn};

const PS_FORMAT: &str = "{{.Names}}|{{.Status}}|{{.Image}}";
const STATS_FORMAT: &str = "table {{.Name}}\t{{.CPUPerc}}\t{{.MemUsage}}\t{{.MemPerc}}";
/// Substring the runtime prints when the log target does not exist.
pub const NO_SUCH_CONTAINER_MARKER: &str = "No such container";

pub struct DockerRepo<R> {
    runner: R,
    binary: String,
    tail_lines: u32,
}

impl<R: CommandRunner> DockerRepo<R> {
    pub fn new(runner: R, runtime: &RuntimeConfig, tail_lines: u32) -> Self {
        Self {
            runner,
            binary: runtime.binary.clone(),
            tail_lines,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput, CollectError> {
        let out = self.runner.run(&self.binary, args).await?;
        debug!(
            binary = %self.binary,
            subcommand = args.first().copied().unwrap_or_default(),
            code = ?out.code,
            stdout_bytes = out.stdout.len(),
            "runtime command finished"
        );
        Ok(out)
    }

    /// Running containers. `Ok(vec![])` means the runtime answered and nothing is running.
    pub async fn list_containers(&self) -> Result<Vec<Container>, CollectError> {
        let out = self.run(&["ps", "--format", PS_FORMAT]).await?;
        if !out.success() && out.stdout.trim().is_empty() {
            return Err(command_failed(&out));
        }
        let parsed = parse_container_lines(&out.stdout);
        if parsed.containers.is_empty() && parsed.rejected > 0 {
            return Err(CollectError::Malformed {
                lines: parsed.rejected,
            });
        }
        if parsed.rejected > 0 {
            warn!(
                rejected = parsed.rejected,
                "docker ps: dropped lines with fewer than 3 fields"
            );
        }
        Ok(parsed.containers)
    }

    /// Single point-in-time stats table, unparsed.
    pub async fn fetch_stats(&self) -> Result<String, CollectError> {
        let out = self
            .run(&["stats", "--no-stream", "--format", STATS_FORMAT])
            .await?;
        if !out.success() && out.stdout.trim().is_empty() {
            return Err(command_failed(&out));
        }
        Ok(out.stdout.trim().to_string())
    }

    /// Last `tail_lines` lines of output (stdout then stderr) of `container`.
    pub async fn fetch_logs(&self, container: &str) -> Result<String, CollectError> {
        let tail = self.tail_lines.to_string();
        let out = self.run(&["logs", "--tail", &tail, container]).await?;
        let combined = out.combined();
        let text = combined.trim();
        if text.contains(NO_SUCH_CONTAINER_MARKER) {
            return Err(CollectError::NoSuchContainer {
                name: container.to_string(),
            });
        }
        if !out.success() {
            return Err(command_failed(&out));
        }
        if text.is_empty() {
            return Err(CollectError::NoLogs {
                name: container.to_string(),
            });
        }
        Ok(text.to_string())
    }
}

fn command_failed(out: &CommandOutput) -> CollectError {
    CollectError::CommandFailed {
        code: out.code,
        stderr: out.stderr.trim().lines().next().unwrap_or_default().to_string(),
    }
}
