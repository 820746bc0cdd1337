// Shared test helpers: a fake runtime that answers each docker subcommand with fixed text.
#![allow(dead_code)]

use jrnl_monitor::config::{LogsConfig, OutputConfig, RuntimeConfig};
use jrnl_monitor::docker_repo::DockerRepo;
use jrnl_monitor::error::RuntimeError;
use jrnl_monitor::generator::Generator;
use jrnl_monitor::runtime::{CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

pub const PS_OUTPUT: &str = "jrnl-container|Up 3 minutes|jrnl:latest\npostgres|Up 2 hours (healthy)|postgres:16\n";

pub const STATS_OUTPUT: &str = "\
NAME             CPU %     MEM USAGE / LIMIT     MEM %
jrnl-container   0.25%     12.5MiB / 1.944GiB    0.63%
postgres         1.10%     48MiB / 1.944GiB      2.41%
";

#[derive(Clone)]
pub enum Reply {
    Output(CommandOutput),
    Missing,
    Timeout,
}

impl Reply {
    pub fn stdout(s: &str) -> Self {
        Reply::Output(CommandOutput::ok(s))
    }

    pub fn failed(code: i32, stderr: &str) -> Self {
        Reply::Output(CommandOutput {
            stdout: String::new(),
            stderr: stderr.to_string(),
            code: Some(code),
        })
    }
}

/// Keyed by the first argument (`ps`, `stats`, `logs`). Unknown subcommands succeed with no output.
#[derive(Default)]
pub struct FakeRuntime {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, subcommand: &str, reply: Reply) -> Self {
        self.replies.insert(subcommand.to_string(), reply);
        self
    }

    /// No runtime installed at all.
    pub fn missing() -> Self {
        Self::new()
            .with("ps", Reply::Missing)
            .with("stats", Reply::Missing)
            .with("logs", Reply::Missing)
    }

    /// Every call recorded as program followed by its arguments.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRuntime {
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<CommandOutput, RuntimeError>> + Send {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.lock().unwrap().push(call);

        let reply = args
            .first()
            .and_then(|sub| self.replies.get(*sub))
            .cloned()
            .unwrap_or_else(|| Reply::stdout(""));
        let program = program.to_string();
        async move {
            match reply {
                Reply::Output(out) => Ok(out),
                Reply::Missing => Err(RuntimeError::NotFound { program }),
                Reply::Timeout => Err(RuntimeError::Timeout {
                    program,
                    after: Duration::from_secs(10),
                }),
            }
        }
    }
}

pub fn repo(fake: FakeRuntime) -> DockerRepo<FakeRuntime> {
    DockerRepo::new(fake, &RuntimeConfig::default(), LogsConfig::default().tail_lines)
}

pub fn generator(fake: FakeRuntime, output: OutputConfig) -> Generator<FakeRuntime> {
    Generator::new(repo(fake), LogsConfig::default().container, output)
}

/// Runtime with two containers, their stats, and a few log lines.
pub fn busy_runtime() -> FakeRuntime {
    FakeRuntime::new()
        .with("ps", Reply::stdout(PS_OUTPUT))
        .with("stats", Reply::stdout(STATS_OUTPUT))
        .with(
            "logs",
            Reply::stdout("2026-10-19 started\n2026-10-19 GET / 200\n"),
        )
}

/// Daemon up, nothing running, log target absent.
pub fn idle_runtime() -> FakeRuntime {
    FakeRuntime::new()
        .with("ps", Reply::stdout(""))
        .with(
            "stats",
            Reply::stdout("NAME      CPU %     MEM USAGE / LIMIT   MEM %\n"),
        )
        .with(
            "logs",
            Reply::failed(1, "Error response from daemon: No such container: jrnl-container\n"),
        )
}
