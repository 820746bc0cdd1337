// Real subprocess runner with a per-call timeout.

use super::{CommandOutput, CommandRunner};
use crate::error::RuntimeError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, RuntimeError> {
        debug!(program, ?args, "running command");
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout must take the child down with it.
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    RuntimeError::NotFound {
                        program: program.to_string(),
                    }
                } else {
                    RuntimeError::Spawn {
                        program: program.to_string(),
                        source,
                    }
                }
            })?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| RuntimeError::Io {
                program: program.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(RuntimeError::Timeout {
                    program: program.to_string(),
                    after: self.timeout,
                });
            }
        };

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
