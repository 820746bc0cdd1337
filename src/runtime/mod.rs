// Command execution seam: the dashboard only ever talks to the runtime CLI through `CommandRunner`.

mod process;

pub use process::ProcessRunner;

use crate::error::RuntimeError;
use std::future::Future;

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Successful output with the given stdout (handy for fakes).
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// stdout followed by stderr, like `2>&1` minus the interleaving.
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => {
                let mut s = self.stdout.clone();
                if !s.ends_with('\n') {
                    s.push('\n');
                }
                s.push_str(&self.stderr);
                s
            }
        }
    }
}

/// Runs a program with arguments (no shell) and captures its output.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<CommandOutput, RuntimeError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_joins_stdout_then_stderr() {
        let out = CommandOutput {
            stdout: "line 1".into(),
            stderr: "oops\n".into(),
            code: Some(0),
        };
        assert_eq!(out.combined(), "line 1\noops\n");
    }

    #[test]
    fn combined_with_only_stderr() {
        let out = CommandOutput {
            stdout: String::new(),
            stderr: "Error: No such container: x".into(),
            code: Some(1),
        };
        assert_eq!(out.combined(), "Error: No such container: x");
        assert!(!out.success());
    }
}
