// Error kinds for runtime invocation and dashboard data collection.

use std::time::Duration;

/// Failure to run an external command at all. A non-zero exit is not an error at this level.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("{program} did not finish within {after:?}")]
    Timeout { program: String, after: Duration },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error while waiting for {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a dashboard section could not be filled with real data.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("command exited with {}: {stderr}", exit_label(.code))]
    CommandFailed { code: Option<i32>, stderr: String },

    /// Output was present but not a single line could be parsed.
    #[error("unparsable runtime output ({lines} line(s) rejected)")]
    Malformed { lines: usize },

    #[error("no such container: {name}")]
    NoSuchContainer { name: String },

    #[error("no log output for {name}")]
    NoLogs { name: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "signal".to_string(),
    }
}

impl CollectError {
    /// True when the runtime CLI itself is missing.
    pub fn is_tool_missing(&self) -> bool {
        matches!(self, CollectError::Runtime(RuntimeError::NotFound { .. }))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CollectError::Runtime(RuntimeError::Timeout { .. }))
    }
}
