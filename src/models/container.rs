// Container records as listed by `docker ps`

use serde::Serialize;

/// Container state derived from the free-text status column; serializes to lowercase JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Running,
    Paused,
    Restarting,
    Exited,
    Unknown,
}

impl ContainerState {
    /// Parse from a `docker ps` status string (e.g. "Up 3 minutes", "Up 2 hours (Paused)").
    pub fn from_status(status: &str) -> Self {
        let s = status.trim().to_lowercase();
        if s.starts_with("up") {
            if s.contains("(paused)") {
                ContainerState::Paused
            } else {
                ContainerState::Running
            }
        } else if s.starts_with("restarting") {
            ContainerState::Restarting
        } else if s.starts_with("exited") || s.starts_with("dead") {
            ContainerState::Exited
        } else {
            ContainerState::Unknown
        }
    }

    /// CSS class and glyph for the status badge.
    pub fn badge(self) -> (&'static str, &'static str) {
        match self {
            ContainerState::Running => ("running", "✓"),
            ContainerState::Paused => ("paused", "⏸"),
            ContainerState::Restarting => ("restarting", "↻"),
            ContainerState::Exited => ("exited", "✗"),
            ContainerState::Unknown => ("unknown", "?"),
        }
    }
}

/// One line of `docker ps`. Fields are whatever the runtime printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    pub status: String,
    pub image: String,
}

impl Container {
    pub fn state(&self) -> ContainerState {
        ContainerState::from_status(&self.status)
    }
}
