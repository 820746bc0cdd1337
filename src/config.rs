use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub runtime: RuntimeConfig,
    pub logs: LogsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Container runtime CLI (`docker`, or a compatible one such as `podman`).
    pub binary: String,
    /// Upper bound for each runtime invocation; a hung CLI only blanks its own section.
    pub command_timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: "docker".into(),
            command_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub container: String,
    pub tail_lines: u32,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            container: "jrnl-container".into(),
            tail_lines: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    /// Optional machine-readable copy of the snapshot.
    pub json_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "dashboard.html".into(),
            json_path: None,
        }
    }
}

impl AppConfig {
    /// `CONFIG_FILE` if set (must exist), else `config.toml` if present, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        let config = Self::load_from_str(&s)?;
        tracing::debug!(path, "config loaded");
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.runtime.binary.trim().is_empty(),
            "runtime.binary must be non-empty"
        );
        anyhow::ensure!(
            self.runtime.command_timeout_secs > 0,
            "runtime.command_timeout_secs must be > 0, got {}",
            self.runtime.command_timeout_secs
        );
        anyhow::ensure!(
            !self.logs.container.trim().is_empty(),
            "logs.container must be non-empty"
        );
        anyhow::ensure!(
            self.logs.tail_lines > 0,
            "logs.tail_lines must be > 0, got {}",
            self.logs.tail_lines
        );
        anyhow::ensure!(
            !self.output.path.trim().is_empty(),
            "output.path must be non-empty"
        );
        if let Some(json_path) = &self.output.json_path {
            anyhow::ensure!(
                !json_path.trim().is_empty(),
                "output.json_path must be non-empty when set"
            );
        }
        Ok(())
    }
}
