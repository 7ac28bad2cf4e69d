//! Shell configuration, read from the environment at startup.
//!
//! | variable               | values          | default |
//! |------------------------|-----------------|---------|
//! | `STOCKLINE_LOG_LEVEL`  | filter directive| `warn`  |
//! | `STOCKLINE_LOG_FORMAT` | `json`, `text`  | `json`  |
//! | `STOCKLINE_OUTPUT`     | `human`, `json` | `human` |
//!
//! `RUST_LOG`, when set, takes precedence over `STOCKLINE_LOG_LEVEL`.

use core::str::FromStr;

use thiserror::Error;

use stockline_observability::{LogFormat, ObservabilityConfig};

pub const ENV_LOG_LEVEL: &str = "STOCKLINE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "STOCKLINE_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "STOCKLINE_OUTPUT";

/// How operation results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown output mode `{0}` (expected `human` or `json`)")]
pub struct ParseOutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(ParseOutputModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub output: OutputMode,
    pub observability: ObservabilityConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Human,
            observability: ObservabilityConfig {
                format: LogFormat::Json,
                default_directive: "warn".to_string(),
            },
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unparsable values fall back to the default. The returned warnings are
    /// meant to be logged once tracing is up, since the config decides how
    /// tracing is initialized.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            config.observability.default_directive = level.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.observability.format = format,
                Err(e) => warnings.push(format!("{ENV_LOG_FORMAT}: {e}; using default")),
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse::<OutputMode>() {
                Ok(mode) => config.output = mode,
                Err(e) => warnings.push(format!("{ENV_OUTPUT}: {e}; using default")),
            }
        }

        (config, warnings)
    }
}
