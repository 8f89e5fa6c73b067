use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Delays longer than this make the game feel stuck.
const MAX_REASONABLE_AI_DELAY_MS: u64 = 10_000;

fn default_ai_delay_ms() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_ai_delay_ms")]
    pub ai_delay_ms: u64,

    #[serde(default)]
    pub log_dir: Option<Utf8PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_show_hints")]
    pub show_hints: bool,

    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl Config {
    /// How long the computer waits before playing its move.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// The directory log files go to, if file logging is on.
    pub fn log_dir(&self) -> Option<&Utf8Path> {
        self.log_dir.as_deref()
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel(e.to_string()),
            });
        }

        if self.ai_delay_ms > MAX_REASONABLE_AI_DELAY_MS {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::LongAiDelay(self.ai_delay_ms),
            });
        }

        let mut extra_keys: Vec<&String> = self.extra.keys().collect();
        extra_keys.sort();
        for key in extra_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::Generic(format!("Unknown key '{key}'").into()),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            log_dir: None,
            log_level: default_log_level(),
            show_hints: default_show_hints(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Log Level: {0}")]
    InvalidLogLevel(String),

    #[error("AI delay of {0}ms is very long")]
    LongAiDelay(u64),

    #[error("{0}")]
    Generic(Cow<'static, str>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
