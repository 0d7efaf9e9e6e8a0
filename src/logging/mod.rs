//! Structured logging via `tracing`.
//!
//! - Level filtering per `shadow_core` module
//! - `RUST_LOG` overrides the configured filter
//! - Idempotent initialization, first call wins

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber when added to an app
#[derive(Default)]
pub struct LoggingPlugin {
    pub config: TracingConfig,
}

impl Plugin for LoggingPlugin {
    fn build(&self, _app: &mut App) {
        init_tracing(&self.config);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Case-insensitive parse; unknown names give `Info`
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    pub default_level: LogLevel,
    pub module_filters: Vec<(String, LogLevel)>,
    pub show_thread_ids: bool,
    pub show_targets: bool,
    pub show_file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            module_filters: vec![
                ("shadow_core::engine".to_string(), LogLevel::Info),
                ("shadow_core::gameflow".to_string(), LogLevel::Info),
                ("shadow_core::monster".to_string(), LogLevel::Warn),
                ("shadow_core::loot".to_string(), LogLevel::Warn),
            ],
            show_thread_ids: false,
            show_targets: true,
            show_file_line: false,
        }
    }
}

impl TracingConfig {
    /// Everything at `level`, no per-module overrides
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            default_level: level,
            module_filters: Vec::new(),
            ..Self::default()
        }
    }

    pub fn to_env_filter_string(&self) -> String {
        let mut parts = vec![self.default_level.as_str().to_string()];
        for (module, level) in &self.module_filters {
            parts.push(format!("{}={}", module, level.as_str()));
        }
        parts.join(",")
    }
}

static TRACING_INIT: Once = Once::new();

pub fn init_tracing_default() {
    init_tracing(&TracingConfig::default());
}

pub fn init_tracing(config: &TracingConfig) {
    let filter_str = config.to_env_filter_string();
    let config = config.clone();
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.show_targets)
            .with_thread_ids(config.show_thread_ids)
            .with_file(config.show_file_line)
            .with_line_number(config.show_file_line)
            .compact();

        // a global subscriber may already be installed by the host
        let _ = subscriber.try_init();
    });
}

/// Span guard for timing one named operation
pub struct TimingSpan {
    _span: tracing::span::EnteredSpan,
}

impl TimingSpan {
    pub fn new(name: &str) -> Self {
        let span = tracing::debug_span!("operation", op = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::from_name("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_name("warning"), LogLevel::Warn);
        assert_eq!(LogLevel::from_name("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_name("loud"), LogLevel::Info); // fallback
    }

    #[test]
    fn test_env_filter_string() {
        let filter = TracingConfig::default().to_env_filter_string();
        assert!(filter.starts_with("info"));
        assert!(filter.contains("shadow_core::monster=warn"));
        assert!(filter.contains("shadow_core::engine=info"));
    }

    #[test]
    fn test_with_level_has_no_overrides() {
        let config = TracingConfig::with_level(LogLevel::Debug);
        assert_eq!(config.to_env_filter_string(), "debug");
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = TracingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: TracingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.default_level, config.default_level);
        assert_eq!(restored.module_filters, config.module_filters);
    }

    #[test]
    fn test_init_tracing_idempotent() {
        init_tracing_default();
        init_tracing_default();
        init_tracing(&TracingConfig::with_level(LogLevel::Trace));
    }

    #[test]
    fn test_timing_span() {
        init_tracing_default();
        let _span = TimingSpan::new("test_operation");
        tracing::debug!("inside span");
    }
}
