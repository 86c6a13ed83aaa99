use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the storefront desktop app.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub motion: MotionConfig,
    pub log: LogConfig,
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Entrance and scroll animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub enabled: bool,
    pub duration_ms: u32,
    /// Extra delay added per item in a list.
    pub stagger_ms: u32,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`trace`..`error`).
    pub level: String,
    /// Optional env-filter directive, e.g. `atelier=debug,wry=warn`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Doll Atelier – Size Guide".to_owned(), width: 1200.0, height: 860.0 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { enabled: true, duration_ms: 600, stagger_ms: 100 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None, json: false }
    }
}
