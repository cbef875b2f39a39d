use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub demo: DemoConfig,
    pub logging: LoggingConfig,
}

/// Terminal runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval when no input arrives (default: 250).
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on buttons (default: true).
    pub mouse: bool,
}

/// Settings of the bundled two-screen demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Value the shared counter starts at (default: 0).
    pub initial_value: i64,
    /// Screen shown first (default: "black").
    pub first_screen: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` (default: "info").
    pub level: String,
    /// Log file. Nothing is logged without one since the terminal belongs
    /// to the UI.
    pub file: Option<PathBuf>,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            first_screen: "black".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
