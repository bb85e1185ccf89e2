//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::behaviors::ThemeContext;
use crate::ui::theme::parse_color;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Theme handed to the composition root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// When false the page is built with no theme at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_primary")]
    pub primary: String,
}

impl ThemeConfig {
    /// Theme for the composition root. A primary token that is not a color
    /// is reported here once and the page is built unthemed.
    pub fn context(&self) -> Option<ThemeContext> {
        if !self.enabled {
            return None;
        }
        if let Err(e) = parse_color(&self.primary) {
            tracing::warn!(error = %e, "ignoring theme");
            return None;
        }
        Some(ThemeContext {
            primary: self.primary.clone(),
        })
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary: default_primary(),
        }
    }
}

/// Initial values of the sandbox page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub loading: bool,
    #[serde(default = "default_select_all_value")]
    pub select_all_value: String,
    #[serde(default = "default_stutter_value")]
    pub stutter_value: String,
    /// Interval of the clock feeding the pristine field.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            loading: false,
            select_all_value: default_select_all_value(),
            stutter_value: default_stutter_value(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Diagnostic log settings. The terminal is taken by the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, e.g. `"debug"` or `"wrapsandbox=trace"`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_primary() -> String {
    "red".to_string()
}
fn default_title() -> String {
    "Select All Sandbox".to_string()
}
fn default_select_all_value() -> String {
    "select all on focus".to_string()
}
fn default_stutter_value() -> String {
    "stutter".to_string()
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/wrapsandbox/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
