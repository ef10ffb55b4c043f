//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `AIRCALC_` prefix, `__` between sections
//!    (`AIRCALC_DISPLAY__PULSE_MS=500`)
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "AIRCALC";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How totals are shown.
    pub display: DisplayConfig,
    /// Where services come from.
    pub catalog: CatalogConfig,
    /// Which host receives updates.
    pub host: HostConfig,
    /// Log file settings.
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label printed after amounts.
    pub currency: String,
    pub no_color: bool,
    /// How long a changed total stays highlighted, in milliseconds.
    pub pulse_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "BYN".into(),
            no_color: false,
            pulse_ms: 300,
        }
    }
}

impl DisplayConfig {
    pub fn pulse_window(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file. The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub notify: NotifyMode,
    /// Directory receiving the `TOTAL_AMOUNT` / `SELECTED_SERVICES` files.
    pub export_dir: Option<PathBuf>,
}

/// Host notification channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    /// No host attached.
    #[default]
    None,
    /// Summaries become `info` events.
    Log,
    /// Summaries are written to stderr as JSON lines. Log output shares the
    /// stream when verbosity is raised.
    Stderr,
}

impl std::fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Log => write!(f, "log"),
            Self::Stderr => write!(f, "stderr"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Append log events to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location may not.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to read configuration from {}", path.display()),
                source: Some(Box::new(e)),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.aircalc.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "aircalc", "aircalc")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".aircalc.toml"))
    }

    /// Look up one value by dotted key, rendered as text.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let path_or_empty = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        match key {
            "display.currency" => Ok(self.display.currency.clone()),
            "display.no_color" => Ok(self.display.no_color.to_string()),
            "display.pulse_ms" => Ok(self.display.pulse_ms.to_string()),
            "catalog.path" => Ok(path_or_empty(&self.catalog.path)),
            "host.notify" => Ok(self.host.notify.to_string()),
            "host.export_dir" => Ok(path_or_empty(&self.host.export_dir)),
            "log.file" => Ok(path_or_empty(&self.log.file)),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}
