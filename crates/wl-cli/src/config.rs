//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wl_core::duration::DEFAULT_TARGET_MINUTES;
use wl_core::{DEFAULT_UNDER_TARGET_MARKER, ReportOptions, Rounding};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How leftover seconds of a task are treated.
    pub rounding: Rounding,
    /// Days below this many minutes are flagged.
    pub target_minutes: u32,
    /// Appended to flagged days in the text report.
    pub under_target_marker: String,
    /// Reject impossible dates and times.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            target_minutes: DEFAULT_TARGET_MINUTES,
            under_target_marker: DEFAULT_UNDER_TARGET_MARKER.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WL_*)
        figment = figment.merge(Env::prefixed("WL_"));

        figment.extract()
    }

    /// Report options, with `exact` overriding the configured rounding.
    pub const fn report_options(&self, exact: bool) -> ReportOptions {
        ReportOptions {
            rounding: if exact {
                Rounding::Exact
            } else {
                self.rounding
            },
            target_minutes: self.target_minutes,
        }
    }
}

/// Returns the platform-specific config directory for wl.
///
/// On Linux: `~/.config/wl`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wl"))
}
