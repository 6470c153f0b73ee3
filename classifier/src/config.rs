//! Sweep configuration loading
//!
//! Loads defaults for range sweeps from `~/.config/fizzfib/config.toml`
//! (or `FIZZFIB_CONFIG` env). Every key is optional:
//!
//! ```toml
//! start = 0
//! end = 100
//! mode = "fizz_buzz_fibonacci"
//! print = true
//! ```

use crate::errors::{ClassifierError, Result};
use crate::rules::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for a range sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// First number to classify
    #[serde(default)]
    pub start: u64,

    /// Last number to classify (inclusive)
    #[serde(default = "default_end")]
    pub end: u64,

    /// Rule set to apply
    #[serde(default)]
    pub mode: Mode,

    /// Whether callers should print each label
    #[serde(default = "default_print")]
    pub print: bool,
}

fn default_end() -> u64 {
    100
}

fn default_print() -> bool {
    true
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: default_end(),
            mode: Mode::default(),
            print: default_print(),
        }
    }
}

impl SweepConfig {
    /// Environment variable for config path override
    pub const ENV_CONFIG_PATH: &'static str = "FIZZFIB_CONFIG";

    /// Default config filename
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "config.toml";

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::config_with_source(
                format!("failed to read config at {}", path.display()),
                e,
            )
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: SweepConfig = toml::from_str(contents)
            .map_err(|e| ClassifierError::config_with_source("failed to parse config", e))?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(ClassifierError::config(format!(
                "start ({}) must not be greater than end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// Default config location, `~/.config/fizzfib/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| {
            h.join(".config")
                .join("fizzfib")
                .join(SweepConfig::DEFAULT_CONFIG_FILENAME)
        })
        .unwrap_or_else(|| PathBuf::from(SweepConfig::DEFAULT_CONFIG_FILENAME))
}

/// Load sweep configuration.
///
/// Resolution order:
/// 1. `path`, when given; it must exist
/// 2. `FIZZFIB_CONFIG` environment variable; it must exist
/// 3. `~/.config/fizzfib/config.toml`; defaults are used when it is absent
pub fn load_config(path: Option<&Path>) -> Result<SweepConfig> {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "loading config from explicit path");
        return SweepConfig::load_from_path(path);
    }

    if let Ok(path) = std::env::var(SweepConfig::ENV_CONFIG_PATH) {
        let path = PathBuf::from(path);
        tracing::debug!(
            path = %path.display(),
            "loading config from {}",
            SweepConfig::ENV_CONFIG_PATH
        );
        return SweepConfig::load_from_path(&path);
    }

    let path = default_config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config not found, using defaults");
        return Ok(SweepConfig::default());
    }

    tracing::debug!(path = %path.display(), "loading config");
    SweepConfig::load_from_path(&path)
}
