//! Configuration loading for Vigil.
//!
//! Settings come from `~/.config/vigil/config.toml` layered under `VIGIL_*`
//! environment overrides. A missing file yields defaults; a malformed one
//! is a real error.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::VigilResult;

const MIN_POLL_SECS: u64 = 1;
const MAX_POLL_SECS: u64 = 10;
const DEFAULT_POLL_SECS: u64 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub poll_interval_secs: u64,
    pub theme: String,
    pub monitors: MonitorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorsConfig {
    pub claude_code: bool,
    pub gemini: bool,
}

impl Default for MonitorsConfig {
    fn default() -> Self {
        Self {
            claude_code: true,
            gemini: true,
        }
    }
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_SECS,
            theme: "Tokyo Night".to_string(),
            monitors: MonitorsConfig::default(),
        }
    }
}

impl VigilConfig {
    pub fn load() -> VigilResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = Self::config_path() {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("VIGIL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vigil").join("config.toml"))
    }

    /// Poll cadence clamped to the supported range.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.clamp(MIN_POLL_SECS, MAX_POLL_SECS))
    }
}
