// Configuration - announcer timing and practice defaults, loaded from RON

use crate::theory::notes::Instrument;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default time a stage stays on screen
pub const DEFAULT_DWELL_MS: u64 = 1000;
/// Default settle pause between the last stage and completion
pub const DEFAULT_DRAIN_MS: u64 = 500;
/// Upper bound accepted for either duration
pub const MAX_TIMING_MS: u64 = 60_000;

const CONFIG_DIR_NAME: &str = "mymusic_practice";
const CONFIG_FILE_NAME: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid announcer timing: {field} = {value} ms (max {max} ms)", max = MAX_TIMING_MS)]
    InvalidTiming { field: &'static str, value: u64 },
}

/// Durations driving the staged announcer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnnouncerTiming {
    pub dwell_ms: u64,
    pub drain_ms: u64,
}

impl AnnouncerTiming {
    pub fn new(dwell: Duration, drain: Duration) -> Self {
        Self {
            dwell_ms: dwell.as_millis() as u64,
            drain_ms: drain.as_millis() as u64,
        }
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn drain(&self) -> Duration {
        Duration::from_millis(self.drain_ms)
    }

    /// Total time from mount to completion for a sequence of `stages` messages
    pub fn total_for(&self, stages: usize) -> Duration {
        if stages == 0 {
            return Duration::ZERO;
        }
        self.dwell() * stages as u32 + self.drain()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("dwell_ms", self.dwell_ms), ("drain_ms", self.drain_ms)] {
            if value > MAX_TIMING_MS {
                return Err(ConfigError::InvalidTiming { field, value });
            }
        }
        Ok(())
    }
}

impl Default for AnnouncerTiming {
    fn default() -> Self {
        Self {
            dwell_ms: DEFAULT_DWELL_MS,
            drain_ms: DEFAULT_DRAIN_MS,
        }
    }
}

/// Settings read by the practice host at startup
///
/// Example file:
/// ```text
/// (
///     timing: (dwell_ms: 1000, drain_ms: 500),
///     greeting: Some("READY"),
///     instrument: Guitar,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    pub timing: AnnouncerTiming,
    /// Message announced when the host starts (None = no announcement)
    pub greeting: Option<String>,
    pub instrument: Instrument,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            timing: AnnouncerTiming::default(),
            greeting: Some("READY".to_string()),
            instrument: Instrument::default(),
        }
    }
}

impl PracticeConfig {
    /// Parse a config from RON text
    pub fn from_ron(ron_data: &str) -> Result<Self, ConfigError> {
        let config: PracticeConfig = ron::from_str(ron_data)?;
        config.timing.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    /// `<config dir>/mymusic_practice/config.ron`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load `path` if it exists, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config path available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}
