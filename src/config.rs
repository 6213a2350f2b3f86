//! Runtime configuration.
//!
//! Selects the I/O backend and the poll timing of the diagnostic loop.
//! The wiring contract (floor count, motor speed, channel tables) is
//! hardware-fixed and deliberately absent here.

use std::path::Path;

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-memory simulated card.
    #[default]
    Sim,
    /// Lab I/O card via libcomedi.
    Comedi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalConfig {
    pub backend: Backend,
    /// Device node opened by the comedi backend
    pub comedi_device: String,
    /// Input poll interval (milliseconds)
    pub poll_interval_ms: u32,
    /// Default log level; `RUST_LOG` overrides it
    pub log_level: String,
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sim,
            comedi_device: "/dev/comedi0".into(),
            poll_interval_ms: 25, // 40 Hz
            log_level: "info".into(),
        }
    }
}

impl HalConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            line: e.line(),
            column: e.column(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate `path`. `Ok(None)` if the file does not exist.
    pub fn read(path: impl AsRef<Path>) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Read(e.kind()).into()),
        }
    }

    /// Load from `path`, or fall back to defaults if the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self::read(path)?.unwrap_or_else(|| {
            warn!("config: {} not found, using defaults", path.display());
            Self::default()
        }))
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<()> {
        if !(1..=1000).contains(&self.poll_interval_ms) {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be 1..=1000").into());
        }
        if self.comedi_device.is_empty() {
            return Err(ConfigError::ValidationFailed("comedi_device must not be empty").into());
        }
        if self.comedi_device.contains('\0') {
            return Err(ConfigError::ValidationFailed("comedi_device must not contain NUL").into());
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::ValidationFailed("log_level is not a log level").into())
    }
}
