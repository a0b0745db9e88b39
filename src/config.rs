//! Configuration management for Prospekt Guard.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{GuardError, Result};

/// Main configuration for the guard layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Request throttling configuration
    #[serde(default)]
    pub throttle: ThrottleConfig,
}

/// Request throttling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Maximum accepted requests inside the sliding window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
        }
    }
}

fn default_max_requests() -> u32 {
    10
}

fn default_window_ms() -> u64 {
    60_000
}

impl ThrottleConfig {
    /// The sliding window as a duration.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Reject parameters the limiter cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.max_requests == 0 {
            return Err(GuardError::Config(
                "max_requests must be greater than zero".to_string(),
            ));
        }
        if self.window_ms == 0 {
            return Err(GuardError::Config(
                "window_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl GuardConfig {
    /// Load configuration from a YAML file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GuardConfig =
            serde_yaml::from_str(&contents).map_err(|e| GuardError::Config(e.to_string()))?;
        config.throttle.validate()?;
        Ok(config)
    }
}
