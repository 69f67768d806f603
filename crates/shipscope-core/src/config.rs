//! Layered analysis configuration.
//!
//! Precedence, lowest to highest: built-in defaults, TOML config file,
//! environment variables, CLI arguments. Each value remembers where it came
//! from so the CLI can explain the effective configuration.

use crate::error::{Result, ShipscopeError};
use crate::pairing::PairingThresholds;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const ENV_DISTANCE_THRESHOLD: &str = "SHIPSCOPE_DISTANCE_THRESHOLD_M";
pub const ENV_SPEED_THRESHOLD: &str = "SHIPSCOPE_SPEED_THRESHOLD_KN";

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl ConfigSource {
    /// Precedence level; higher wins.
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence.
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    distance_threshold_m: Option<f64>,
    speed_threshold_kn: Option<f64>,
}

/// Layered configuration for a proximity analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub distance_threshold_m: ConfigValue<f64>,
    /// 0 or unset means no speed gate; matches the upstream convention where
    /// an empty prompt answer is recorded as 0.
    pub speed_threshold_kn: ConfigValue<Option<f64>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AnalysisConfig {
    pub fn with_defaults() -> Self {
        Self {
            distance_threshold_m: ConfigValue::new(75.0, ConfigSource::Default),
            speed_threshold_kn: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load values from a TOML file, keeping defaults for absent keys.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| ShipscopeError::Serialization(format!("invalid config file: {e}")))?;

        if let Some(distance) = file.distance_threshold_m {
            self.distance_threshold_m.update(distance, ConfigSource::File);
        }
        if let Some(speed) = file.speed_threshold_kn {
            self.speed_threshold_kn.update(normalize_speed(speed), ConfigSource::File);
        }
        Ok(self)
    }

    /// Apply environment variable overrides.
    pub fn load_from_env(mut self) -> Self {
        if let Some(distance) = parse_env(ENV_DISTANCE_THRESHOLD) {
            self.distance_threshold_m.update(distance, ConfigSource::Environment);
        }
        if let Some(speed) = parse_env(ENV_SPEED_THRESHOLD) {
            self.speed_threshold_kn.update(normalize_speed(speed), ConfigSource::Environment);
        }
        self
    }

    /// Apply CLI argument overrides, the highest-precedence layer.
    pub fn apply_cli(mut self, distance_m: Option<f64>, speed_kn: Option<f64>) -> Self {
        if let Some(distance) = distance_m {
            self.distance_threshold_m.update(distance, ConfigSource::Cli);
        }
        if let Some(speed) = speed_kn {
            self.speed_threshold_kn.update(normalize_speed(speed), ConfigSource::Cli);
        }
        self
    }

    /// Collapse the layers into the thresholds the pairer consumes.
    pub fn thresholds(&self) -> PairingThresholds {
        PairingThresholds {
            max_distance_m: self.distance_threshold_m.value,
            max_speed_kn: self.speed_threshold_kn.value,
        }
    }
}

fn normalize_speed(speed_kn: f64) -> Option<f64> {
    if speed_kn > 0.0 {
        Some(speed_kn)
    } else {
        None
    }
}

fn parse_env(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|raw| raw.parse().ok())
}
