//! Simulation Configuration
//!
//! Run parameters with validated construction. Parameters can also be
//! loaded from a TOML tuning file for adjustment without recompiling.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Parameters fixed for the lifetime of a run.
///
/// Defaults mirror the canonical run: 128 fish in a 400x400 space,
/// speed cap 100, neighbor radius 100, both rule gains 0.125, seed 42.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of fish in the flock, fixed for the run
    pub population: usize,
    /// Side length of the square spawn region (initialization only;
    /// fish are free to leave it)
    pub extent: f64,
    /// Speed cap enforced after every step
    pub max_speed: f64,
    /// Maximum distance at which another fish contributes to separation
    pub neighbor_radius: f64,
    /// Strength of the pull toward the flock center
    pub cohesion_gain: f64,
    /// Strength of the pull toward the flock's average velocity
    pub alignment_gain: f64,
    /// RNG seed for reproducible spawning
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population: 128,
            extent: 400.0,
            max_speed: 100.0,
            neighbor_radius: 100.0,
            cohesion_gain: 0.125,
            alignment_gain: 0.125,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Check the configuration, failing before any simulation state exists.
    ///
    /// A zero `neighbor_radius` is valid: no pair of fish can satisfy
    /// `0 < dist < 0`, so separation simply never contributes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.extent > 0.0) || !self.extent.is_finite() {
            return Err(ConfigError::InvalidExtent(self.extent));
        }
        if !(self.max_speed >= 0.0) || !self.max_speed.is_finite() {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !(self.neighbor_radius >= 0.0) || !self.neighbor_radius.is_finite() {
            return Err(ConfigError::InvalidNeighborRadius(self.neighbor_radius));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: SimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if not found.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    /// Population must be at least one fish
    EmptyPopulation,
    /// Spawn extent must be positive and finite
    InvalidExtent(f64),
    /// Speed cap must be non-negative and finite
    InvalidMaxSpeed(f64),
    /// Neighbor radius must be non-negative and finite
    InvalidNeighborRadius(f64),
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyPopulation => write!(f, "population must be at least 1"),
            ConfigError::InvalidExtent(v) => {
                write!(f, "extent must be positive and finite, got {}", v)
            }
            ConfigError::InvalidMaxSpeed(v) => {
                write!(f, "max_speed must be non-negative and finite, got {}", v)
            }
            ConfigError::InvalidNeighborRadius(v) => {
                write!(f, "neighbor_radius must be non-negative and finite, got {}", v)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
