//! Configuration loading and typed config structures for the Neurosim simulation.
//!
//! The canonical configuration lives in `neurosim-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a default, so an empty file is a valid configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `neurosim-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, grid size, run length).
    #[serde(default)]
    pub world: WorldConfig,

    /// Terrain scatter used when building the grid.
    #[serde(default)]
    pub terrain: TerrainConfig,

    /// Initial population per species.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Flocking parameters.
    #[serde(default)]
    pub flocking: FlockingConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.width == 0 {
            return Err(invalid("world.width", "must be at least 1"));
        }
        if self.world.height == 0 {
            return Err(invalid("world.height", "must be at least 1"));
        }
        check_density("terrain.bush_density", self.terrain.bush_density)?;
        check_density("terrain.blocked_density", self.terrain.blocked_density)?;
        check_density("terrain.carrion_density", self.terrain.carrion_density)?;
        let total = self.terrain.bush_density
            + self.terrain.blocked_density
            + self.terrain.carrion_density;
        if total > 1.0 {
            return Err(invalid(
                "terrain",
                format!("densities sum to {total}, more than 1"),
            ));
        }
        let radius = self.flocking.detection_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid(
                "flocking.detection_radius",
                format!("must be positive and finite, got {radius}"),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_density(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be within [0, 1], got {value}")))
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Grid extent along x.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Grid extent along y.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Number of ticks the engine runs before exiting.
    #[serde(default = "default_ticks")]
    pub ticks: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            width: default_width(),
            height: default_height(),
            ticks: default_ticks(),
        }
    }
}

/// Fraction of grid cells given each terrain kind at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TerrainConfig {
    /// Fraction of cells that grow bushes.
    #[serde(default = "default_bush_density")]
    pub bush_density: f64,

    /// Fraction of impassable cells.
    #[serde(default = "default_blocked_density")]
    pub blocked_density: f64,

    /// Fraction of cells holding carrion.
    #[serde(default = "default_carrion_density")]
    pub carrion_density: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            bush_density: default_bush_density(),
            blocked_density: default_blocked_density(),
            carrion_density: default_carrion_density(),
        }
    }
}

/// Initial population configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationConfig {
    /// Herbivores spawned in the lower band.
    #[serde(default = "default_herbivores")]
    pub herbivores: u32,

    /// Carnivores spawned in the upper band.
    #[serde(default = "default_carnivores")]
    pub carnivores: u32,

    /// Scavengers spawned anywhere on the grid.
    #[serde(default = "default_scavengers")]
    pub scavengers: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            herbivores: default_herbivores(),
            carnivores: default_carnivores(),
            scavengers: default_scavengers(),
        }
    }
}

/// Flocking configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlockingConfig {
    /// Radius within which scavenger boids see each other.
    #[serde(default = "default_detection_radius")]
    pub detection_radius: f32,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            detection_radius: default_detection_radius(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Neurosim".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_width() -> u32 {
    100
}

const fn default_height() -> u32 {
    100
}

const fn default_ticks() -> u64 {
    100
}

const fn default_bush_density() -> f64 {
    0.08
}

const fn default_blocked_density() -> f64 {
    0.05
}

const fn default_carrion_density() -> f64 {
    0.01
}

const fn default_herbivores() -> u32 {
    40
}

const fn default_carnivores() -> u32 {
    10
}

const fn default_scavengers() -> u32 {
    25
}

const fn default_detection_radius() -> f32 {
    6.0
}

fn default_log_level() -> String {
    "info".to_owned()
}
