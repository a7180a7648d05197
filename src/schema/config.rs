//! Configuration types for SEMO experiments.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Highest rounding precision accepted for generated objective values.
pub const MAX_DECIMALS: u32 = 15;

/// Top-level experiment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Objective field generation settings.
    #[serde(default)]
    pub field: FieldConfig,
    /// Settings shared by every search run.
    #[serde(default)]
    pub search: SearchConfig,
    /// Repeated-run statistics.
    #[serde(default)]
    pub trials: TrialConfig,
    /// Run both topologies from one shared start cell for the single-run report.
    #[serde(default = "default_true")]
    pub compare_topologies: bool,
    /// Print the generated field before the fronts.
    #[serde(default = "default_true")]
    pub print_field: bool,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            search: SearchConfig::default(),
            trials: TrialConfig::default(),
            compare_topologies: true,
            print_field: true,
            random_seed: None,
        }
    }
}

/// Objective field dimensions and value distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of rows.
    #[serde(default = "default_extent")]
    pub rows: usize,
    /// Number of columns.
    #[serde(default = "default_extent")]
    pub cols: usize,
    /// Range objective values are drawn from, `(min, max)`.
    #[serde(default = "default_value_range")]
    pub value_range: (f64, f64),
    /// Decimal places each value is rounded to.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rows: default_extent(),
            cols: default_extent(),
            value_range: default_value_range(),
            decimals: default_decimals(),
        }
    }
}

impl FieldConfig {
    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Neighborhood used to mutate a cell into one of its neighbors.
///
/// Both variants wrap around the grid edges (toroidal boundary).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum NeighborTopology {
    /// 4-directional: up, down, left, right.
    #[default]
    VonNeumann,
    /// 8-directional: the von Neumann moves plus the four diagonals.
    Moore,
}

/// Settings for a single SEMO run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Iteration budget per run.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Neighborhood used for mutation and stagnation checks.
    #[serde(default)]
    pub topology: NeighborTopology,
    /// Stop as soon as the archive is a local fixed point of the topology.
    #[serde(default = "default_true")]
    pub track_stagnation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            topology: NeighborTopology::default(),
            track_stagnation: true,
        }
    }
}

/// Settings for repeated independent runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Number of independent runs per topology. Zero disables aggregation.
    #[serde(default = "default_runs")]
    pub runs: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_extent() -> usize {
    10
}
fn default_value_range() -> (f64, f64) {
    (0.0, 100.0)
}
fn default_decimals() -> u32 {
    2
}
fn default_iterations() -> usize {
    10_000
}
fn default_runs() -> usize {
    1000
}

impl ExperimentConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()
    }
}

impl FieldConfig {
    /// Validate field parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        let (min, max) = self.value_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidValueRange { min, max });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        // Uniform sampling divides the span by the largest unit draw, and
        // rounding scales every value by 10^decimals; both must stay finite.
        let span = (max - min) / (1.0 - f64::EPSILON);
        let scaled = min.abs().max(max.abs()) * 10f64.powi(self.decimals as i32);
        if !span.is_finite() || !scaled.is_finite() {
            return Err(ConfigError::RangeOverflow {
                min,
                max,
                decimals: self.decimals,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("Value range ({min}, {max}) must be finite with min <= max")]
    InvalidValueRange { min: f64, max: f64 },
    #[error("Rounding precision {0} exceeds the maximum of 15 decimals")]
    InvalidDecimals(u32),
    #[error("Value range ({min}, {max}) at {decimals} decimals overflows f64")]
    RangeOverflow { min: f64, max: f64, decimals: u32 },
    #[error("Error reading config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}
