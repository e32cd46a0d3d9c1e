use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't open config file {path}: {source}")]
    CantOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can't read config file {path}: {source}")]
    CantRead {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("can't write config file {path}: {source}")]
    CantWrite {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parameters of the TOV recurrence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TovSettings {
    /// `k` in `pressure = k * density^2`
    pub eos_constant: f64,
    pub step: f64,
    pub start_radius: f64,
    pub radius_unit: f64,
    pub max_steps: usize,
}

impl Default for TovSettings {
    fn default() -> Self {
        Self {
            eos_constant: DEFAULT_EOS_CONSTANT,
            step: DEFAULT_TOV_STEP,
            start_radius: DEFAULT_START_RADIUS,
            radius_unit: DEFAULT_RADIUS_UNIT,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Parameters of the Lane-Emden recurrence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneEmdenSettings {
    pub step: f64,
    pub polytropic_index: f64,
    pub max_steps: usize,
}

impl Default for LaneEmdenSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_LANE_EMDEN_STEP,
            polytropic_index: DEFAULT_POLYTROPIC_INDEX,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// What a sweep does when one of its integrations fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the sweep and return the failure
    #[default]
    Abort,
    /// Keep an empty slot for the failed parameter and go on
    Record,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub failure_policy: FailurePolicy,
    /// Spread sweep elements over the rayon thread pool
    pub parallel: bool,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            parallel: true,
        }
    }
}

/// Settings of every solver in the toolchain. Missing fields take defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub tov: TovSettings,
    pub lane_emden: LaneEmdenSettings,
    pub sweep: SweepSettings,
}

impl SolverConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::CantOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::de::from_reader(BufReader::new(file))
            .map_err(|source| ConfigError::CantRead {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Loaded solver config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)
            .map_err(|source| ConfigError::CantOpen {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::ser::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|source| ConfigError::CantWrite {
                path: path.to_path_buf(),
                source,
            })
    }
}
