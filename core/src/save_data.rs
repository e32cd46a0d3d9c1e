use std::fs::File;
use std::io::Write;
use std::path::Path;
use serde::Serialize;
use thiserror::Error;
use crate::{LaneEmdenSolution, MaxMassPoint, StarProperties};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },
    #[error("row {row}, column {column}: {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("{parameters} parameters but {stars} stars")]
    LengthMismatch { parameters: usize, stars: usize },
}

#[derive(Serialize)]
struct StarRow {
    central_density: f64,
    mass: Option<f64>,
    radius: Option<f64>,
    proper_mass: Option<f64>,
    binding_energy: Option<f64>,
}

#[derive(Serialize)]
struct ProfileRow {
    xi: f64,
    theta: f64,
}

#[derive(Serialize)]
struct CentralDensityRow {
    mass: f64,
    radius: f64,
    central_density: f64,
}

/// Write one row per sweep parameter. Failed integrations give empty cells.
pub fn write_stars<W: Write>(writer: W,
                             parameters: &[f64],
                             stars: &[Option<StarProperties>]) -> Result<(), DataError> {
    if parameters.len() != stars.len() {
        return Err(DataError::LengthMismatch {
            parameters: parameters.len(),
            stars: stars.len(),
        });
    }
    let mut writer = csv::Writer::from_writer(writer);
    for (parameter, star) in parameters.iter().zip(stars) {
        writer.serialize(StarRow {
            central_density: *parameter,
            mass: star.map(|s| s.mass),
            radius: star.map(|s| s.radius),
            proper_mass: star.map(|s| s.proper_mass),
            binding_energy: star.map(|s| s.fractional_binding_energy()),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_max_masses<W: Write>(writer: W, points: &[MaxMassPoint]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_profile<W: Write>(writer: W, solution: &LaneEmdenSolution) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    for (xi, theta) in solution.profile() {
        writer.serialize(ProfileRow { xi, theta })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_central_densities<W: Write>(writer: W,
                                         masses: &[f64],
                                         radii: &[f64],
                                         densities: &[f64]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    for ((mass, radius), central_density) in masses.iter().zip(radii).zip(densities) {
        writer.serialize(CentralDensityRow {
            mass: *mass,
            radius: *radius,
            central_density: *central_density,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and pass it to `write`
pub fn save_to_file<F>(path: &Path, write: F) -> Result<(), DataError>
    where F: FnOnce(File) -> Result<(), DataError> {
    let file = File::create(path)?;
    write(file)?;
    log::info!("Saved {}", path.display());
    Ok(())
}
