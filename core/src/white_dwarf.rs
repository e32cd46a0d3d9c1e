use std::fs::File;
use std::io::Read;
use std::path::Path;
use crate::constants::{EARTH_RADIUS, GRAVITATIONAL_CONSTANT, SOLAR_MASS};
use crate::DataError;

const LOG_G_COLUMN: usize = 1;
const MASS_COLUMN: usize = 2;

/// Observed white dwarf
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhiteDwarf {
    /// Decimal logarithm of surface gravity in cgs units
    pub log_g: f64,
    /// Mass in solar masses
    pub mass: f64,
}

impl WhiteDwarf {
    /// Radius in Earth radii, from `g = G * M / R^2`
    pub fn radius(&self) -> f64 {
        let g_si = 10f64.powf(self.log_g - 2.0);
        (GRAVITATIONAL_CONSTANT * SOLAR_MASS * self.mass / g_si).sqrt() / EARTH_RADIUS
    }
}

/// Read white dwarfs from csv file with header.
/// Second column is `log g`, third is mass. Result is sorted by mass.
pub fn read_white_dwarfs(path: &Path) -> Result<Vec<WhiteDwarf>, DataError> {
    let file = File::open(path)?;
    let stars = read_white_dwarfs_from(file)?;
    log::info!("Read {} white dwarfs from {}", stars.len(), path.display());
    Ok(stars)
}

pub fn read_white_dwarfs_from<R: Read>(reader: R) -> Result<Vec<WhiteDwarf>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut stars = vec![];
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = |column: usize| -> Result<f64, DataError> {
            let value = record
                .get(column)
                .ok_or(DataError::MissingColumn { row, column })?;
            value.trim().parse::<f64>().map_err(|_| DataError::InvalidNumber {
                row,
                column,
                value: value.to_string(),
            })
        };
        stars.push(WhiteDwarf {
            log_g: field(LOG_G_COLUMN)?,
            mass: field(MASS_COLUMN)?,
        });
    }
    stars.sort_by(|a, b| a.mass.total_cmp(&b.mass).then(a.log_g.total_cmp(&b.log_g)));
    Ok(stars)
}

/// Keep stars with `ln(mass) < ln_mass_cutoff`. Order is kept.
pub fn filter_low_mass(stars: &[WhiteDwarf], ln_mass_cutoff: f64) -> Vec<WhiteDwarf> {
    stars
        .iter()
        .filter(|star| star.mass.ln() < ln_mass_cutoff)
        .copied()
        .collect()
}
