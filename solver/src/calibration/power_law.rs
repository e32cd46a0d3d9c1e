use itertools::Itertools;
use na::{DMatrix, DVector};
use crate::calibration::{check_lengths, check_positive, CalibrationError};

/// `M = amplitude * R^slope`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerLawFit {
    pub amplitude: f64,
    pub slope: f64,
}

impl PowerLawFit {
    /// `q` of the polytrope implied by the slope, with index `n = q / (5 - q)`
    pub fn polytropic_q(&self) -> f64 {
        5.0 / 2.0 - 5.0 / (2.0 * self.slope - 4.0)
    }

    pub fn mass_at(&self, radius: f64) -> f64 {
        self.amplitude * radius.powf(self.slope)
    }
}

/// Least squares line through `(ln R, ln M)`
pub fn fit_power_law(masses: &[f64], radii: &[f64]) -> Result<PowerLawFit, CalibrationError> {
    check_lengths(masses, radii)?;
    if masses.len() < 2 {
        return Err(CalibrationError::TooFewPoints {
            required: 2,
            got: masses.len(),
        });
    }
    for (mass, radius) in masses.iter().zip(radii) {
        check_positive("mass", *mass)?;
        check_positive("radius", *radius)?;
    }
    if radii.iter().all_equal() {
        return Err(CalibrationError::Singular("all radii are equal"));
    }
    let n = masses.len();
    let design = DMatrix::from_fn(n, 2, |row, column| {
        if column == 0 { 1.0 } else { radii[row].ln() }
    });
    let target = DVector::from_iterator(n, masses.iter().map(|mass| mass.ln()));
    let coefficients = design
        .svd(true, true)
        .solve(&target, f64::EPSILON)
        .map_err(CalibrationError::Singular)?;
    Ok(PowerLawFit {
        amplitude: coefficients[0].exp(),
        slope: coefficients[1],
    })
}
