mod density;
mod polytropic_constant;
mod power_law;

pub use density::*;
pub use polytropic_constant::*;
pub use power_law::*;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalibrationError {
    #[error("{masses} masses but {radii} radii")]
    LengthMismatch { masses: usize, radii: usize },
    #[error("at least {required} points are needed, got {got}")]
    TooFewPoints { required: usize, got: usize },
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("boundary derivative must be negative, got {0}")]
    IncreasingProfile(f64),
    #[error("least squares failed: {0}")]
    Singular(&'static str),
}

pub(crate) fn check_lengths(masses: &[f64], radii: &[f64]) -> Result<(), CalibrationError> {
    if masses.len() != radii.len() {
        return Err(CalibrationError::LengthMismatch {
            masses: masses.len(),
            radii: radii.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, CalibrationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalibrationError::NonPositive { name, value })
    }
}

pub(crate) fn check_profile(derivative: f64) -> Result<f64, CalibrationError> {
    if derivative < 0.0 {
        Ok(derivative)
    } else {
        Err(CalibrationError::IncreasingProfile(derivative))
    }
}
