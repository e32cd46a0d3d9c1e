use std::f64::consts::PI;
use stellar_core::LaneEmdenSolution;
use crate::calibration::{check_lengths, check_positive, check_profile, CalibrationError};

/// Central density of a polytrope of `mass` and `radius`:
/// `M xi / (4 pi R^3 (-theta'(xi)))`
pub fn central_density(solution: &LaneEmdenSolution, mass: f64, radius: f64) -> Result<f64, CalibrationError> {
    check_positive("mass", mass)?;
    check_positive("radius", radius)?;
    let derivative = check_profile(solution.boundary_derivative)?;
    Ok(mass * solution.xi / (4.0 * PI * radius.powi(3) * (-derivative)))
}

pub fn central_densities(solution: &LaneEmdenSolution,
                         masses: &[f64],
                         radii: &[f64]) -> Result<Vec<f64>, CalibrationError> {
    check_lengths(masses, radii)?;
    masses
        .iter()
        .zip(radii)
        .map(|(mass, radius)| central_density(solution, *mass, *radius))
        .collect()
}
