use std::f64::consts::PI;
use stellar_core::constants::*;
use stellar_core::LaneEmdenSolution;
use crate::calibration::{check_positive, check_profile, CalibrationError};

/// Polytropic constant `K` of `P = K rho^(5/3)` in two unit systems
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalityConstant {
    /// Solar masses and Earth radii, `G` absorbed
    pub scaled: f64,
    /// SI units
    pub si: f64,
}

/// `K` from the amplitude of the fitted `M = A R^-3` law of low-mass white dwarfs
pub fn proportionality_constant(amplitude: f64,
                                solution: &LaneEmdenSolution) -> Result<ProportionalityConstant, CalibrationError> {
    check_positive("amplitude", amplitude)?;
    let derivative = check_profile(solution.boundary_derivative)?;
    let modified_g = GRAVITATIONAL_CONSTANT * SOLAR_MASS / EARTH_RADIUS.powi(3);
    let constant_term = 2.5f64.powi(3) * (4.0 * PI).powi(-2);
    let b = constant_term * derivative * (-solution.xi.powi(5));
    let unit_scale = EARTH_RADIUS * SOLAR_MASS.powf(1.0 / 3.0);
    let ratio = (amplitude / b).powf(1.0 / 3.0);
    Ok(ProportionalityConstant {
        scaled: modified_g * ratio,
        si: GRAVITATIONAL_CONSTANT * ratio * unit_scale,
    })
}

/// Constants of the degenerate electron gas, `P = C f(x)`, `rho = D x^3`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyticalConstants {
    pub c: f64,
    pub d: f64,
    /// Low density limit `K = 8 C / (5 D^(5/3))`
    pub k: f64,
}

impl AnalyticalConstants {
    pub fn compute() -> Self {
        let hbar_cubed = REDUCED_PLANCK_CONSTANT.powi(3);
        let c = ELECTRON_MASS.powi(4) * SPEED_OF_LIGHT.powi(5) / (24.0 * PI.powi(2) * hbar_cubed);
        let d = ATOMIC_MASS * ELECTRON_MASS.powi(3) * SPEED_OF_LIGHT.powi(3) * 2.0
            / (3.0 * PI.powi(2) * hbar_cubed);
        let k = 1.6 * c / d.powf(5.0 / 3.0);
        Self { c, d, k }
    }
}

/// `|estimate - exact| / exact` in percent
pub fn relative_error_percent(estimate: f64, exact: f64) -> f64 {
    100.0 * (estimate - exact).abs() / exact
}
