use serde::{Deserialize, Serialize};

/// Structure that keeps one point of a TOV integration
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TovSample {
    /// Areal radius in integration units
    pub radius: f64,
    /// Gravitational mass enclosed by `radius`
    pub mass: f64,
    /// Metric potential
    pub potential: f64,
    /// Pressure of the fluid
    pub pressure: f64,
    /// Density. Always derived from `pressure` by the equation of state
    pub density: f64,
    /// Rest mass integrated over the proper volume. Stays zero if not tracked
    pub proper_mass: f64,
}

impl TovSample {
    /// Create sample at `radius` with empty interior.
    ///
    /// # Arguments
    ///
    /// * `radius` - radius of the sample
    /// * `pressure` - central pressure
    /// * `density` - central density, must agree with `pressure`
    ///
    /// # Examples
    ///
    /// ```
    /// # use stellar_core::TovSample;
    /// let sample = TovSample::center(1e-3, 1e-8, 1e-5);
    /// assert_eq!(sample.mass, 0.0);
    /// assert_eq!(sample.proper_mass, 0.0);
    /// assert_eq!(sample.density, 1e-5);
    /// ```
    pub fn center(radius: f64, pressure: f64, density: f64) -> Self {
        TovSample {
            radius,
            mass: 0.0,
            potential: 0.0,
            pressure,
            density,
            proper_mass: 0.0,
        }
    }
}

/// Observables of a star taken at its surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarProperties {
    /// Density parameter the star was integrated from
    pub central_density: f64,
    /// Total gravitational mass
    pub mass: f64,
    /// Areal radius in the reporting unit
    pub radius: f64,
    /// Total rest mass
    pub proper_mass: f64,
}

impl StarProperties {
    /// Fraction of the proper mass released as binding energy, relative to `mass`
    pub fn fractional_binding_energy(&self) -> f64 {
        (self.proper_mass - self.mass) / self.mass
    }
}

/// Maximum mass over a density sweep for one equation of state constant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaxMassPoint {
    pub eos_constant: f64,
    pub max_mass: f64,
}

/// Solution of the Lane-Emden equation.
///
/// `samples` ends with the first non-positive value. That last value is kept
/// because the boundary derivative is taken against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneEmdenSolution {
    /// Dimensionless density profile, `samples[0] == samples[1] == 1`
    pub samples: Vec<f64>,
    /// Step in the dimensionless radius
    pub step: f64,
    /// Dimensionless radius of the polytrope
    pub xi: f64,
    /// Derivative of the profile at `xi`
    pub boundary_derivative: f64,
}

impl LaneEmdenSolution {
    /// Pairs of dimensionless radius and profile value
    pub fn profile(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, theta)| (i as f64 * self.step, *theta))
    }
}
