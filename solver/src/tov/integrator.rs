use std::f64::consts::PI;
use stellar_core::{StarProperties, TovSample, TovSettings};
use crate::error::{check_positive, IntegrationError};
use crate::marching::{Advance, Marcher, Recurrence, Termination};
use crate::tov::EquationOfState;

/// Integrator of the Tolman-Oppenheimer-Volkoff equations.
///
/// Every step mixes samples `i - 1` and `i`:
///
/// ```text
/// r[i+1]  = r[i] + h
/// m[i+1]  = m[i-1] + 8 pi h r[i]^2 rho[i]
/// dv      = 2 (m[i] + 4 pi r[i]^3 rho[i]) / (r[i] (r[i] - 2 m[i]))
/// v[i+1]  = v[i-1] + 2 h dv
/// p[i+1]  = p[i-1] - h (rho[i] + p[i]) dv
/// mp[i+1] = mp[i-1] + 8 pi h (1 - 2 m[i] / r[i])^(-1/2) r[i]^2 rho[i]
/// ```
///
/// and the density follows from the pressure through the equation of state.
#[derive(Clone, Debug, PartialEq)]
pub struct TovIntegrator {
    eos: EquationOfState,
    step: f64,
    start_radius: f64,
    radius_unit: f64,
    marcher: Marcher,
}

/// Star together with every valid sample from the center to the surface
#[derive(Clone, Debug, PartialEq)]
pub struct TovProfile {
    pub star: StarProperties,
    pub samples: Vec<TovSample>,
}

struct Star<'a> {
    integrator: &'a TovIntegrator,
    central_density: f64,
    track_proper_mass: bool,
}

impl Recurrence for Star<'_> {
    type Sample = TovSample;

    fn seed(&self) -> [TovSample; 2] {
        let eos = &self.integrator.eos;
        let pressure = eos.pressure(self.central_density);
        [
            TovSample::center(0.0, pressure, self.central_density),
            TovSample::center(self.integrator.start_radius, pressure, self.central_density),
        ]
    }

    fn advance(&self,
               previous: &TovSample,
               current: &TovSample,
               index: usize) -> Result<Advance<TovSample>, IntegrationError> {
        let h = self.integrator.step;
        let r = current.radius;
        let m = current.mass;
        let rho = current.density;

        let horizon = r - 2.0 * m;
        if !(horizon > 0.0) {
            return Err(IntegrationError::IntegrationDivergence { step: index, radius: r });
        }
        let potential_derivative = 2.0 * (m + 4.0 * PI * r.powi(3) * rho) / (r * horizon);
        if !potential_derivative.is_finite() {
            return Err(IntegrationError::IntegrationDivergence { step: index, radius: r });
        }

        let pressure = previous.pressure - h * (rho + current.pressure) * potential_derivative;
        let proper_mass = if self.track_proper_mass {
            previous.proper_mass
                + 8.0 * h * PI * (1.0 - (2.0 * m / r)).powf(-0.5) * r.powi(2) * rho
        } else {
            0.0
        };
        let next = TovSample {
            radius: r + h,
            mass: previous.mass + 8.0 * h * PI * r.powi(2) * rho,
            potential: previous.potential + potential_derivative * 2.0 * h,
            pressure,
            density: 0.0,
            proper_mass,
        };
        Ok(match self.integrator.eos.density(pressure) {
            Some(density) => Advance::Interior(TovSample { density, ..next }),
            None => Advance::Boundary(next),
        })
    }
}

impl TovIntegrator {
    pub fn new(settings: &TovSettings) -> Result<Self, IntegrationError> {
        Ok(Self {
            eos: EquationOfState::new(settings.eos_constant)?,
            step: check_positive("step", settings.step)?,
            start_radius: check_positive("start_radius", settings.start_radius)?,
            radius_unit: check_positive("radius_unit", settings.radius_unit)?,
            marcher: Marcher::new(settings.max_steps)?,
        })
    }

    /// Same integrator with another equation of state constant
    pub fn with_eos_constant(&self, k: f64) -> Result<Self, IntegrationError> {
        Ok(Self {
            eos: EquationOfState::new(k)?,
            ..self.clone()
        })
    }

    pub fn eos(&self) -> &EquationOfState {
        &self.eos
    }

    /// Integrate star with `central_density` up to its surface.
    ///
    /// # Errors
    ///
    /// * [IntegrationError::InvalidParameter] - `central_density` isn't finite and positive
    /// * [IntegrationError::IntegrationDivergence] - radius fell inside `2 * mass`
    /// before the pressure vanished
    /// * [IntegrationError::ConvergenceFailure] - pressure is still positive
    /// after the iteration ceiling
    pub fn integrate(&self, central_density: f64) -> Result<StarProperties, IntegrationError> {
        let star = self.star(central_density, true)?;
        let termination = self.marcher.run(&star)?.require_surface()?;
        Ok(self.surface(central_density, &termination))
    }

    /// Total mass only. Proper mass isn't integrated.
    pub fn surface_mass(&self, central_density: f64) -> Result<f64, IntegrationError> {
        let star = self.star(central_density, false)?;
        let termination = self.marcher.run(&star)?.require_surface()?;
        Ok(termination.surface().mass)
    }

    /// Like [TovIntegrator::integrate], keeping every sample up to the surface.
    /// The sample that crossed the surface isn't included.
    pub fn profile(&self, central_density: f64) -> Result<TovProfile, IntegrationError> {
        let star = self.star(central_density, true)?;
        let mut samples = vec![];
        let termination = self.marcher
            .run_with(&star, |sample| samples.push(*sample))?
            .require_surface()?;
        samples.pop();
        Ok(TovProfile {
            star: self.surface(central_density, &termination),
            samples,
        })
    }

    fn star(&self, central_density: f64, track_proper_mass: bool) -> Result<Star<'_>, IntegrationError> {
        Ok(Star {
            integrator: self,
            central_density: check_positive("central_density", central_density)?,
            track_proper_mass,
        })
    }

    fn surface(&self, central_density: f64, termination: &Termination<TovSample>) -> StarProperties {
        let surface = termination.surface();
        log::debug!("Star with central density {:e} reached surface after {} steps",
                    central_density, termination.steps);
        StarProperties {
            central_density,
            mass: surface.mass,
            radius: surface.radius / self.radius_unit,
            proper_mass: surface.proper_mass,
        }
    }
}
