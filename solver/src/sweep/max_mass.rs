use stellar_core::{linspace, MaxMassPoint};
use crate::sweep::{Sweep, SweepError, SweepFailure};
use crate::tov::TovIntegrator;

const GRID_POINTS: usize = 20;

/// Central densities scanned for equation of state constant `k`.
/// The maximum mass sits inside `[1.25e-3 / k, 2.5 / k]` for the stiffness range of interest.
pub fn default_density_grid(k: f64) -> Vec<f64> {
    linspace(1.25e-3 / k, 2.5 / k, GRID_POINTS)
}

/// First point whose maximum mass is above `threshold`
pub fn first_exceeding(points: &[MaxMassPoint], threshold: f64) -> Option<&MaxMassPoint> {
    points.iter().find(|point| point.max_mass > threshold)
}

impl Sweep {
    /// Largest total mass over `densities`, for the integrator's equation of state
    pub fn max_mass(&self, integrator: &TovIntegrator, densities: &[f64]) -> Result<f64, SweepError> {
        let outcomes = self.evaluate(densities, |x| integrator.surface_mass(x), || {})?;
        let (masses, _) = self.settle(densities, outcomes)?;
        masses
            .into_iter()
            .flatten()
            .reduce(f64::max)
            .ok_or(SweepError::NothingConverged(densities.len()))
    }

    /// Maximum mass for every constant in `eos_constants`, densities from `grid(k)`.
    ///
    /// A non-positive constant fails the whole curve whatever the failure policy.
    pub fn max_mass_curve<G, P>(&self,
                                integrator: &TovIntegrator,
                                eos_constants: &[f64],
                                grid: G,
                                progress: P) -> Result<Vec<MaxMassPoint>, SweepError>
        where G: Fn(f64) -> Vec<f64>, P: Fn() {
        if eos_constants.is_empty() {
            return Err(SweepError::NoParameters);
        }
        let mut points = Vec::with_capacity(eos_constants.len());
        for (index, &k) in eos_constants.iter().enumerate() {
            let integrator = integrator
                .with_eos_constant(k)
                .map_err(|source| SweepFailure {
                    index,
                    parameter: k,
                    source,
                })?;
            let max_mass = self.max_mass(&integrator, &grid(k))?;
            log::info!("Maximum mass {:.5} for k = {:.2}", max_mass, k);
            points.push(MaxMassPoint {
                eos_constant: k,
                max_mass,
            });
            progress();
        }
        Ok(points)
    }
}
