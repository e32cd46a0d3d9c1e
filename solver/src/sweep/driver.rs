use rayon::prelude::*;
use thiserror::Error;
use stellar_core::{FailurePolicy, StarProperties, SweepSettings};
use crate::error::IntegrationError;
use crate::tov::TovIntegrator;

/// Integration of one sweep parameter that failed
#[derive(Clone, Debug, PartialEq, Error)]
#[error("integration #{index} (parameter {parameter:e}) failed: {source}")]
pub struct SweepFailure {
    pub index: usize,
    pub parameter: f64,
    pub source: IntegrationError,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SweepError {
    #[error("sweep has no parameters")]
    NoParameters,
    #[error(transparent)]
    Failed(#[from] SweepFailure),
    #[error("all {0} integrations of the sweep failed")]
    NothingConverged(usize),
}

/// Stars of a sweep in the order of its parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SweepResult {
    pub parameters: Vec<f64>,
    /// `None` where integration failed and the failure was recorded
    pub stars: Vec<Option<StarProperties>>,
    pub failures: Vec<SweepFailure>,
}

impl SweepResult {
    /// Total masses, `NaN` for failed integrations
    pub fn masses(&self) -> Vec<f64> {
        self.column(|star| star.mass)
    }

    /// Radii, `NaN` for failed integrations
    pub fn radii(&self) -> Vec<f64> {
        self.column(|star| star.radius)
    }

    /// Fractional binding energies, `NaN` for failed integrations
    pub fn binding_energies(&self) -> Vec<f64> {
        self.column(|star| star.fractional_binding_energy())
    }

    /// Pairs of radius and fractional binding energy of integrated stars
    pub fn binding_curve(&self) -> Vec<(f64, f64)> {
        self.stars
            .iter()
            .flatten()
            .map(|star| (star.radius, star.fractional_binding_energy()))
            .collect()
    }

    fn column<F: Fn(&StarProperties) -> f64>(&self, value: F) -> Vec<f64> {
        self.stars
            .iter()
            .map(|star| star.as_ref().map_or(f64::NAN, &value))
            .collect()
    }
}

/// Runs one independent integration per parameter.
///
/// Output keeps the order of the parameters whether or not the work is
/// spread over the rayon pool. Integrations share nothing, each one builds
/// its own state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    settings: SweepSettings,
}

impl Sweep {
    pub fn new(settings: &SweepSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    pub fn with_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.settings.failure_policy = failure_policy;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.settings.parallel = false;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.settings.failure_policy
    }

    /// Mass, radius and binding energy for every central density
    pub fn mass_radius(&self,
                       integrator: &TovIntegrator,
                       densities: &[f64]) -> Result<SweepResult, SweepError> {
        self.mass_radius_with_progress(integrator, densities, || {})
    }

    /// Same as [Sweep::mass_radius], `progress` is called after each integration
    pub fn mass_radius_with_progress<P>(&self,
                                        integrator: &TovIntegrator,
                                        densities: &[f64],
                                        progress: P) -> Result<SweepResult, SweepError>
        where P: Fn() + Sync {
        log::info!("Mass-radius sweep over {} central densities, k = {}",
                   densities.len(), integrator.eos().constant());
        let outcomes = self.evaluate(densities, |x| integrator.integrate(x), progress)?;
        let (stars, failures) = self.settle(densities, outcomes)?;
        Ok(SweepResult {
            parameters: densities.to_vec(),
            stars,
            failures,
        })
    }

    /// Run `integrate` for every parameter and keep the outcomes in order
    pub fn evaluate<T, F, P>(&self,
                             parameters: &[f64],
                             integrate: F,
                             progress: P) -> Result<Vec<Result<T, IntegrationError>>, SweepError>
        where T: Send, F: Fn(f64) -> Result<T, IntegrationError> + Sync, P: Fn() + Sync {
        if parameters.is_empty() {
            return Err(SweepError::NoParameters);
        }
        let run = |parameter: &f64| {
            let outcome = integrate(*parameter);
            progress();
            outcome
        };
        let outcomes: Vec<Result<T, IntegrationError>> = if self.settings.parallel {
            parameters.par_iter().map(&run).collect()
        } else {
            parameters.iter().map(&run).collect()
        };
        Ok(outcomes)
    }

    /// Apply the failure policy to outcomes of [Sweep::evaluate].
    ///
    /// `Abort` returns the failure with the lowest index. `Record` leaves
    /// `None` in its slot and lists it.
    pub fn settle<T>(&self,
                     parameters: &[f64],
                     outcomes: Vec<Result<T, IntegrationError>>)
        -> Result<(Vec<Option<T>>, Vec<SweepFailure>), SweepError> {
        let mut values = Vec::with_capacity(outcomes.len());
        let mut failures = vec![];
        for (index, (parameter, outcome)) in parameters.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(value) => values.push(Some(value)),
                Err(source) => {
                    let failure = SweepFailure {
                        index,
                        parameter: *parameter,
                        source,
                    };
                    match self.settings.failure_policy {
                        FailurePolicy::Abort => return Err(failure.into()),
                        FailurePolicy::Record => {
                            log::warn!("{}", failure);
                            failures.push(failure);
                            values.push(None);
                        }
                    }
                }
            }
        }
        Ok((values, failures))
    }
}
