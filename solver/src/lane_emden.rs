use stellar_core::{LaneEmdenSettings, LaneEmdenSolution};
use crate::error::{check_positive, IntegrationError};
use crate::marching::{Advance, Marcher, Recurrence};

/// Integrator of the Lane-Emden equation `theta'' + 2 theta' / xi + theta^n = 0`.
///
/// Central differences on the grid `xi = i * h` give
///
/// ```text
/// f[i+1] = (h f[i-1] + 2 i h f[i] - i h f[i-1] - h^3 i f[i]^n) / (h (i + 1))
/// ```
///
/// started from `f[0] = f[1] = 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneEmdenIntegrator {
    step: f64,
    polytropic_index: f64,
    marcher: Marcher,
}

struct Polytrope {
    step: f64,
    index: f64,
}

impl Recurrence for Polytrope {
    type Sample = f64;

    fn seed(&self) -> [f64; 2] {
        [1.0, 1.0]
    }

    fn advance(&self, previous: &f64, current: &f64, count: usize) -> Result<Advance<f64>, IntegrationError> {
        let h = self.step;
        let i = count as f64;
        let next = (h * previous
            + 2.0 * i * h * current
            - i * h * previous
            - h.powi(3) * i * current.powf(self.index))
            / (h * (i + 1.0));
        if !next.is_finite() {
            return Err(IntegrationError::IntegrationDivergence { step: count, radius: i * h });
        }
        if next > 0.0 {
            Ok(Advance::Interior(next))
        } else {
            Ok(Advance::Boundary(next))
        }
    }
}

impl LaneEmdenIntegrator {
    pub fn new(settings: &LaneEmdenSettings) -> Result<Self, IntegrationError> {
        Ok(Self {
            step: check_positive("step", settings.step)?,
            polytropic_index: check_positive("polytropic_index", settings.polytropic_index)?,
            marcher: Marcher::new(settings.max_steps)?,
        })
    }

    /// Integrate until the profile stops being positive.
    ///
    /// The returned samples end with the first non-positive value. `xi` is
    /// the index of that value times the step, and the boundary derivative is
    /// the central difference `(f[last] - f[last - 2]) / 2h` around the last
    /// positive sample.
    pub fn solve(&self) -> Result<LaneEmdenSolution, IntegrationError> {
        let polytrope = Polytrope {
            step: self.step,
            index: self.polytropic_index,
        };
        let mut samples = vec![];
        let termination = self.marcher
            .run_with(&polytrope, |sample| samples.push(*sample))?
            .require_surface()?;
        let xi = (samples.len() - 1) as f64 * self.step;
        let boundary_derivative =
            (termination.sentinel() - termination.before_surface()) / (2.0 * self.step);
        log::debug!("Lane-Emden n = {}: xi = {}, derivative = {} after {} steps",
                    self.polytropic_index, xi, boundary_derivative, termination.steps);
        Ok(LaneEmdenSolution {
            samples,
            step: self.step,
            xi,
            boundary_derivative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_grid_first_samples() {
        let settings = LaneEmdenSettings {
            step: 1e-2,
            ..LaneEmdenSettings::default()
        };
        let solution = LaneEmdenIntegrator::new(&settings)
            .expect("Can't create integrator")
            .solve()
            .expect("Can't solve");
        assert_eq!(solution.samples[0], 1.0);
        assert_eq!(solution.samples[1], 1.0);
        assert_eq!(format!("{:.12}", solution.samples[2]), "0.999950000000");
        assert_eq!(format!("{:.12}", solution.samples[3]), "0.999866671667");
        assert_eq!(solution.samples.len(), 367);
        assert_eq!(format!("{:.4}", solution.xi), "3.6600");
        assert_eq!(format!("{:.4}", solution.boundary_derivative), "-0.2037");
    }

    #[test]
    fn ceiling() {
        let settings = LaneEmdenSettings {
            max_steps: 100,
            ..LaneEmdenSettings::default()
        };
        let res = LaneEmdenIntegrator::new(&settings)
            .expect("Can't create integrator")
            .solve();
        assert_eq!(res, Err(IntegrationError::ConvergenceFailure { steps: 100 }));
    }

    #[test]
    fn invalid_settings() {
        let settings = LaneEmdenSettings {
            step: 0.0,
            ..LaneEmdenSettings::default()
        };
        assert_eq!(LaneEmdenIntegrator::new(&settings),
                   Err(IntegrationError::InvalidParameter { name: "step", value: 0.0 }));
    }
}
