use crate::error::{check_positive, IntegrationError};

/// Equation of state `pressure = k * density^2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquationOfState {
    k: f64,
}

impl EquationOfState {
    pub fn new(k: f64) -> Result<Self, IntegrationError> {
        Ok(Self {
            k: check_positive("k", k)?,
        })
    }

    pub fn constant(&self) -> f64 {
        self.k
    }

    pub fn pressure(&self, density: f64) -> f64 {
        self.k * density.powi(2)
    }

    /// Inverse of [EquationOfState::pressure].
    ///
    /// Returns `None` when `pressure` is not strictly positive, which means
    /// there is no matter left: the surface has been crossed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stellar_solver::tov::EquationOfState;
    /// let eos = EquationOfState::new(4.0).unwrap();
    /// assert_eq!(eos.density(16.0), Some(2.0));
    /// assert_eq!(eos.density(0.0), None);
    /// assert_eq!(eos.density(-1e-12), None);
    /// assert_eq!(eos.density(f64::NAN), None);
    /// ```
    pub fn density(&self, pressure: f64) -> Option<f64> {
        if pressure > 0.0 {
            Some(pressure.sqrt() / self.k.sqrt())
        } else {
            None
        }
    }
}
