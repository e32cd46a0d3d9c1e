use thiserror::Error;

/// Why a single integration has no valid result
#[derive(Clone, Debug, PartialEq, Error)]
pub enum IntegrationError {
    /// Input rejected before the first step
    #[error("{name} must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// Derivative became infinite or the radius fell inside `2 * mass`
    #[error("integration diverged at step {step} (radius {radius})")]
    IntegrationDivergence { step: usize, radius: f64 },
    /// No surface within the iteration ceiling
    #[error("no surface after {steps} steps")]
    ConvergenceFailure { steps: usize },
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, IntegrationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(IntegrationError::InvalidParameter { name, value })
    }
}
