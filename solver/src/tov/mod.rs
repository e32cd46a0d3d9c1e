mod eos;
mod integrator;

pub use eos::*;
pub use integrator::*;
