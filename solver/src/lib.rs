extern crate stellar_core;
extern crate nalgebra as na;
extern crate rayon;
pub mod calibration;
mod error;
pub mod lane_emden;
pub mod marching;
pub mod sweep;
pub mod tov;

pub use error::IntegrationError;
