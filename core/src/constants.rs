//! Physical constants and default integration parameters.
//!
//! SI values are the ones the white dwarf calibration was tuned against.

/// Solar mass in kg
pub const SOLAR_MASS: f64 = 1.988e30;
/// Mean Earth radius in m. Used as the radius unit for white dwarfs
pub const EARTH_RADIUS: f64 = 6.371e6;
/// Newtonian gravitational constant in SI units
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67384e-11;
/// Atomic mass unit in kg
pub const ATOMIC_MASS: f64 = 1.66053907e-27;
/// Electron mass in kg
pub const ELECTRON_MASS: f64 = 9.1093847e-31;
/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// Reduced Planck constant in J*s
pub const REDUCED_PLANCK_CONSTANT: f64 = 1.054571817e-34;

/// Equation of state constant used for neutron star sweeps
pub const DEFAULT_EOS_CONSTANT: f64 = 100.0;
/// Radial step of the TOV recurrence
pub const DEFAULT_TOV_STEP: f64 = 1e-3;
/// First non-zero radius. The origin itself is a coordinate singularity
pub const DEFAULT_START_RADIUS: f64 = 1e-3;
/// Integration radius is divided by this to get the reported radius
pub const DEFAULT_RADIUS_UNIT: f64 = 1.5;
/// Step of the Lane-Emden recurrence in the dimensionless radius
pub const DEFAULT_LANE_EMDEN_STEP: f64 = 1e-4;
/// n = 3/2, non-relativistic degenerate electron gas
pub const DEFAULT_POLYTROPIC_INDEX: f64 = 1.5;
/// Upper bound on steps of a single integration
pub const DEFAULT_MAX_STEPS: usize = 10_000_000;
/// Observed maximum neutron star mass in solar masses
pub const EMPIRICAL_MAXIMUM_MASS: f64 = 2.14;
/// `ln(M)` below which a white dwarf is treated as low-mass
pub const DEFAULT_LOW_MASS_CUTOFF: f64 = -1.1;
